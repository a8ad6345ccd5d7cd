//! Route handlers for the vote counter web server.
//!
//! Three endpoints: the ballot page, the vote submission endpoint, and a
//! health check. Each request is handled to completion independently;
//! the shared state is immutable, so no locking is involved.

use axum::{
    Router,
    extract::{RawForm, State},
    response::{Html, Json},
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::ballot::{Roster, render_ballot};
use crate::config::Config;
use crate::error::{ConfigError, VoteError};
use crate::vote::{self, VoteLog};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Immutable per-process state shared by all handlers.
pub struct AppState {
    pub config: Config,
    pub roster: Roster,
    pub log: VoteLog,
    /// The ballot is a pure function of the immutable configuration, so
    /// it is rendered once here and served verbatim.
    ballot_page: String,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Builds the process state from a validated configuration. Fails if
    /// two configured names collide on the same identifier.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let roster = Roster::from_names(config.people.iter().cloned())?;
        let log = VoteLog::new(&config.data_dir);
        let ballot_page = render_ballot(config.max_votes, &roster);
        Ok(AppState {
            config,
            roster,
            log,
            ballot_page,
        })
    }
}

/// Basic health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running!".to_string(),
    })
}

/// Serves the rendered ballot page.
pub async fn index(State(state): State<SharedState>) -> Html<String> {
    Html(state.ballot_page.clone())
}

/// Accepts a vote submission.
///
/// The body is urlencoded form data whose field names are candidate
/// identifiers. On success the response is an empty JSON object; on
/// validation failure a 400 with a short reason string.
pub async fn vote(
    State(state): State<SharedState>,
    RawForm(body): RawForm,
) -> Result<Json<serde_json::Value>, VoteError> {
    let fields: Vec<(String, String)> = serde_urlencoded::from_bytes(&body).map_err(|e| {
        warn!("unparseable vote body: {e}");
        VoteError::MalformedForm
    })?;
    let selections = vote::collect_selections(&fields);

    vote::accept_votes(
        &state.roster,
        state.config.max_votes,
        &state.log,
        &selections,
    )
    .await?;

    Ok(Json(serde_json::json!({})))
}

/// Creates and configures the main application router
pub fn create_router(state: SharedState) -> Router {
    info!(
        candidates = state.roster.len(),
        max_votes = state.config.max_votes,
        "ballot ready"
    );
    Router::new()
        .route("/", get(index))
        .route("/vote", post(vote))
        .route("/health", get(health))
        .with_state(state)
}
