//! Error types for the vote counter.
//!
//! Configuration problems are fatal at startup and never reach a request
//! handler; vote-time problems map onto HTTP responses via `IntoResponse`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;

/// Errors raised while loading or validating the startup configuration.
///
/// All of these abort the process; there is no recovery path once the
/// configuration is known to be bad.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("max_votes must be at least 1")]
    ZeroMaxVotes,

    #[error("people list must not be empty")]
    NoPeople,

    /// Two configured names normalize to the same form-field identifier.
    /// The identifier doubles as the vote log file stem, so a collision
    /// would silently merge two candidates' logs.
    #[error("candidates {first:?} and {second:?} both normalize to identifier {ident:?}")]
    DuplicateIdent {
        first: String,
        second: String,
        ident: String,
    },

    #[error("invalid listen host {host:?}: {source}")]
    InvalidHost {
        host: String,
        source: std::net::AddrParseError,
    },
}

/// Errors raised while handling a vote submission.
#[derive(Debug, Error)]
pub enum VoteError {
    /// The request body was not valid urlencoded form data.
    #[error("Malformed form body")]
    MalformedForm,

    /// More distinct form fields were submitted than `max_votes` allows.
    #[error("Too many votes")]
    TooManyVotes { submitted: usize, max: usize },

    /// A submitted field name does not match any configured candidate.
    #[error("Bad person")]
    UnknownCandidate(String),

    /// A vote log could not be appended to.
    #[error("failed to record vote: {0}")]
    Append(#[from] std::io::Error),
}

impl VoteError {
    /// HTTP status this error maps to: validation failures are the
    /// client's fault, append failures are ours.
    pub fn status(&self) -> StatusCode {
        match self {
            VoteError::MalformedForm
            | VoteError::TooManyVotes { .. }
            | VoteError::UnknownCandidate(_) => StatusCode::BAD_REQUEST,
            VoteError::Append(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for VoteError {
    fn into_response(self) -> Response {
        let status = self.status();
        let reason = match &self {
            // Persistence details stay in the log, not the response body.
            VoteError::Append(source) => {
                error!("vote log append failed: {source}");
                "Failed to record vote".to_string()
            }
            other => other.to_string(),
        };
        (status, reason).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_client_errors() {
        let too_many = VoteError::TooManyVotes {
            submitted: 3,
            max: 2,
        };
        assert_eq!(too_many.status(), StatusCode::BAD_REQUEST);
        assert_eq!(too_many.to_string(), "Too many votes");

        let unknown = VoteError::UnknownCandidate("Nobody".to_string());
        assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
        assert_eq!(unknown.to_string(), "Bad person");
    }

    #[test]
    fn test_append_errors_are_server_errors() {
        let err = VoteError::Append(std::io::Error::other("disk full"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
