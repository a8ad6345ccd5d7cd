//! Edge cases integration tests for the vote counter.
//!
//! These tests exercise the public API directly under boundary conditions:
//! identifier normalization corner cases, malformed submissions, and the
//! concrete two-candidate scenario from the project requirements.

use std::collections::BTreeSet;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use vote_counter::ballot::{IDENT_SEPARATOR, Roster, name_to_ident, render_ballot};
use vote_counter::vote::{VoteLog, accept_votes};
use vote_counter::{AppState, Config, VoteError, create_router};

#[test]
fn test_ident_normalization_scenarios() {
    assert_eq!(name_to_ident("Jane Doe"), "Jane-Doe");
    assert_eq!(name_to_ident("Bob O'Brien"), "Bob-O-Brien");
    assert_eq!(name_to_ident("Anne-Marie  Smith"), "Anne-Marie-Smith");
    assert_eq!(name_to_ident("---"), "-");
    assert_eq!(name_to_ident(""), "");
    assert_eq!(name_to_ident("42"), "42");
    // Non-ASCII letters normalize away like any other non-alphanumerics.
    assert_eq!(name_to_ident("Zoë"), "Zo-");
}

#[test]
fn test_ident_alphabet_is_closed() {
    let names = ["Jane Doe", "Bob O'Brien", "  odd  name!  ", "日本語"];
    for name in names {
        let ident = name_to_ident(name);
        assert!(
            ident
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == IDENT_SEPARATOR),
            "ident {ident:?} for {name:?} contains unexpected characters"
        );
        assert!(!ident.contains("--"), "ident {ident:?} has uncollapsed run");
    }
}

#[test]
fn test_ballot_entry_count_matches_roster() {
    for n in 1..=10 {
        let names: Vec<String> = (0..n).map(|i| format!("Person {i}")).collect();
        let roster = Roster::from_names(names).unwrap();
        let page = render_ballot(2, &roster);
        assert_eq!(page.matches(r#"type="checkbox""#).count(), n);
    }
}

#[tokio::test]
async fn test_vote_at_exact_limit_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let roster = Roster::from_names(["Jane Doe", "Bob O'Brien"]).unwrap();
    let log = VoteLog::new(dir.path());
    let selections: BTreeSet<String> =
        ["Jane-Doe", "Bob-O-Brien"].iter().map(|s| s.to_string()).collect();

    accept_votes(&roster, 2, &log, &selections).await.unwrap();
    assert!(log.path_for("Jane-Doe").exists());
    assert!(log.path_for("Bob-O-Brien").exists());
}

#[tokio::test]
async fn test_append_failure_surfaces_as_io_error() {
    let roster = Roster::from_names(["Jane Doe"]).unwrap();
    let log = VoteLog::new("/definitely/not/a/dir");
    let selections: BTreeSet<String> = ["Jane-Doe".to_string()].into_iter().collect();

    let err = accept_votes(&roster, 1, &log, &selections).await.unwrap_err();
    assert!(matches!(err, VoteError::Append(_)));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_non_form_content_type_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        max_votes: 2,
        people: vec!["Jane Doe".to_string()],
        host: "127.0.0.1".to_string(),
        port: 0,
        data_dir: dir.path().to_path_buf(),
    };
    let app = create_router(Arc::new(AppState::new(config).unwrap()));

    let request = Request::builder()
        .method("POST")
        .uri("/vote")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"Jane-Doe": "on"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    // RawForm refuses non-form bodies before the handler runs.
    assert!(response.status().is_client_error());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
