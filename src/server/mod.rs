//! Web server module for the vote counter.
//!
//! Contains the axum router and the HTTP handlers that serve the ballot
//! and accept vote submissions.

pub mod routes;

// Re-export main server functionality
pub use routes::*;
