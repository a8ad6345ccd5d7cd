//! # Vote Counter
//!
//! A small single-page voting web application. It serves a ballot of named
//! candidates, accepts a bounded-size vote submission per request, and
//! appends accepted votes to per-candidate flat log files.
//!
//! ## Behavior
//!
//! - **Ballot presentation**: `GET /` renders one checkbox per configured
//!   candidate, with a client-side guard enforcing the vote limit and
//!   asking for confirmation before submitting.
//! - **Vote acceptance**: `POST /vote` validates the submitted field names
//!   (count against `max_votes`, membership in the candidate set) and then
//!   appends one timestamp line per selected candidate to that candidate's
//!   `<identifier>.votes` file.
//!
//! Validation is all-or-nothing and precedes every write, but the writes
//! themselves are not grouped: a failed append does not roll back appends
//! already made for other candidates in the same request. Files are opened
//! with append semantics so concurrent single-line writes never interleave.
//!
//! ## Example
//!
//! ```rust
//! use vote_counter::ballot::{Roster, render_ballot};
//!
//! let roster = Roster::from_names(["Jane Doe", "Bob O'Brien"]).unwrap();
//! let page = render_ballot(2, &roster);
//! assert!(page.contains("Jane-Doe"));
//! ```

pub mod ballot;
pub mod config;
pub mod error;
pub mod server;
pub mod vote;

// Re-export the main public API
pub use ballot::{Candidate, Roster, name_to_ident, render_ballot};
pub use config::Config;
pub use error::{ConfigError, VoteError};
pub use server::{AppState, SharedState, create_router};
pub use vote::VoteLog;
