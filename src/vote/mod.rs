//! Vote acceptance: submission parsing, validation, and durable recording.
//!
//! A submission is the set of distinct form field names posted to `/vote`.
//! Validation is all-or-nothing and happens before any write; the appends
//! themselves are not transactionally grouped, so a failure partway
//! through leaves earlier appends in place (see the crate docs).

pub mod log;

use std::collections::BTreeSet;

use chrono::Local;
use tracing::{debug, info};

use crate::ballot::Roster;
use crate::error::VoteError;
pub use log::VoteLog;

/// Collects the distinct field names of a decoded form body.
///
/// Values are discarded: a checkbox submission carries no payload beyond
/// the field name, and repeated fields count once. Every submitted field
/// counts toward the vote limit, whether or not it names a candidate.
pub fn collect_selections(fields: &[(String, String)]) -> BTreeSet<String> {
    fields.iter().map(|(name, _)| name.clone()).collect()
}

/// One human-readable timestamp, in `asctime(3)` style, for a whole
/// accepted submission.
pub fn timestamp_now() -> String {
    Local::now().format("%a %b %e %H:%M:%S %Y").to_string()
}

/// Validates a submission and records one vote per selected candidate.
///
/// Checks run in order: the selection count against `max_votes`, then
/// every identifier against the roster. Only after both pass is the
/// request timestamp computed, once, and appended to each selected
/// candidate's log.
pub async fn accept_votes(
    roster: &Roster,
    max_votes: usize,
    log: &VoteLog,
    selections: &BTreeSet<String>,
) -> Result<(), VoteError> {
    if selections.len() > max_votes {
        debug!(
            submitted = selections.len(),
            max = max_votes,
            "rejecting over-limit submission"
        );
        return Err(VoteError::TooManyVotes {
            submitted: selections.len(),
            max: max_votes,
        });
    }

    for ident in selections {
        if !roster.contains(ident) {
            debug!(ident = %ident, "rejecting unknown candidate");
            return Err(VoteError::UnknownCandidate(ident.clone()));
        }
    }

    let timestamp = timestamp_now();
    for ident in selections {
        log.append(ident, &timestamp).await?;
    }

    info!(votes = selections.len(), "recorded votes at {timestamp}");
    Ok(())
}
