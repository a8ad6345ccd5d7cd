//! Ballot domain: the candidate roster and the rendered ballot page.

pub mod candidate;
pub mod render;

pub use candidate::{Candidate, IDENT_SEPARATOR, Roster, name_to_ident};
pub use render::render_ballot;
