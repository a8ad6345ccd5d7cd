//! Candidate model and identifier normalization.
//!
//! A candidate's display name is free text; its identifier is a normalized
//! token derived from the name that is safe to use both as an HTML form
//! field name and as a vote log file stem.

use std::collections::HashMap;

use crate::error::ConfigError;

/// Separator substituted for runs of non-alphanumeric characters.
pub const IDENT_SEPARATOR: char = '-';

/// Derives a candidate's identifier from its display name.
///
/// Every maximal run of characters outside `[A-Za-z0-9]` collapses into a
/// single [`IDENT_SEPARATOR`], including runs at the start or end of the
/// name. The result therefore contains only ASCII alphanumerics and single
/// separators, so it needs no further escaping in markup, form bodies, or
/// file names.
///
/// ```
/// use vote_counter::ballot::name_to_ident;
///
/// assert_eq!(name_to_ident("Jane Doe"), "Jane-Doe");
/// assert_eq!(name_to_ident("Bob O'Brien"), "Bob-O-Brien");
/// ```
pub fn name_to_ident(name: &str) -> String {
    let mut ident = String::with_capacity(name.len());
    let mut in_run = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            ident.push(ch);
            in_run = false;
        } else if !in_run {
            ident.push(IDENT_SEPARATOR);
            in_run = true;
        }
    }
    ident
}

/// A single ballot entry: display name plus derived identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub ident: String,
}

impl Candidate {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let ident = name_to_ident(&name);
        Candidate { name, ident }
    }
}

/// The configured candidate set, in ballot order, with identifier lookup.
///
/// Built once at startup from the configured names and immutable for the
/// process lifetime. Identifier uniqueness is enforced here: two names
/// that normalize to the same identifier would share a vote log, so the
/// collision is a fatal configuration error.
#[derive(Debug, Clone)]
pub struct Roster {
    candidates: Vec<Candidate>,
    by_ident: HashMap<String, usize>,
}

impl Roster {
    /// Builds a roster from configured display names, preserving order.
    pub fn from_names<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut candidates = Vec::new();
        let mut by_ident = HashMap::new();
        for name in names {
            let candidate = Candidate::new(name);
            if let Some(&existing) = by_ident.get(&candidate.ident) {
                let first: &Candidate = &candidates[existing];
                return Err(ConfigError::DuplicateIdent {
                    first: first.name.clone(),
                    second: candidate.name,
                    ident: first.ident.clone(),
                });
            }
            by_ident.insert(candidate.ident.clone(), candidates.len());
            candidates.push(candidate);
        }
        Ok(Roster {
            candidates,
            by_ident,
        })
    }

    /// Whether `ident` names a configured candidate.
    pub fn contains(&self, ident: &str) -> bool {
        self.by_ident.contains_key(ident)
    }

    /// Candidates in ballot order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
