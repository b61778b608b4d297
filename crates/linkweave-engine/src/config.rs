use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Immutable policy bundle for one linking run.
///
/// Constructed once per invocation and never mutated; concurrent runs
/// over different documents can share a clone freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Link at most one occurrence per distinct title in the whole body.
    pub first_only: bool,
    /// Also match fully case-insensitively, rendering those matches as
    /// display-preserving aliases.
    pub smart_mode: bool,
    /// Titles that must never be linked, even on exact match.
    pub black_list: HashSet<String>,
    /// Whether the host resolves the first letter of a title
    /// case-insensitively.
    pub capital_links: bool,
    /// Require matches to begin at a word boundary.
    pub word_start_only: bool,
    /// Require matches to end at a word boundary.
    pub word_end_only: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            first_only: false,
            smart_mode: true,
            black_list: HashSet::new(),
            capital_links: true,
            word_start_only: true,
            word_end_only: false,
        }
    }
}
