use std::collections::HashMap;

use thiserror::Error;

/// Failure of the target index capability itself, not of any particular
/// title (an unknown title is `Ok(None)`). The engine propagates this
/// unchanged and never retries; retry policy belongs to the host's
/// storage layer.
#[derive(Debug, Error)]
#[error("target index lookup failed: {reason}")]
pub struct IndexError {
    reason: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl IndexError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            source: None,
        }
    }

    pub fn with_source(
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Read-only capability over the host's document store: which titles
/// exist, and what the canonical spelling of a bare reference is.
///
/// Implementations are expected to be point-in-time snapshots; the
/// engine never treats staleness as an error.
pub trait TargetIndex {
    /// All linkable titles known to the host, in canonical spelling.
    fn titles(&self) -> Result<Vec<String>, IndexError>;

    /// Resolves a bare reference to its canonical spelling, applying the
    /// host's first-letter capitalization rule. Unknown titles are
    /// `Ok(None)`.
    fn resolve(&self, title: &str) -> Result<Option<String>, IndexError>;
}

/// In-memory snapshot index over a list of canonical titles.
pub struct MemoryIndex {
    titles: Vec<String>,
    by_key: HashMap<String, usize>,
    capital_links: bool,
}

impl MemoryIndex {
    /// Builds an index from canonical titles. `capital_links` is the
    /// host's rule: when true, a reference resolves regardless of the
    /// case of its first letter.
    pub fn new<I, S>(titles: I, capital_links: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        let by_key = titles
            .iter()
            .enumerate()
            .map(|(i, t)| (resolution_key(t, capital_links), i))
            .collect();
        Self {
            titles,
            by_key,
            capital_links,
        }
    }
}

impl TargetIndex for MemoryIndex {
    fn titles(&self) -> Result<Vec<String>, IndexError> {
        Ok(self.titles.clone())
    }

    fn resolve(&self, title: &str) -> Result<Option<String>, IndexError> {
        let key = resolution_key(title, self.capital_links);
        Ok(self.by_key.get(&key).map(|&i| self.titles[i].clone()))
    }
}

/// Normal form under the first-letter rule: first char lowercased when
/// `capital_links` is set, everything else untouched.
fn resolution_key(title: &str, capital_links: bool) -> String {
    if !capital_links {
        return title.to_string();
    }
    let mut chars = title.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
