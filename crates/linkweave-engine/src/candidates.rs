use crate::config::LinkConfig;
use crate::matcher::baseline_eq;
use crate::targets::{IndexError, TargetIndex};

/// One title eligible for linking, with its char length precomputed for
/// the longest-first tie-break.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub title: String,
    pub chars: usize,
}

/// The titles eligible for linking in one run: every index title except
/// the source document's own title and anything black-listed. Built once
/// per run, read-only thereafter.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    // Sorted by descending char length so the matcher tries longer
    // titles first and a short title never shadows a longer one.
    titles: Vec<Candidate>,
}

impl CandidateSet {
    pub fn build(
        index: &dyn TargetIndex,
        source_title: &str,
        config: &LinkConfig,
    ) -> Result<Self, IndexError> {
        let mut titles: Vec<Candidate> = index
            .titles()?
            .into_iter()
            .filter(|t| !t.is_empty())
            .filter(|t| !same_document(t, source_title, config.capital_links))
            .filter(|t| {
                !config
                    .black_list
                    .iter()
                    .any(|b| same_document(t, b, config.capital_links))
            })
            .map(|t| Candidate {
                chars: t.chars().count(),
                title: t,
            })
            .collect();
        titles.sort_by(|a, b| b.chars.cmp(&a.chars).then_with(|| a.title.cmp(&b.title)));
        Ok(Self { titles })
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Candidates in descending char-length order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.titles.iter()
    }
}

/// Two titles name the same document when they are equal under the
/// host's first-letter rule.
pub fn same_document(a: &str, b: &str, capital_links: bool) -> bool {
    baseline_eq(a, b, capital_links)
}
