use std::collections::HashSet;

use crate::candidates::CandidateSet;
use crate::config::LinkConfig;
use crate::matcher::find_matches;
use crate::render::render;
use crate::scanning::{self, MarkupShape, Segment};
use crate::targets::{IndexError, TargetIndex};

/// Result of one linking run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOutcome {
    /// The body with every kept match rewritten into markup.
    pub text: String,
    /// Number of references inserted.
    pub insertions: usize,
}

/// Orchestrates one linking run: scan, match, filter, render, splice.
///
/// Stateless beyond its configuration; running it on its own output
/// yields the identical text and zero further insertions.
pub struct Linker {
    config: LinkConfig,
    shapes: Vec<Box<dyn MarkupShape>>,
}

impl Linker {
    /// A linker with the default protected-shape set.
    pub fn new(config: LinkConfig) -> Self {
        Self::with_shapes(config, scanning::default_shapes())
    }

    /// A linker with a host-supplied protected-shape set.
    pub fn with_shapes(config: LinkConfig, shapes: Vec<Box<dyn MarkupShape>>) -> Self {
        Self { config, shapes }
    }

    /// Rewrites plain-text mentions of other documents' titles in `body`
    /// into wikilink markup.
    ///
    /// `source_title` is the document being linked; it is never linked to
    /// itself. Only an [`IndexError`] from the host's index can fail the
    /// run; it is propagated unchanged.
    pub fn link_content(
        &self,
        source_title: &str,
        body: &str,
        index: &dyn TargetIndex,
    ) -> Result<LinkOutcome, IndexError> {
        let candidates = CandidateSet::build(index, source_title, &self.config)?;
        if body.is_empty() || candidates.is_empty() {
            return Ok(LinkOutcome {
                text: body.to_string(),
                insertions: 0,
            });
        }

        let segments = scanning::scan_segments(body, &self.shapes);

        // One "consumed" marker per canonical title covers both
        // pre-existing links and links inserted earlier in this pass.
        let mut consumed: HashSet<String> = HashSet::new();
        let mut out = String::with_capacity(body.len());
        let mut insertions = 0;

        for segment in &segments {
            match segment {
                Segment::Protected { full, link } => {
                    if let Some(link) = link
                        && let Some(canonical) = index.resolve(link.target.slice(body))?
                    {
                        consumed.insert(canonical);
                    }
                    out.push_str(full.slice(body));
                }
                Segment::Linkable(span) => {
                    let mut pos = span.start;
                    for m in find_matches(body, *span, &candidates, &self.config) {
                        let seen = !consumed.insert(m.canonical.clone());
                        if self.config.first_only && seen {
                            // Discarded, not rendered: the verbatim text
                            // stays in place via the next copy below.
                            continue;
                        }
                        out.push_str(&body[pos..m.span.start]);
                        out.push_str(&render(&m, m.span.slice(body)));
                        insertions += 1;
                        pos = m.span.end;
                    }
                    out.push_str(&body[pos..span.end]);
                }
            }
        }

        Ok(LinkOutcome {
            text: out,
            insertions,
        })
    }
}
