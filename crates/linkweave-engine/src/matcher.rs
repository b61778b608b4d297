use crate::candidates::CandidateSet;
use crate::config::LinkConfig;
use crate::span::Span;

/// How a matched substring relates to its canonical title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The verbatim text is itself a valid reference to the title; it
    /// only needs wrapping.
    Exact,
    /// The verbatim text names the title but is not a valid reference
    /// string; rendering must alias it to the canonical spelling.
    Aliased,
}

/// A confirmed title occurrence inside one linkable segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMatch {
    /// Span of the verbatim text, in body-absolute byte offsets.
    pub span: Span,
    /// Canonical title the match resolves to.
    pub canonical: String,
    pub kind: MatchKind,
}

/// Finds candidate-title occurrences within one linkable segment.
///
/// Scans left to right at char boundaries. At each position candidates
/// are tried longest-first; per candidate the baseline rule is tried
/// before the smart rule. After a hit, scanning resumes immediately
/// after the matched span, so matches never overlap.
pub fn find_matches(
    body: &str,
    segment: Span,
    candidates: &CandidateSet,
    config: &LinkConfig,
) -> Vec<TitleMatch> {
    let seg = segment.slice(body);
    let mut out = Vec::new();
    let mut prev_char: Option<char> = None;
    let mut i = 0;

    while i < seg.len() {
        let Some(ch) = seg[i..].chars().next() else {
            break;
        };

        let at_word_start = prev_char.is_none_or(|p| !p.is_alphanumeric());
        if (at_word_start || !config.word_start_only)
            && let Some((end, canonical, kind)) = try_candidates_at(seg, i, candidates, config)
        {
            out.push(TitleMatch {
                span: Span {
                    start: segment.start + i,
                    end: segment.start + end,
                },
                canonical,
                kind,
            });
            prev_char = seg[..end].chars().next_back();
            i = end;
            continue;
        }

        prev_char = Some(ch);
        i += ch.len_utf8();
    }

    out
}

/// Tries every candidate at byte position `i` of the segment, longest
/// first. Returns the end offset, canonical title, and kind of the first
/// candidate that matches.
fn try_candidates_at(
    seg: &str,
    i: usize,
    candidates: &CandidateSet,
    config: &LinkConfig,
) -> Option<(usize, String, MatchKind)> {
    let rest = &seg[i..];
    for cand in candidates.iter() {
        let Some(len) = char_prefix_len(rest, cand.chars) else {
            // Too long to fit; a shorter candidate may still match.
            continue;
        };
        if config.word_end_only
            && rest[len..]
                .chars()
                .next()
                .is_some_and(|c| c.is_alphanumeric())
        {
            continue;
        }
        let verbatim = &rest[..len];
        if baseline_eq(verbatim, &cand.title, config.capital_links) {
            return Some((i + len, cand.title.clone(), MatchKind::Exact));
        }
        if config.smart_mode && smart_eq(verbatim, &cand.title) {
            return Some((i + len, cand.title.clone(), MatchKind::Aliased));
        }
    }
    None
}

/// Byte length of the prefix of `s` holding exactly `n_chars` chars, or
/// `None` if `s` is shorter than that.
fn char_prefix_len(s: &str, n_chars: usize) -> Option<usize> {
    if n_chars == 0 {
        return None;
    }
    let mut seen = 0;
    for (idx, ch) in s.char_indices() {
        seen += 1;
        if seen == n_chars {
            return Some(idx + ch.len_utf8());
        }
    }
    None
}

/// Baseline comparison: char-wise equality, with the first char compared
/// case-insensitively iff `capital_links`. This mirrors how the host
/// resolves a bare reference, so a baseline match needs no aliasing.
pub fn baseline_eq(s: &str, title: &str, capital_links: bool) -> bool {
    let mut a = s.chars();
    let mut b = title.chars();
    match (a.next(), b.next()) {
        (Some(x), Some(y)) => {
            let first_ok = if capital_links {
                chars_eq_ci(x, y)
            } else {
                x == y
            };
            first_ok && a.eq(b)
        }
        (None, None) => true,
        _ => false,
    }
}

/// Smart comparison: fully case-insensitive, char-wise.
pub fn smart_eq(s: &str, title: &str) -> bool {
    let mut a = s.chars();
    let mut b = title.chars();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => {
                if !chars_eq_ci(x, y) {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

fn chars_eq_ci(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
