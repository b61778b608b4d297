use crate::matcher::{MatchKind, TitleMatch};
use crate::scanning::kinds::WikiLink;

/// Renders a confirmed match as wikilink markup.
///
/// Exact matches wrap the verbatim text as-is; aliased matches keep the
/// verbatim text on display while resolving to the canonical spelling.
/// Pure function of its inputs; cannot fail.
pub fn render(m: &TitleMatch, verbatim: &str) -> String {
    match m.kind {
        MatchKind::Exact => format!("{}{}{}", WikiLink::OPEN, verbatim, WikiLink::CLOSE),
        MatchKind::Aliased => format!(
            "{}{}{}{}{}",
            WikiLink::OPEN,
            m.canonical,
            WikiLink::ALIAS as char,
            verbatim,
            WikiLink::CLOSE
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    fn title_match(kind: MatchKind) -> TitleMatch {
        TitleMatch {
            span: Span { start: 0, end: 0 },
            canonical: "Link target".to_string(),
            kind,
        }
    }

    #[test]
    fn exact_uses_verbatim_text_only() {
        let m = title_match(MatchKind::Exact);
        assert_eq!(render(&m, "link target"), "[[link target]]");
    }

    #[test]
    fn aliased_resolves_to_canonical() {
        let m = title_match(MatchKind::Aliased);
        assert_eq!(render(&m, "Link Target"), "[[Link target|Link Target]]");
    }
}
