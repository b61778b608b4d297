use crate::span::Span;

use super::super::{
    cursor::Cursor,
    types::{MarkupShape, Protected},
};

/// A bare URL in running text. Protected so a document title that
/// happens to appear inside an address is never rewritten.
pub struct BareUrl;

impl BareUrl {
    pub const SCHEMES: [&'static str; 2] = ["https://", "http://"];
}

impl MarkupShape for BareUrl {
    fn try_scan(&self, cur: &mut Cursor<'_>) -> Option<Protected> {
        // The scheme must start a word; an embedded "http://" inside a
        // longer word is not an address. A position inside a multibyte
        // character is by definition mid-word, so bail before slicing.
        if !cur.s.is_char_boundary(cur.pos())
            || cur.s[..cur.pos()]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric())
        {
            return None;
        }
        let scheme = Self::SCHEMES
            .iter()
            .find(|s| cur.starts_with(s.as_bytes()))?;

        let start = cur.pos();
        cur.bump_n(scheme.len());
        while let Some(b) = cur.peek() {
            if b.is_ascii_whitespace() {
                break;
            }
            cur.bump();
        }

        Some(Protected {
            full: Span {
                start,
                end: cur.pos(),
            },
            link: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(s: &str) -> Option<Protected> {
        BareUrl.try_scan(&mut Cursor::new(s))
    }

    #[test]
    fn url_runs_to_whitespace() {
        let body = "https://example.org/some/page and text";
        let p = scan(body).unwrap();
        assert_eq!(p.full.slice(body), "https://example.org/some/page");
    }

    #[test]
    fn url_at_end_of_body() {
        let body = "http://example.org";
        let p = scan(body).unwrap();
        assert_eq!(p.full, Span { start: 0, end: body.len() });
    }

    #[test]
    fn not_a_url() {
        assert!(scan("httpish text").is_none());
    }

    #[test]
    fn scheme_must_start_a_word() {
        let body = "seehttp://x rest";
        let mut cur = Cursor::new(body);
        cur.bump_n(3); // at the embedded "http://"
        assert!(BareUrl.try_scan(&mut cur).is_none());
        assert_eq!(cur.pos(), 3);

        // After punctuation the scheme does start a word.
        let body = "(https://example.org)";
        let mut cur = Cursor::new(body);
        cur.bump();
        assert!(BareUrl.try_scan(&mut cur).is_some());
    }
}
