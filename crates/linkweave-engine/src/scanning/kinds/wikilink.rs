use crate::span::Span;

use super::super::{
    cursor::Cursor,
    types::{LinkMarkup, MarkupShape, Protected},
};

/// Wiki-style reference markup, `[[target]]` or `[[target|alias]]`.
///
/// The delimiter constants live here; the renderer uses them too.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";
    pub const ALIAS: u8 = b'|';
}

impl MarkupShape for WikiLink {
    fn try_scan(&self, cur: &mut Cursor<'_>) -> Option<Protected> {
        if !cur.starts_with(Self::OPEN.as_bytes()) {
            return None;
        }

        let start = cur.pos();
        cur.bump_n(Self::OPEN.len());
        let target_start = cur.pos();

        while !cur.eof() {
            if cur.peek() == Some(Self::ALIAS) {
                break;
            }
            if cur.starts_with(Self::CLOSE.as_bytes()) {
                break;
            }
            cur.bump();
        }
        let target_end = cur.pos();

        let mut alias = None;
        if cur.peek() == Some(Self::ALIAS) {
            cur.bump(); // |
            let alias_start = cur.pos();
            while !cur.eof() {
                if cur.starts_with(Self::CLOSE.as_bytes()) {
                    break;
                }
                cur.bump();
            }
            alias = Some(Span {
                start: alias_start,
                end: cur.pos(),
            });
        }

        if !cur.starts_with(Self::CLOSE.as_bytes()) {
            // Unterminated: protect the remainder of the body.
            return Some(Protected {
                full: Span {
                    start,
                    end: cur.pos(),
                },
                link: None,
            });
        }
        cur.bump_n(Self::CLOSE.len());

        Some(Protected {
            full: Span {
                start,
                end: cur.pos(),
            },
            link: Some(LinkMarkup {
                target: Span {
                    start: target_start,
                    end: target_end,
                },
                alias,
            }),
        })
    }
}
