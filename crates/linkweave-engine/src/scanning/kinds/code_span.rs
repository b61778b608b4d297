use crate::span::Span;

use super::super::{
    cursor::Cursor,
    types::{MarkupShape, Protected},
};

/// Inline code, backtick-delimited. A raw zone: nothing inside it is
/// ever linked.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}

impl MarkupShape for CodeSpan {
    fn try_scan(&self, cur: &mut Cursor<'_>) -> Option<Protected> {
        if cur.peek() != Some(Self::TICK) {
            return None;
        }

        let start = cur.pos();
        cur.bump(); // opening `

        while !cur.eof() {
            if cur.peek() == Some(Self::TICK) {
                cur.bump(); // closing `
                return Some(Protected {
                    full: Span {
                        start,
                        end: cur.pos(),
                    },
                    link: None,
                });
            }
            cur.bump();
        }

        // Unterminated: protect the remainder of the body.
        Some(Protected {
            full: Span {
                start,
                end: cur.pos(),
            },
            link: None,
        })
    }
}
