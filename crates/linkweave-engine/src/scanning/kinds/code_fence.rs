use crate::span::Span;

use super::super::{
    cursor::Cursor,
    types::{MarkupShape, Protected},
};

/// A fenced code block. Only recognized at the start of a line; the
/// opening fence line (including any info string) and everything up to
/// and including the closing fence line are protected.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";
}

impl MarkupShape for CodeFence {
    fn try_scan(&self, cur: &mut Cursor<'_>) -> Option<Protected> {
        if !cur.at_line_start() || !cur.starts_with(Self::FENCE.as_bytes()) {
            return None;
        }

        let start = cur.pos();
        cur.bump_line(); // opening fence line

        while !cur.eof() {
            let closing = cur.starts_with(Self::FENCE.as_bytes());
            cur.bump_line();
            if closing {
                break;
            }
        }
        // An unclosed fence runs to end of body, which is exactly the
        // conservative behavior we want.

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
        CodeFence.try_scan(&mut Cursor::new(s))
    }

    #[test]
    fn fence_with_info_string() {
        let body = "```rust\nlet x = 1;\n```\nafter";
        let p = scan(body).unwrap();
        assert_eq!(p.full.slice(body), "```rust\nlet x = 1;\n```\n");
    }

    #[test]
    fn only_at_line_start() {
        let mut cur = Cursor::new("text ```\nnot a fence");
        cur.bump_n(5);
        assert!(CodeFence.try_scan(&mut cur).is_none());
    }

    #[test]
    fn unterminated_protects_remainder() {
        let body = "```\nstill inside\nand inside";
        let p = scan(body).unwrap();
        assert_eq!(p.full, Span { start: 0, end: body.len() });
    }
}
