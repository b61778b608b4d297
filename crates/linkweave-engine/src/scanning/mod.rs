pub mod cursor;
pub mod kinds;
pub mod types;

use cursor::Cursor;
use kinds::{BareUrl, CodeFence, CodeSpan, WikiLink};

pub use types::{LinkMarkup, MarkupShape, Protected, Segment};

use crate::span::Span;

/// The shape set used when a host does not supply its own: fenced code,
/// inline code, existing wikilinks, bare URLs, in that precedence order.
///
/// Code shapes come before [`WikiLink`] so that `[[x]]` inside backticks
/// is protected as code rather than recorded as a reference.
pub fn default_shapes() -> Vec<Box<dyn MarkupShape>> {
    vec![
        Box::new(CodeFence),
        Box::new(CodeSpan),
        Box::new(WikiLink),
        Box::new(BareUrl),
    ]
}

/// Partitions the body into `Linkable` and `Protected` segments.
///
/// Single pass: at each byte position the shapes are tried in order; the
/// first one that consumes a region wins and scanning resumes after it.
/// Text between protected regions is emitted as `Linkable`. The scanner
/// has no notion of titles, only of markup shape, and it never fails:
/// malformed markup is absorbed by the shapes' unterminated handling.
pub fn scan_segments(body: &str, shapes: &[Box<dyn MarkupShape>]) -> Vec<Segment> {
    let mut cur = Cursor::new(body);
    let mut out = vec![];
    let mut text_start = 0;

    // Helper to flush accumulated text as a Linkable segment
    fn flush_text(out: &mut Vec<Segment>, start: usize, end: usize) {
        if end > start {
            out.push(Segment::Linkable(Span { start, end }));
        }
    }

    'scan: while !cur.eof() {
        for shape in shapes {
            if let Some(p) = shape.try_scan(&mut cur) {
                flush_text(&mut out, text_start, p.full.start);
                text_start = p.full.end;
                out.push(Segment::Protected {
                    full: p.full,
                    link: p.link,
                });
                continue 'scan;
            }
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}
