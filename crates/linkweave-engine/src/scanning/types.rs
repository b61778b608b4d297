use crate::span::Span;

use super::cursor::Cursor;

/// One piece of the body, as classified by the scanner.
///
/// Segments partition the body exhaustively and in order: concatenating
/// every segment's span reproduces the body byte for byte.
#[derive(Debug, Clone)]
pub enum Segment {
    /// Plain text; the matcher may insert links here.
    Linkable(Span),
    /// Existing markup; never touched by the matcher.
    Protected {
        /// Full span including delimiters.
        full: Span,
        /// Present when the markup is itself a reference to another
        /// document, so the linker can account for it.
        link: Option<LinkMarkup>,
    },
}

impl Segment {
    /// The full span this segment covers.
    pub fn span(&self) -> Span {
        match self {
            Segment::Linkable(sp) => *sp,
            Segment::Protected { full, .. } => *full,
        }
    }
}

/// The parts of a pre-existing reference found by the scanner.
#[derive(Debug, Clone)]
pub struct LinkMarkup {
    /// Span of the target (document title).
    pub target: Span,
    /// Span of the display alias, if present.
    pub alias: Option<Span>,
}

/// A protected region consumed by one [`MarkupShape`].
#[derive(Debug, Clone)]
pub struct Protected {
    /// Full span including delimiters.
    pub full: Span,
    /// Reference parts, when the shape is link markup.
    pub link: Option<LinkMarkup>,
}

/// One kind of markup the scanner must not link into.
///
/// The shape set is an explicit parameter of the scanner so hosts can
/// extend it beyond the shipped shapes without touching the engine.
///
/// Contract for `try_scan`: when the shape does not begin at the cursor,
/// return `None` with the cursor unmoved. When it does begin, consume it
/// and return the protected region; an opened but unterminated shape
/// consumes to the end of the body (a half-written construct must never
/// be linked into).
pub trait MarkupShape {
    fn try_scan(&self, cur: &mut Cursor<'_>) -> Option<Protected>;
}
