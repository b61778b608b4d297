/// A byte range `[start, end)` into a document body.
///
/// The scanner and matcher produce spans rather than copied text, so the
/// linker can splice rendered markup back in while leaving every untouched
/// byte of the body exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices the body text this span refers to.
    ///
    /// Spans are only ever produced at char boundaries of the body they
    /// were scanned from, so slicing with the same body cannot panic.
    #[must_use]
    pub fn slice(self, body: &str) -> &str {
        &body[self.start..self.end]
    }
}
