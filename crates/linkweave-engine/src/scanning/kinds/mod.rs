//! # Markup kinds
//!
//! One module per protected markup shape, each owning its own delimiter
//! constants. The scanner and renderer call these constants; they never
//! hardcode `[[` or `` ` `` themselves.
//!
//! Shipped shapes, in the precedence order used by
//! [`default_shapes`](super::default_shapes):
//!
//! - **`CodeFence`**: triple-backtick fenced block, line-anchored
//! - **`CodeSpan`**: inline code, `TICK = b'\`'`
//! - **`WikiLink`**: `OPEN = "[["`, `CLOSE = "]]"`, `ALIAS = b'|'`
//! - **`BareUrl`**: `http://` / `https://` runs up to whitespace

pub mod bare_url;
pub mod code_fence;
pub mod code_span;
pub mod wikilink;

pub use bare_url::BareUrl;
pub use code_fence::CodeFence;
pub use code_span::CodeSpan;
pub use wikilink::WikiLink;
