pub mod candidates;
pub mod config;
pub mod linker;
pub mod matcher;
pub mod render;
pub mod scanning;
pub mod span;
pub mod targets;

// Re-export key types for easier usage
pub use config::LinkConfig;
pub use linker::{LinkOutcome, Linker};
pub use matcher::{MatchKind, TitleMatch};
pub use span::Span;
pub use targets::{IndexError, MemoryIndex, TargetIndex};
