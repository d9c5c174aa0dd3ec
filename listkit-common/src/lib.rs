//! # listkit Common Utilities
//!
//! Shared building blocks for the listkit toolkit, kept in the same
//! functional style as the algorithms that consume them.
//!
//! ## Modules
//!
//! - [`list`]: Functional sequence operations (`filter`, `map`, `enumerate_interval`)
//! - [`error`]: The toolkit-wide [`ToolkitError`] and its `Result` alias
//!
//! ## Design Principles
//!
//! 1. **Pure Functional**: Operations return new values instead of mutating
//! 2. **Ownership-based**: Borrow inputs as slices, hand back owned `Vec`s
//! 3. **Iterator-centric**: Use iterator combinators for sequence operations
//! 4. **Typed failures**: Absence is `Option`, failure is [`ToolkitError`]

pub mod error;
pub mod list;

// Re-export main types for convenience
pub use error::{BoxError, Result, ToolkitError};
