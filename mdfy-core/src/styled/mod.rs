//! Inline styled-text engine.
//!
//! Plain text may carry bracket markers of the form `[content:style]`.
//! Markers nest, so `[A [B:italic] C:bold]` becomes `**A *B* C**`. A bracket
//! without a style suffix is literal text and is kept with its brackets,
//! while its content is still scanned for nested markers.
//!
//! - [`parser`]: the recursive-descent grammar
//! - [`patterns`]: style names, aliases and their templates
//! - [`TextFormatter`]: parse + render with graceful fallback
mod formatter;
pub mod parser;
pub mod patterns;

pub use formatter::{TextFormatter, TextStyler};
pub use parser::{Node, ParseError};
pub use patterns::StylePatterns;
