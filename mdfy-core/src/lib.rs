//! # mdfy - compose Markdown documents from typed building blocks
//!
//! Documents are nested sequences of elements (headers, styled text, lists,
//! tables, code, quotes, images, links, rules and tables of contents). They
//! are flattened, rendered one element at a time and written to a file.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdfy_core::{MdHeader, MdTableOfContents, MdText, Mdfier, contents};
//!
//! let markdown = Mdfier::stringify(contents![
//!   MdHeader::new("Guide"),
//!   MdTableOfContents::new(),
//!   MdHeader::with_level("Usage", 2),
//!   MdText::new("Run it [twice:bold], it is [idempotent:italic]."),
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!   markdown,
//!   "# Guide\n  - [Usage](#usage)\n\n## Usage\nRun it **twice**, it is *idempotent*."
//! );
//! ```
//!
//! ## Features
//!
//! - **Styled text** with nested `[content:style]` markers and short aliases
//! - **Tables** from records or JSON, with flattening of nested objects,
//!   transposition, row labels, custom headers and float precision
//! - **Tables of contents** that list the headers following them, or the
//!   headers of an explicit snapshot
//! - **Graceful degradation**: malformed style markup and unknown styles
//!   never abort rendering
//!
//! ## Styled Text
//!
//! ```rust
//! use mdfy_core::styled::TextFormatter;
//!
//! let formatter = TextFormatter::new();
//! assert_eq!(formatter.format("ratio is 3:2"), "ratio is 3:2");
//! assert_eq!(formatter.format("[[X:bold]]"), "[**X**]");
//! assert_eq!(formatter.format("[Hello:bold"), "[Hello:bold");
//! ```

pub mod content;
pub mod elements;
mod error;
pub mod styled;
pub mod utils;
pub mod value;
pub mod writer;

pub use crate::{
  content::{Content, flatten},
  elements::{
    Element,
    ListItem,
    MdCode,
    MdHeader,
    MdHorizontal,
    MdImage,
    MdLink,
    MdList,
    MdQuote,
    MdTable,
    MdTableOfContents,
    MdText,
    TableData,
  },
  error::{MdfyError, Result},
  styled::{StylePatterns, TextFormatter, TextStyler},
  value::{Record, Value},
  writer::{Mdfier, WriteSession, write},
};
