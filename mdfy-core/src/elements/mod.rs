//! Renderable Markdown building blocks.
//!
//! Most elements only depend on their own fields and implement
//! [`fmt::Display`]. Elements that may embed a table of contents (lists,
//! quotes, tables) expose a fallible `render` instead, since a table of
//! contents without a snapshot cannot be rendered out of context.
mod code;
mod header;
mod horizontal;
mod image;
mod link;
mod list;
mod quote;
mod table;
mod text;
mod toc;

use std::fmt;

pub use code::MdCode;
pub use header::MdHeader;
pub use horizontal::MdHorizontal;
pub use image::MdImage;
pub use link::MdLink;
pub use list::{ListItem, MdList};
pub use quote::MdQuote;
pub use table::{MdTable, TableData};
pub use text::MdText;
pub use toc::MdTableOfContents;

use crate::{content::Content, error::Result};

/// Any item that can appear in a document.
#[derive(Debug, Clone)]
pub enum Element {
  /// A raw string, emitted without styling.
  Plain(String),
  Text(MdText),
  Header(MdHeader),
  List(MdList),
  Table(MdTable),
  Code(MdCode),
  Quote(MdQuote),
  Image(MdImage),
  Link(MdLink),
  Horizontal(MdHorizontal),
  TableOfContents(MdTableOfContents),
}

impl Element {
  /// Render the element on its own.
  ///
  /// # Errors
  ///
  /// Returns [`crate::MdfyError::MissingTocContents`] for a table of contents
  /// without a snapshot, including one nested in a list, quote or table.
  pub fn render(&self) -> Result<String> {
    Ok(match self {
      Self::Plain(text) => text.clone(),
      Self::Text(text) => text.to_string(),
      Self::Header(header) => header.to_string(),
      Self::List(list) => list.render()?,
      Self::Table(table) => table.render()?,
      Self::Code(code) => code.to_string(),
      Self::Quote(quote) => quote.render()?,
      Self::Image(image) => image.to_string(),
      Self::Link(link) => link.to_string(),
      Self::Horizontal(horizontal) => horizontal.to_string(),
      Self::TableOfContents(toc) => toc.render()?,
    })
  }

  /// Render the element found at `position` of a flattened document.
  ///
  /// Only a table of contents uses the surrounding document; every other
  /// element renders exactly as [`Element::render`] does.
  ///
  /// # Errors
  ///
  /// Same as [`Element::render`], minus the missing contents case for a
  /// top-level table of contents.
  pub fn render_at(&self, document: &[Self], position: usize) -> Result<String> {
    match self {
      Self::TableOfContents(toc) => Ok(toc.render_at(document, position)),
      other => other.render(),
    }
  }

  #[must_use]
  pub const fn as_header(&self) -> Option<&MdHeader> {
    match self {
      Self::Header(header) => Some(header),
      _ => None,
    }
  }

  #[must_use]
  pub const fn is_table_of_contents(&self) -> bool {
    matches!(self, Self::TableOfContents(_))
  }
}

/// Renders context-free elements. A table of contents without a snapshot
/// is written as an empty string.
impl fmt::Display for Element {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.render() {
      Ok(rendered) => f.write_str(&rendered),
      Err(e) => {
        log::warn!("Rendering {self:?} out of context: {e}");
        Ok(())
      },
    }
  }
}

macro_rules! impl_element_from {
  ($($variant:ident($ty:ty)),* $(,)?) => {
    $(
      impl From<$ty> for Element {
        fn from(value: $ty) -> Self {
          Self::$variant(value)
        }
      }

      impl From<$ty> for ListItem {
        fn from(value: $ty) -> Self {
          Self::Entry(Element::$variant(value))
        }
      }

      impl From<$ty> for Content {
        fn from(value: $ty) -> Self {
          Self::Item(Element::$variant(value))
        }
      }
    )*
  };
}

impl_element_from!(
  Plain(String),
  Text(MdText),
  Header(MdHeader),
  List(MdList),
  Table(MdTable),
  Code(MdCode),
  Quote(MdQuote),
  Image(MdImage),
  Link(MdLink),
  Horizontal(MdHorizontal),
  TableOfContents(MdTableOfContents),
);

impl From<&str> for Element {
  fn from(value: &str) -> Self {
    Self::Plain(value.to_string())
  }
}

impl From<&str> for ListItem {
  fn from(value: &str) -> Self {
    Self::Entry(Element::from(value))
  }
}

impl From<&str> for Content {
  fn from(value: &str) -> Self {
    Self::Item(Element::from(value))
  }
}

impl From<Element> for ListItem {
  fn from(value: Element) -> Self {
    Self::Entry(value)
  }
}

impl From<Element> for Content {
  fn from(value: Element) -> Self {
    Self::Item(value)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::*;
  use crate::MdfyError;

  #[test]
  fn test_plain_strings_are_not_styled() {
    let element = Element::from("[x:bold]");
    assert_eq!(element.render().expect("render"), "[x:bold]");
    assert_eq!(
      Element::from(MdText::new("[x:bold]")).render().expect("render"),
      "**x**"
    );
  }

  #[test]
  fn test_nested_toc_without_snapshot_fails() {
    let quote = Element::from(MdQuote::new(MdTableOfContents::new()));
    assert!(matches!(quote.render(), Err(MdfyError::MissingTocContents)));
    assert_eq!(quote.to_string(), "");
  }

  #[test]
  fn test_render_at_only_affects_toc() {
    let document = vec![
      Element::from(MdTableOfContents::new()),
      Element::from(MdHeader::new("Only")),
    ];
    assert_eq!(
      document[0].render_at(&document, 0).expect("render"),
      "- [Only](#only)\n"
    );
    assert_eq!(
      document[1].render_at(&document, 1).expect("render"),
      "# Only"
    );
  }
}
