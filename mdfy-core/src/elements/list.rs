use super::Element;
use crate::error::Result;

/// One entry of an [`MdList`].
#[derive(Debug, Clone)]
pub enum ListItem {
  Entry(Element),
  /// A sublist, rendered one level deeper than its parent.
  Nested(Vec<Self>),
}

impl From<Vec<Self>> for ListItem {
  fn from(items: Vec<Self>) -> Self {
    Self::Nested(items)
  }
}

/// A numbered or bulleted list with arbitrarily nested sublists.
///
/// ```
/// use mdfy_core::{ListItem, MdList};
///
/// let list = MdList::new(vec![
///   ListItem::from("one"),
///   ListItem::Nested(vec!["one.a".into(), "one.b".into()]),
///   "two".into(),
/// ])
/// .bulleted();
/// assert_eq!(list.render().unwrap(), "- one\n    - one.a\n    - one.b\n- two");
/// ```
#[derive(Debug, Clone)]
pub struct MdList {
  pub items:    Vec<ListItem>,
  pub numbered: bool,
  pub depth:    usize,
  pub indent:   usize,
}

impl MdList {
  /// A numbered list at depth 0 with four-space indentation.
  pub fn new<I, T>(items: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<ListItem>,
  {
    Self {
      items:    items.into_iter().map(Into::into).collect(),
      numbered: true,
      depth:    0,
      indent:   4,
    }
  }

  #[must_use]
  pub const fn bulleted(mut self) -> Self {
    self.numbered = false;
    self
  }

  #[must_use]
  pub const fn with_numbered(mut self, numbered: bool) -> Self {
    self.numbered = numbered;
    self
  }

  #[must_use]
  pub const fn with_depth(mut self, depth: usize) -> Self {
    self.depth = depth;
    self
  }

  #[must_use]
  pub const fn with_indent(mut self, indent: usize) -> Self {
    self.indent = indent;
    self
  }

  /// Render all items, one line per entry.
  ///
  /// # Errors
  ///
  /// Propagates rendering errors of entry elements.
  pub fn render(&self) -> Result<String> {
    self.render_items(&self.items, self.depth)
  }

  fn render_items(&self, items: &[ListItem], depth: usize) -> Result<String> {
    let lines = items
      .iter()
      .map(|item| self.render_item(item, depth))
      .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
  }

  fn render_item(&self, item: &ListItem, depth: usize) -> Result<String> {
    match item {
      ListItem::Nested(items) => self.render_items(items, depth + 1),
      ListItem::Entry(element) => {
        let prefix = " ".repeat(self.indent * depth);
        let marker = if self.numbered { "1." } else { "-" };
        Ok(format!("{prefix}{marker} {}", element.render()?))
      },
    }
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::*;
  use crate::MdText;

  #[test]
  fn test_numbered_by_default() {
    let list = MdList::new(["a", "b"]);
    assert_eq!(list.render().expect("render"), "1. a\n1. b");
  }

  #[test]
  fn test_nested_numbered_with_custom_indent() {
    let list = MdList::new(vec![
      ListItem::from("top"),
      ListItem::Nested(vec![
        "mid".into(),
        ListItem::Nested(vec!["low".into()]),
      ]),
    ])
    .with_indent(2);
    assert_eq!(
      list.render().expect("render"),
      "1. top\n  1. mid\n    1. low"
    );
  }

  #[test]
  fn test_entries_render_styled_text() {
    let list = MdList::new([MdText::new("[x:bold]")]).bulleted().with_depth(1);
    assert_eq!(list.render().expect("render"), "    - **x**");
  }
}
