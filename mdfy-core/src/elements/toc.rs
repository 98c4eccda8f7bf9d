use super::{Element, MdHeader};
use crate::{
  content::{Content, flatten},
  error::{MdfyError, Result},
  utils::generate_anchor,
};

/// A table of contents built from the headers of a document.
///
/// Without an explicit snapshot the headers are taken from the elements
/// that follow the marker when it is rendered as part of a document (see
/// [`MdTableOfContents::render_at`]).
#[derive(Debug, Clone, Default)]
pub struct MdTableOfContents {
  contents: Option<Vec<Element>>,
}

impl MdTableOfContents {
  /// A marker that collects headers from the surrounding document.
  #[must_use]
  pub const fn new() -> Self {
    Self { contents: None }
  }

  /// A table of contents over an explicit snapshot, flattened immediately.
  pub fn with_contents(contents: impl Into<Content>) -> Self {
    Self {
      contents: Some(flatten(contents)),
    }
  }

  #[must_use]
  pub fn contents(&self) -> Option<&[Element]> {
    self.contents.as_deref()
  }

  /// Render from the snapshot.
  ///
  /// # Errors
  ///
  /// Returns [`MdfyError::MissingTocContents`] when no snapshot was given.
  pub fn render(&self) -> Result<String> {
    self
      .contents
      .as_deref()
      .map(render_headers)
      .ok_or(MdfyError::MissingTocContents)
  }

  /// Render as the element at `position` of `document`.
  ///
  /// A snapshot takes precedence; otherwise only the elements after
  /// `position` are scanned, so headers that precede the marker are never
  /// listed.
  #[must_use]
  pub fn render_at(&self, document: &[Element], position: usize) -> String {
    match &self.contents {
      Some(contents) => render_headers(contents),
      None => {
        let rest = document.get(position.saturating_add(1)..);
        render_headers(rest.unwrap_or_default())
      },
    }
  }
}

fn render_headers(elements: &[Element]) -> String {
  let mut out = String::new();
  for header in elements.iter().filter_map(Element::as_header) {
    out.push_str(&toc_line(header));
    out.push('\n');
  }
  out
}

fn toc_line(header: &MdHeader) -> String {
  let indent = "  ".repeat(usize::from(header.level.saturating_sub(1)));
  format!(
    "{indent}- [{}](#{})",
    header.content,
    generate_anchor(&header.content)
  )
}
