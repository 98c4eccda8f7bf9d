//! Nested document content and its flattening.
use crate::elements::Element;

/// An element or an arbitrarily nested group of content.
///
/// Every element type, `&str` and `String` convert into a leaf. Vectors and
/// arrays of convertible values become groups.
#[derive(Debug, Clone)]
pub enum Content {
  Item(Element),
  Group(Vec<Self>),
}

impl<T: Into<Self>> From<Vec<T>> for Content {
  fn from(items: Vec<T>) -> Self {
    Self::Group(items.into_iter().map(Into::into).collect())
  }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for Content {
  fn from(items: [T; N]) -> Self {
    Self::Group(items.into_iter().map(Into::into).collect())
  }
}

impl FromIterator<Element> for Content {
  fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
    Self::Group(iter.into_iter().map(Self::Item).collect())
  }
}

/// Flatten nested content into a single ordered sequence, depth-first.
///
/// # Examples
///
/// ```
/// use mdfy_core::{content::flatten, contents};
///
/// let flat = flatten(contents!["A", ["B1", "B2"], "C"]);
/// let rendered: Vec<String> = flat.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["A", "B1", "B2", "C"]);
/// ```
pub fn flatten(content: impl Into<Content>) -> Vec<Element> {
  let mut out = Vec::new();
  flatten_into(content.into(), &mut out);
  out
}

fn flatten_into(content: Content, out: &mut Vec<Element>) {
  match content {
    Content::Item(element) => out.push(element),
    Content::Group(items) => {
      for item in items {
        flatten_into(item, out);
      }
    },
  }
}

/// Build a [`Content`] group from values of different element types.
///
/// ```
/// use mdfy_core::{MdHeader, MdText, contents};
///
/// let content = contents![MdHeader::new("Title"), MdText::new("body"), [
///   "a", "b"
/// ]];
/// # let _ = content;
/// ```
#[macro_export]
macro_rules! contents {
  ($($item:expr),* $(,)?) => {
    $crate::content::Content::Group(vec![
      $($crate::content::Content::from($item)),*
    ])
  };
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{MdHeader, contents};

  fn rendered(content: impl Into<Content>) -> Vec<String> {
    flatten(content).iter().map(ToString::to_string).collect()
  }

  #[test]
  fn test_flatten_preserves_order() {
    assert_eq!(rendered(contents!["A", ["B1", "B2"], "C"]), [
      "A", "B1", "B2", "C"
    ]);
  }

  #[test]
  fn test_flatten_is_independent_of_grouping() {
    let deep = contents![contents![contents!["A"], "B"], contents![
      "C",
      contents![contents!["D"]]
    ]];
    let shallow = contents!["A", "B", "C", "D"];
    assert_eq!(rendered(deep), rendered(shallow));
  }

  #[test]
  fn test_single_element_is_a_leaf() {
    assert_eq!(rendered(MdHeader::new("Hi")), ["# Hi"]);
    assert!(flatten(Vec::<Content>::new()).is_empty());
  }
}
