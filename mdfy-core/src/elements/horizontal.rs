use std::fmt;

/// A horizontal rule, surrounded by blank lines.
///
/// ```
/// use mdfy_core::MdHorizontal;
///
/// assert_eq!(MdHorizontal::default().to_string(), "\n***\n");
/// assert_eq!(MdHorizontal::new("---").to_string(), "\n---\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdHorizontal {
  pub content: String,
}

impl MdHorizontal {
  pub fn new(content: impl Into<String>) -> Self {
    Self {
      content: content.into(),
    }
  }
}

impl Default for MdHorizontal {
  fn default() -> Self {
    Self::new("***")
  }
}

impl fmt::Display for MdHorizontal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "\n{}\n", self.content)
  }
}
