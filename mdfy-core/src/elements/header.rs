use std::fmt;

/// A Markdown ATX header.
///
/// ```
/// use mdfy_core::MdHeader;
///
/// assert_eq!(MdHeader::new("This is a header").to_string(), "# This is a header");
/// assert_eq!(MdHeader::with_level("Sub", 2).to_string(), "## Sub");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdHeader {
  pub content: String,
  pub level:   u8,
}

impl MdHeader {
  /// A level one header.
  pub fn new(content: impl Into<String>) -> Self {
    Self::with_level(content, 1)
  }

  pub fn with_level(content: impl Into<String>, level: u8) -> Self {
    Self {
      content: content.into(),
      level,
    }
  }
}

impl fmt::Display for MdHeader {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} {}",
      "#".repeat(usize::from(self.level)),
      self.content
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_levels() {
    assert_eq!(MdHeader::with_level("Deep", 4).to_string(), "#### Deep");
    assert_eq!(MdHeader::new("Hi").level, 1);
  }
}
