use std::fmt;

/// Inline code or a fenced code block.
///
/// Code containing a newline is always rendered as a block.
///
/// ```
/// use mdfy_core::MdCode;
///
/// assert_eq!(MdCode::inline("print('Hello World!')").to_string(), "`print('Hello World!')`");
/// assert_eq!(
///   MdCode::block("print('Hello World!')").with_syntax("python").to_string(),
///   "```python\nprint('Hello World!')\n```"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdCode {
  pub code:   String,
  pub inline: bool,
  pub syntax: String,
}

impl MdCode {
  /// Create a code element, forcing block form for multi-line code.
  pub fn new(code: impl Into<String>, inline: bool) -> Self {
    let code = code.into();
    let inline = inline && !code.contains('\n');
    Self {
      code,
      inline,
      syntax: String::new(),
    }
  }

  pub fn block(code: impl Into<String>) -> Self {
    Self::new(code, false)
  }

  pub fn inline(code: impl Into<String>) -> Self {
    Self::new(code, true)
  }

  /// Set the fence language. Only affects block code.
  #[must_use]
  pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
    self.syntax = syntax.into();
    self
  }
}

impl fmt::Display for MdCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.inline {
      write!(f, "`{}`", self.code)
    } else {
      write!(f, "```{}\n{}\n```", self.syntax, self.code)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_multiline_code_is_never_inline() {
    let code = MdCode::inline("a\nb");
    assert!(!code.inline);
    assert_eq!(code.to_string(), "```\na\nb\n```");
  }

  #[test]
  fn test_block_without_syntax() {
    assert_eq!(MdCode::block("x = 1").to_string(), "```\nx = 1\n```");
  }
}
