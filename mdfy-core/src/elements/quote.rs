use super::Element;
use crate::error::Result;

/// A blockquote wrapping any other element.
///
/// ```
/// use mdfy_core::{MdQuote, MdText};
///
/// let quote = MdQuote::new(MdText::new("first\n[second:bold]"));
/// assert_eq!(quote.render().unwrap(), "> first\n> **second**");
/// ```
#[derive(Debug, Clone)]
pub struct MdQuote {
  pub content: Box<Element>,
}

impl MdQuote {
  pub fn new(content: impl Into<Element>) -> Self {
    Self {
      content: Box::new(content.into()),
    }
  }

  /// Prefix every line of the rendered content with `> `.
  ///
  /// # Errors
  ///
  /// Propagates the error of the quoted element, which can only be a table
  /// of contents without a snapshot.
  pub fn render(&self) -> Result<String> {
    let content = self.content.render()?;
    if content.is_empty() {
      return Ok("> ".to_string());
    }

    Ok(
      content
        .lines()
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n"),
    )
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_plain_string_quote() {
    let quote = MdQuote::new("Life is like a bicycle.");
    assert_eq!(quote.render().expect("render"), "> Life is like a bicycle.");
  }

  #[test]
  fn test_empty_quote() {
    assert_eq!(MdQuote::new("").render().expect("render"), "> ");
  }

  #[test]
  fn test_quote_of_code_block() {
    let quote = MdQuote::new(crate::MdCode::block("x").with_syntax("py"));
    assert_eq!(quote.render().expect("render"), "> ```py\n> x\n> ```");
  }
}
