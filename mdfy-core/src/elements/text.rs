use std::{fmt, ops::Add, sync::Arc};

use crate::styled::{TextFormatter, TextStyler};

/// Text with inline style markers.
///
/// Unless styling is disabled, the content is passed through a
/// [`TextStyler`] when rendered. Without an explicit styler a fresh
/// [`TextFormatter`] with the built-in styles is used.
///
/// # Examples
///
/// ```
/// use mdfy_core::MdText;
///
/// assert_eq!(MdText::new("This is [bold:bold] text.").to_string(), "This is **bold** text.");
/// assert_eq!(
///   MdText::new("[This is [nested:bold] style text:underline].").to_string(),
///   "<u>This is **nested** style text</u>."
/// );
/// assert_eq!(MdText::unstyled("[kept:bold]").to_string(), "[kept:bold]");
/// ```
#[derive(Debug, Clone)]
pub struct MdText {
  pub content: String,
  styler:      Option<Arc<dyn TextStyler>>,
  no_style:    bool,
}

impl MdText {
  pub fn new(content: impl Into<String>) -> Self {
    Self {
      content:  content.into(),
      styler:   None,
      no_style: false,
    }
  }

  /// Text that is emitted exactly as given.
  pub fn unstyled(content: impl Into<String>) -> Self {
    Self {
      no_style: true,
      ..Self::new(content)
    }
  }

  /// Render with a specific styler instead of the built-in formatter.
  #[must_use]
  pub fn with_styler(mut self, styler: Arc<dyn TextStyler>) -> Self {
    self.styler = Some(styler);
    self
  }

  #[must_use]
  pub const fn is_styled(&self) -> bool {
    !self.no_style
  }
}

impl fmt::Display for MdText {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.no_style {
      return f.write_str(&self.content);
    }

    let styled = match &self.styler {
      Some(styler) => styler.format(&self.content),
      None => TextFormatter::new().format(&self.content),
    };
    f.write_str(&styled)
  }
}

/// Concatenate the rendered forms of two texts.
impl Add for MdText {
  type Output = Self;

  fn add(self, rhs: Self) -> Self::Output {
    Self::new(format!("{self}{rhs}"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug)]
  struct Shouty;

  impl TextStyler for Shouty {
    fn format(&self, text: &str) -> String {
      text.to_uppercase()
    }
  }

  #[test]
  fn test_concatenation() {
    let combined = MdText::new("[Hello:bold]") + MdText::new("[World:italic]");
    assert_eq!(combined.to_string(), "**Hello***World*");
  }

  #[test]
  fn test_aliases() {
    assert_eq!(
      MdText::new("You can use aliases e.g. [st:st]  [bd:bo].").to_string(),
      "You can use aliases e.g. ***st***  **bd**."
    );
  }

  #[test]
  fn test_custom_styler() {
    let text = MdText::new("quiet [x:bold]").with_styler(Arc::new(Shouty));
    assert_eq!(text.to_string(), "QUIET [X:BOLD]");
  }

  #[test]
  fn test_unstyled_ignores_styler() {
    let text = MdText::unstyled("[a:bold]").with_styler(Arc::new(Shouty));
    assert!(!text.is_styled());
    assert_eq!(text.to_string(), "[a:bold]");
  }
}
