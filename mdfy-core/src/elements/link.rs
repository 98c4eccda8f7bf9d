use std::fmt;

use log::warn;

/// A Markdown inline link.
///
/// ```
/// use mdfy_core::MdLink;
///
/// let link = MdLink::new("https://www.example.com").with_text("example");
/// assert_eq!(link.to_string(), "[example](https://www.example.com)");
///
/// let link = link.with_title("example");
/// assert_eq!(link.to_string(), "[example](https://www.example.com \"example\")");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MdLink {
  pub url:   Option<String>,
  /// Display text; the URL is shown when empty.
  pub text:  String,
  pub title: Option<String>,
}

impl MdLink {
  pub fn new(url: impl Into<String>) -> Self {
    Self {
      url:   Some(url.into()),
      text:  String::new(),
      title: None,
    }
  }

  #[must_use]
  pub fn with_text(mut self, text: impl Into<String>) -> Self {
    self.text = text.into();
    self
  }

  #[must_use]
  pub fn with_title(mut self, title: impl Into<String>) -> Self {
    self.title = Some(title.into());
    self
  }
}

impl fmt::Display for MdLink {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let url = self.url.as_deref().unwrap_or_else(|| {
      warn!("Link URL is None, setting to empty string");
      ""
    });
    let text = if self.text.is_empty() {
      url
    } else {
      self.text.as_str()
    };

    write!(f, "[{text}]({url}")?;
    if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
      write!(f, " \"{title}\"")?;
    }
    f.write_str(")")
  }
}
