use std::fmt;

use log::warn;

/// A Markdown image.
///
/// ```
/// use mdfy_core::MdImage;
///
/// let image = MdImage::new("https://example.com/image.png");
/// assert_eq!(image.to_string(), "![](https://example.com/image.png)");
///
/// let image = image.with_alt("Example image");
/// assert_eq!(image.to_string(), "![Example image](https://example.com/image.png)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MdImage {
  /// Source URL or path. An absent source renders as an empty target.
  pub src: Option<String>,
  pub alt: String,
}

impl MdImage {
  pub fn new(src: impl Into<String>) -> Self {
    Self {
      src: Some(src.into()),
      alt: String::new(),
    }
  }

  #[must_use]
  pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
    self.alt = alt.into();
    self
  }
}

impl fmt::Display for MdImage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let src = self.src.as_deref().unwrap_or_else(|| {
      warn!("Image source is None, setting to empty string");
      ""
    });
    write!(f, "![{}]({src})", self.alt)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_missing_source_renders_empty() {
    let image = MdImage {
      src: None,
      alt: "logo".to_string(),
    };
    assert_eq!(image.to_string(), "![logo]()");
  }
}
