use std::fmt;

use log::warn;

use super::{
  parser::{self, Node},
  patterns::{StylePatterns, apply_template},
};

/// Rewrites inline style markers into Markdown.
///
/// Implementations must never fail: input they cannot handle is returned
/// as-is.
pub trait TextStyler: fmt::Debug + Send + Sync {
  fn format(&self, text: &str) -> String;
}

/// The bracket style engine.
///
/// Recognizes `[content:style]` markers, resolves nested markers
/// innermost-first and wraps each styled group in the template registered
/// for its style name.
///
/// # Examples
///
/// ```
/// use mdfy_core::styled::TextFormatter;
///
/// let formatter = TextFormatter::new();
/// assert_eq!(
///   formatter.format("[A [B:italic] C:bold]"),
///   "**A *B* C**"
/// );
/// assert_eq!(formatter.format("[Hello] and World"), "[Hello] and World");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFormatter {
  patterns: StylePatterns,
}

impl TextFormatter {
  /// Create a formatter with the built-in styles and aliases.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Create a formatter with a custom style lookup.
  #[must_use]
  pub const fn with_patterns(patterns: StylePatterns) -> Self {
    Self { patterns }
  }

  #[must_use]
  pub const fn patterns(&self) -> &StylePatterns {
    &self.patterns
  }

  /// Apply all style markers in `text`.
  ///
  /// Unparseable input (unbalanced brackets, a style name not followed by
  /// `]`, nesting past [`MAX_DEPTH`](super::parser::MAX_DEPTH)) is returned
  /// unchanged.
  #[must_use]
  pub fn format(&self, text: &str) -> String {
    match parser::parse(text) {
      Ok(nodes) => self.render_nodes(&nodes),
      Err(e) => {
        warn!(
          "Invalid styled text {text:?}: {e}. Returning the original text."
        );
        text.to_string()
      },
    }
  }

  fn render_nodes(&self, nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
      self.render_node(node, &mut out);
    }
    out
  }

  fn render_node(&self, node: &Node, out: &mut String) {
    match node {
      Node::Text(text) => out.push_str(text),
      Node::Bracket {
        children,
        style: None,
      } => {
        out.push('[');
        for child in children {
          self.render_node(child, out);
        }
        out.push(']');
      },
      Node::Bracket {
        children,
        style: Some(style),
      } => {
        let content = self.render_nodes(children);
        let name = style.trim();
        if let Some(template) = self.patterns.get(name) {
          out.push_str(&apply_template(template, &content));
        } else {
          warn!(
            "Style '{name}' not found in patterns. Returning unformatted text."
          );
          out.push_str(&content);
        }
      },
    }
  }
}

impl TextStyler for TextFormatter {
  fn format(&self, text: &str) -> String {
    Self::format(self, text)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fmt(text: &str) -> String {
    TextFormatter::new().format(text)
  }

  #[test]
  fn test_known_fixtures() {
    let cases = [
      ("Plain text", "Plain text"),
      ("[Hello:italic] and World", "*Hello* and World"),
      ("[Hello:not] and World", "~~Hello~~ and World"),
      ("[Hello:bold] and [World:bold]", "**Hello** and **World**"),
      ("[Hello:bold] and [World:italic]", "**Hello** and *World*"),
      ("[Hello:strong] and [World:strong]", "***Hello*** and ***World***"),
      ("this is [quoted:quote] text", "this is `quoted` text"),
      (
        "[Hello:underline] and [World:underline]",
        "<u>Hello</u> and <u>World</u>",
      ),
      (
        "This text has : in [not styled:bold] part",
        "This text has : in **not styled** part",
      ),
      (
        "[ユニコード文字列:underline]に対応してるか",
        "<u>ユニコード文字列</u>に対応してるか",
      ),
      ("[[Boldalic!!!:italic]:bold]", "***Boldalic!!!***"),
      (
        "[italic in bold is = [strong:italic]:bold]",
        "**italic in bold is = *strong***",
      ),
      (
        "[This is [italic:italic] and [bold:bold] in underline:underline]",
        "<u>This is *italic* and **bold** in underline</u>",
      ),
      (
        "You can use aliases e.g. [st:st]  [bd:bo].",
        "You can use aliases e.g. ***st***  **bd**.",
      ),
    ];

    for (input, expected) in cases {
      assert_eq!(fmt(input), expected, "input: {input}");
    }
  }

  #[test]
  fn test_nesting_outer_wraps_inner() {
    assert_eq!(fmt("[A [B:italic] C:bold]"), "**A *B* C**");
  }

  #[test]
  fn test_unknown_style_keeps_content() {
    assert_eq!(fmt("[X:nope]"), "X");
    assert_eq!(fmt("a [b [c:bold]:sparkle] d"), "a b **c** d");
  }

  #[test]
  fn test_unstyled_bracket_is_literal() {
    assert_eq!(fmt("[Hello] and World"), "[Hello] and World");
    assert_eq!(fmt("[[X:bold]]"), "[**X**]");
    assert_eq!(fmt("[]"), "[]");
  }

  #[test]
  fn test_malformed_input_is_returned_verbatim() {
    for input in [
      "[Hello:bold",
      "Hello]",
      "[a:b:c]",
      "[[x:bold]",
      "[a:b [c]]",
    ] {
      assert_eq!(fmt(input), input);
    }
  }

  #[test]
  fn test_style_name_whitespace_is_ignored() {
    assert_eq!(fmt("[x: bold ]"), "**x**");
  }

  #[test]
  fn test_custom_patterns() {
    let mut patterns = StylePatterns::default();
    patterns.insert("mark", "<mark>{}</mark>");
    patterns.alias("mark", "hl");
    let formatter = TextFormatter::with_patterns(patterns);
    assert_eq!(formatter.format("[a:hl] [b:bold]"), "<mark>a</mark> **b**");
  }

  #[test]
  fn test_excessive_nesting_is_returned_verbatim() {
    let input = format!("{}deep:bold{}", "[".repeat(3000), "]".repeat(3000));
    assert_eq!(fmt(&input), input);
  }
}
