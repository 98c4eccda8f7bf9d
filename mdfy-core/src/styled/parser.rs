//! Recursive-descent parser for bracket style markers.
//!
//! The alphabet is three tokens (`[`, `]`, `:`) plus runs of anything else:
//!
//! ```text
//! start     := (plain-run | bracketed)*
//! bracketed := '[' inner* (':' style-name)? ']'
//! inner     := plain-run | bracketed
//! ```
//!
//! A colon is ordinary text at the top level. Inside a bracket it ends the
//! content and introduces the style name, which must be followed directly by
//! the closing bracket.

use thiserror::Error;

/// A node of the parsed style tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  /// A run of literal text.
  Text(String),
  /// A bracketed group, styled when `style` is present.
  Bracket {
    children: Vec<Self>,
    style:    Option<String>,
  },
}

/// Reasons the style grammar rejects an input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("unexpected ']' at byte {offset} without a matching '['")]
  UnexpectedClose { offset: usize },

  #[error("'[' at byte {offset} is never closed")]
  Unclosed { offset: usize },

  #[error("style name at byte {offset} must be followed by ']'")]
  MalformedStyle { offset: usize },

  #[error("'[' at byte {offset} nests deeper than {} levels", MAX_DEPTH)]
  TooDeep { offset: usize },
}

/// Deepest bracket nesting the parser accepts.
pub const MAX_DEPTH: usize = 256;

/// Parse `input` into a sequence of text runs and bracket groups.
///
/// # Errors
///
/// Returns a [`ParseError`] when brackets are unbalanced, a style name is
/// not terminated by `]` or brackets nest deeper than [`MAX_DEPTH`].
pub fn parse(input: &str) -> Result<Vec<Node>, ParseError> {
  let mut parser = Parser {
    src:   input,
    pos:   0,
    depth: 0,
  };
  let nodes = parser.sequence(false)?;

  match parser.peek() {
    None => Ok(nodes),
    Some(_) => Err(ParseError::UnexpectedClose { offset: parser.pos }),
  }
}

struct Parser<'a> {
  src:   &'a str,
  pos:   usize,
  depth: usize,
}

impl<'a> Parser<'a> {
  fn peek(&self) -> Option<char> {
    self.src[self.pos..].chars().next()
  }

  fn bump(&mut self) {
    if let Some(c) = self.peek() {
      self.pos += c.len_utf8();
    }
  }

  /// Parse runs and brackets until a token that belongs to the caller.
  ///
  /// At the top level that is only `]` (an error the caller reports) or end
  /// of input. Inside a bracket `:` also stops the sequence.
  fn sequence(&mut self, in_bracket: bool) -> Result<Vec<Node>, ParseError> {
    let mut nodes = Vec::new();

    while let Some(c) = self.peek() {
      match c {
        '[' => nodes.push(self.bracket()?),
        ']' => break,
        ':' if in_bracket => break,
        _ => nodes.push(Node::Text(self.run(in_bracket).to_string())),
      }
    }

    Ok(nodes)
  }

  fn bracket(&mut self) -> Result<Node, ParseError> {
    let open = self.pos;
    if self.depth >= MAX_DEPTH {
      return Err(ParseError::TooDeep { offset: open });
    }
    self.bump();

    self.depth += 1;
    let children = self.sequence(true);
    self.depth -= 1;
    let children = children?;

    match self.peek() {
      Some(']') => {
        self.bump();
        Ok(Node::Bracket {
          children,
          style: None,
        })
      },
      Some(':') => {
        self.bump();
        let style_start = self.pos;
        let style = self.run(true).to_string();
        if self.peek() == Some(']') {
          self.bump();
          Ok(Node::Bracket {
            children,
            style: Some(style),
          })
        } else if self.peek().is_none() {
          Err(ParseError::Unclosed { offset: open })
        } else {
          Err(ParseError::MalformedStyle {
            offset: style_start,
          })
        }
      },
      _ => Err(ParseError::Unclosed { offset: open }),
    }
  }

  fn run(&mut self, in_bracket: bool) -> &'a str {
    let src = self.src;
    let start = self.pos;
    let rest = &src[start..];
    let len = rest
      .find(|c: char| c == '[' || c == ']' || (in_bracket && c == ':'))
      .unwrap_or(rest.len());
    self.pos += len;
    &src[start..self.pos]
  }
}
