//! JSON description of a document for the `render` subcommand.
//!
//! A document is an element, a plain string or an array of documents.
//! Elements are objects with a single key naming their kind:
//!
//! ```json
//! [
//!   {"header": {"content": "Guide"}},
//!   {"toc": {}},
//!   {"header": {"content": "Usage", "level": 2}},
//!   {"text": "Run it [twice:bold]."},
//!   {"list": {"items": ["a", ["a.1", "a.2"], "b"], "numbered": false}},
//!   {"table": {"data": [{"k": 1}, {"k": 2}], "precision": 2}}
//! ]
//! ```
use mdfy_config::Config;
use mdfy_core::{
  Content,
  Element,
  ListItem,
  MdCode,
  MdHeader,
  MdHorizontal,
  MdImage,
  MdLink,
  MdQuote,
  MdTable,
  MdTableOfContents,
  MdText,
  Result,
};
use serde::Deserialize;

/// A document node: an array of nodes, a plain string or an element.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Node {
  Group(Vec<Self>),
  Plain(String),
  Element(ElementNode),
}

/// A list entry. Arrays inside a list are sublists.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListNode {
  Nested(Vec<Self>),
  Entry(Node),
}

fn default_level() -> u8 {
  1
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum ElementNode {
  /// Styled text.
  Text(String),
  Header {
    content: String,
    #[serde(default = "default_level")]
    level:   u8,
  },
  List {
    items:    Vec<ListNode>,
    #[serde(default)]
    numbered: Option<bool>,
    #[serde(default)]
    indent:   Option<usize>,
  },
  Table {
    data:       serde_json::Value,
    #[serde(default)]
    header:     Option<Vec<String>>,
    #[serde(default)]
    row_labels: Option<Vec<String>>,
    #[serde(default)]
    transpose:  bool,
    #[serde(default)]
    precision:  Option<usize>,
  },
  Code {
    code:   String,
    #[serde(default)]
    inline: bool,
    #[serde(default)]
    syntax: String,
  },
  Quote(Box<Node>),
  Image {
    src: String,
    #[serde(default)]
    alt: String,
  },
  Link {
    url:   String,
    #[serde(default)]
    text:  String,
    #[serde(default)]
    title: Option<String>,
  },
  Horizontal {
    #[serde(default)]
    content: Option<String>,
  },
  Toc {
    #[serde(default)]
    contents: Option<Box<Node>>,
  },
}

/// Parse a JSON document.
///
/// # Errors
///
/// Returns the JSON error for malformed input or unknown element kinds.
pub fn parse(json: &str) -> serde_json::Result<Node> {
  serde_json::from_str(json)
}

impl Node {
  /// Build library content, using `config` for styles and defaults.
  ///
  /// # Errors
  ///
  /// Returns an error for table data that is neither an object nor an array
  /// of objects.
  pub fn into_content(self, config: &Config) -> Result<Content> {
    Ok(match self {
      Self::Group(nodes) => {
        Content::Group(
          nodes
            .into_iter()
            .map(|node| node.into_content(config))
            .collect::<Result<_>>()?,
        )
      },
      Self::Plain(text) => Content::from(text),
      Self::Element(element) => Content::Item(element.into_element(config)?),
    })
  }

  fn into_element(self, config: &Config) -> Result<Element> {
    match self {
      Self::Element(element) => element.into_element(config),
      Self::Plain(text) => Ok(Element::Plain(text)),
      Self::Group(nodes) => {
        // A quoted array renders as consecutive lines.
        let content = Self::Group(nodes).into_content(config)?;
        Ok(Element::Plain(mdfy_core::Mdfier::stringify(content)?))
      },
    }
  }
}

impl ListNode {
  fn into_item(self, config: &Config) -> Result<ListItem> {
    match self {
      Self::Nested(nodes) => {
        Ok(ListItem::Nested(
          nodes
            .into_iter()
            .map(|node| node.into_item(config))
            .collect::<Result<_>>()?,
        ))
      },
      Self::Entry(node) => Ok(ListItem::Entry(node.into_element(config)?)),
    }
  }
}

impl ElementNode {
  fn into_element(self, config: &Config) -> Result<Element> {
    Ok(match self {
      Self::Text(text) => {
        MdText::new(text).with_styler(config.styler()).into()
      },
      Self::Header { content, level } => {
        MdHeader::with_level(content, level).into()
      },
      Self::List {
        items,
        numbered,
        indent,
      } => {
        let items = items
          .into_iter()
          .map(|item| item.into_item(config))
          .collect::<Result<Vec<_>>>()?;
        let mut list = config.list(items);
        if let Some(numbered) = numbered {
          list = list.with_numbered(numbered);
        }
        if let Some(indent) = indent {
          list = list.with_indent(indent);
        }
        list.into()
      },
      Self::Table {
        data,
        header,
        row_labels,
        transpose,
        precision,
      } => {
        let mut table = MdTable::from_json(data)?.with_transpose(transpose);
        if let Some(header) = header {
          table = table.with_header(header);
        }
        if let Some(row_labels) = row_labels {
          table = table.with_row_labels(row_labels);
        }
        if let Some(precision) = precision {
          table = table.with_precision(precision);
        }
        config.apply_table_defaults(table).into()
      },
      Self::Code {
        code,
        inline,
        syntax,
      } => MdCode::new(code, inline).with_syntax(syntax).into(),
      Self::Quote(node) => MdQuote::new(node.into_element(config)?).into(),
      Self::Image { src, alt } => MdImage::new(src).with_alt(alt).into(),
      Self::Link { url, text, title } => {
        let link = MdLink::new(url).with_text(text);
        let link = match title {
          Some(title) => link.with_title(title),
          None => link,
        };
        link.into()
      },
      Self::Horizontal { content } => {
        content.map_or_else(MdHorizontal::default, MdHorizontal::new).into()
      },
      Self::Toc { contents } => {
        let toc = match contents {
          Some(node) => {
            MdTableOfContents::with_contents(node.into_content(config)?)
          },
          None => MdTableOfContents::new(),
        };
        toc.into()
      },
    })
  }
}
