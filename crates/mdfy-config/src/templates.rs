use thiserror::Error;

/// Error type for template operations.
#[derive(Debug, Error)]
pub enum TemplateError {
  /// The requested configuration format is not supported.
  #[error("Unsupported config format: {0}")]
  UnsupportedFormat(String),
}

/// Default configuration template in TOML. Every option is commented out and
/// shows its default, so the file loads to the same configuration as having
/// no file at all.
pub const DEFAULT_TOML_TEMPLATE: &str = r#"# mdfy Configuration File

[output]
# Encoding of written documents. Any WHATWG encoding label is accepted.
# Characters the encoding cannot represent are written as numeric character
# references.
# encoding = "utf-8"

[styles]
# Additional or replaced inline styles. Each template must contain "{}",
# which receives the styled content.
# patterns = { highlight = "<mark>{}</mark>", bold = "__{}__" }

# Extra short names for styles. Aliases never replace a style name.
# aliases = { highlight = ["hl", "mark"] }

[table]
# Default number of decimal places for floats in tables.
# precision = 2

[list]
# Spaces per nesting level.
# indent = 4

# Use "1." markers instead of "-".
# numbered = true
"#;

/// Default configuration template in JSON. JSON has no comments, so this one
/// spells out every default explicitly.
pub const DEFAULT_JSON_TEMPLATE: &str = r#"{
  "output": {
    "encoding": "utf-8"
  },
  "styles": {
    "patterns": {},
    "aliases": {}
  },
  "table": {
    "precision": null
  },
  "list": {
    "indent": 4,
    "numbered": true
  }
}
"#;

/// Get the correct configuration template based on the requested format.
///
/// # Errors
///
/// Returns an error if the requested format is not supported.
pub fn get_template(format: &str) -> Result<&'static str, TemplateError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE),
    "json" => Ok(DEFAULT_JSON_TEMPLATE),
    _ => Err(TemplateError::UnsupportedFormat(format.to_string())),
  }
}
