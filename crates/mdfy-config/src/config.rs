use std::{
  fs,
  path::{Path, PathBuf},
  sync::{Arc, OnceLock},
};

use encoding_rs::Encoding;
use indexmap::IndexMap;
use mdfy_core::{
  ListItem,
  MdList,
  MdTable,
  Mdfier,
  StylePatterns,
  TextFormatter,
  TextStyler,
  styled::patterns::SLOT,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Encoding used when none is configured.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Indentation per list level when none is configured.
pub const DEFAULT_LIST_INDENT: usize = 4;

/// Configuration for mdfy.
///
/// [`Config`] controls output encoding, the inline style table, table and
/// list defaults. Fields are typically loaded from a TOML or JSON config
/// file, but can also be set via `KEY=VALUE` overrides. Unset values fall
/// back to the library defaults through the accessor methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Output file options.
  pub output: OutputConfig,

  /// Inline style customization.
  pub styles: StylesConfig,

  /// Table defaults.
  pub table: TableConfig,

  /// List defaults.
  pub list: ListConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
  /// WHATWG label of the output encoding.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub encoding: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StylesConfig {
  /// Style name to template. Replaces built-in styles of the same name.
  pub patterns: IndexMap<String, String>,

  /// Style name to additional names.
  pub aliases: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
  /// Decimal places for floats in tables that set no precision themselves.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub precision: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListConfig {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub indent: Option<usize>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub numbered: Option<bool>,
}

impl Config {
  /// Load configuration from a TOML or JSON file, picked by extension.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  #[allow(
    clippy::option_if_let_else,
    reason = "Clearer with explicit match on extension"
  )]
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
      Some(ext) => {
        match ext.to_lowercase().as_str() {
          "json" => {
            serde_json::from_str(&content).map_err(|e| {
              ConfigError::Config(format!(
                "Failed to parse JSON config from {}: {}",
                path.display(),
                e
              ))
            })
          },
          "toml" => {
            toml::from_str(&content).map_err(|e| {
              ConfigError::Config(format!(
                "Failed to parse TOML config from {}: {}",
                path.display(),
                e
              ))
            })
          },
          _ => {
            Err(ConfigError::Config(format!(
              "Unsupported config file format: {}",
              path.display()
            )))
          },
        }
      },
      None => {
        Err(ConfigError::Config(format!(
          "Config file has no extension: {}",
          path.display()
        )))
      },
    }
  }

  /// Load configuration from files and `KEY=VALUE` overrides.
  ///
  /// Explicit config files are merged in order. Without any, a config file
  /// in one of the standard locations is used if present. Overrides are
  /// applied last and the result is validated.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded, an override is invalid or
  /// the merged configuration fails validation.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if let Some((first, rest)) = config_files.split_first() {
      let mut merged_config = Self::from_file(first)?;

      for config_path in rest {
        merged_config.merge(Self::from_file(config_path)?);
      }

      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }

      merged_config
    } else if let Some(discovered_config) = Self::find_config_file() {
      log::info!(
        "Using discovered config file: {}",
        discovered_config.display()
      );
      Self::from_file(&discovered_config).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to load discovered config from {}: {}",
          discovered_config.display(),
          e
        ))
      })?
    } else {
      Self::default()
    };

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    config.validate()?;
    Ok(config)
  }

  /// Apply configuration overrides from KEY=VALUE strings.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  ///
  /// - An override string is not in KEY=VALUE format
  /// - A key is not recognized
  /// - A value cannot be parsed as the expected type
  ///
  /// # Example
  ///
  /// ```rust
  /// use mdfy_config::Config;
  ///
  /// let mut config = Config::default();
  /// config
  ///   .apply_overrides(&[
  ///     "list.numbered=no".to_string(),
  ///     "styles.patterns.mark=<mark>{}</mark>".to_string(),
  ///   ])
  ///   .unwrap();
  /// assert!(!config.list_numbered());
  /// ```
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  /// Apply a single override to the field named by a dotted `key`.
  ///
  /// An empty value resets optional fields. Style entries are addressed as
  /// `styles.patterns.<name>` and `styles.aliases.<name>`, the latter taking
  /// a comma separated list.
  ///
  /// # Errors
  ///
  /// Returns an error for unknown keys and unparseable values.
  pub fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    if let Some(name) = key.strip_prefix("styles.patterns.") {
      let name = non_empty_name(key, name)?;
      self
        .styles
        .patterns
        .insert(name.to_string(), value.to_string());
      return Ok(());
    }

    if let Some(name) = key.strip_prefix("styles.aliases.") {
      let name = non_empty_name(key, name)?;
      let aliases = value
        .split(',')
        .map(str::trim)
        .filter(|alias| !alias.is_empty())
        .map(ToString::to_string)
        .collect();
      self.styles.aliases.insert(name.to_string(), aliases);
      return Ok(());
    }

    match key {
      "output.encoding" => {
        self.output.encoding =
          (!value.is_empty()).then(|| value.to_string());
      },
      "table.precision" => {
        self.table.precision = parse_optional_usize(key, value)?;
      },
      "list.indent" => {
        self.list.indent = parse_optional_usize(key, value)?;
      },
      "list.numbered" => {
        self.list.numbered = if value.is_empty() {
          None
        } else {
          Some(parse_bool(key, value)?)
        };
      },
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'. See documentation for \
           supported keys."
        )));
      },
    }

    Ok(())
  }

  /// Merge another config into this one, with the other config's values taking
  /// precedence.
  ///
  /// # Merge Rules
  ///
  /// - [`Option<T>`] fields: Other's [`Some`] value replaces this config's
  ///   value
  /// - Map fields: Other's entries are merged in (can override individual
  ///   keys)
  pub fn merge(&mut self, other: Self) {
    if other.output.encoding.is_some() {
      self.output.encoding = other.output.encoding;
    }

    self.styles.patterns.extend(other.styles.patterns);
    self.styles.aliases.extend(other.styles.aliases);

    if other.table.precision.is_some() {
      self.table.precision = other.table.precision;
    }
    if other.list.indent.is_some() {
      self.list.indent = other.list.indent;
    }
    if other.list.numbered.is_some() {
      self.list.numbered = other.list.numbered;
    }
  }

  /// Search for config files in common locations
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    static RESULT: OnceLock<Option<PathBuf>> = OnceLock::new();
    RESULT
      .get_or_init(|| {
        let current_dir = std::env::current_dir().ok()?;
        Self::find_config_file_in(&current_dir)
      })
      .clone()
  }

  /// Search `dir` and then the user configuration directories.
  #[must_use]
  pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    let config_filenames = [
      "mdfy.toml",
      "mdfy.json",
      ".mdfy.toml",
      ".mdfy.json",
      ".config/mdfy.toml",
      ".config/mdfy.json",
    ];

    for filename in &config_filenames {
      let config_path = dir.join(filename);
      if config_path.exists() {
        return Some(config_path);
      }
    }

    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
      let xdg_config_dir = PathBuf::from(xdg_config_home);
      for filename in &["mdfy.toml", "mdfy.json"] {
        let config_path = xdg_config_dir.join(filename);
        if config_path.exists() {
          return Some(config_path);
        }
      }
    }

    if let Ok(home) = std::env::var("HOME") {
      let home_config_dir = PathBuf::from(home).join(".config").join("mdfy");
      for filename in &["config.toml", "config.json"] {
        let config_path = home_config_dir.join(filename);
        if config_path.exists() {
          return Some(config_path);
        }
      }
    }

    None
  }

  /// Check that the configuration can be turned into working components.
  ///
  /// # Errors
  ///
  /// Returns an error listing every problem found: style templates without
  /// a `{}` slot, aliases for unknown styles, and unknown encoding labels.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    for (name, template) in &self.styles.patterns {
      if !template.contains(SLOT) {
        errors.push(format!(
          "Style '{name}' has template '{template}' without a '{SLOT}' slot"
        ));
      }
    }

    let builtin = StylePatterns::default();
    for name in self.styles.aliases.keys() {
      if !self.styles.patterns.contains_key(name) && !builtin.contains(name) {
        errors.push(format!("Aliases defined for unknown style '{name}'"));
      }
    }

    if let Some(label) = &self.output.encoding
      && Encoding::for_label(label.trim().as_bytes()).is_none()
    {
      errors.push(format!("Unknown output encoding '{label}'"));
    }

    if errors.is_empty() {
      Ok(())
    } else {
      Err(ConfigError::Config(format!(
        "Configuration validation failed:\n- {}",
        errors.join("\n- ")
      )))
    }
  }

  #[must_use]
  pub fn encoding(&self) -> &str {
    self.output.encoding.as_deref().unwrap_or(DEFAULT_ENCODING)
  }

  #[must_use]
  pub fn list_indent(&self) -> usize {
    self.list.indent.unwrap_or(DEFAULT_LIST_INDENT)
  }

  #[must_use]
  pub fn list_numbered(&self) -> bool {
    self.list.numbered.unwrap_or(true)
  }

  /// The built-in styles with the configured patterns and aliases layered
  /// on top.
  #[must_use]
  pub fn style_patterns(&self) -> StylePatterns {
    let mut patterns = StylePatterns::default();
    for (name, template) in &self.styles.patterns {
      patterns.insert(name.as_str(), template.as_str());
    }
    for (name, aliases) in &self.styles.aliases {
      for alias in aliases {
        patterns.alias(name, alias);
      }
    }
    patterns
  }

  #[must_use]
  pub fn text_formatter(&self) -> TextFormatter {
    TextFormatter::with_patterns(self.style_patterns())
  }

  /// A shareable styler for [`mdfy_core::MdText::with_styler`].
  #[must_use]
  pub fn styler(&self) -> Arc<dyn TextStyler> {
    Arc::new(self.text_formatter())
  }

  /// A writer for `path` using the configured encoding.
  ///
  /// # Errors
  ///
  /// Returns an error if the encoding label is unknown.
  pub fn mdfier(
    &self,
    path: impl Into<PathBuf>,
  ) -> Result<Mdfier, ConfigError> {
    Ok(Mdfier::new(path).with_encoding(self.encoding())?)
  }

  /// Give `table` the configured precision unless it already has one.
  #[must_use]
  pub fn apply_table_defaults(&self, table: MdTable) -> MdTable {
    match (table.precision(), self.table.precision) {
      (None, Some(precision)) => table.with_precision(precision),
      _ => table,
    }
  }

  /// A list using the configured indentation and marker style.
  pub fn list<I, T>(&self, items: I) -> MdList
  where
    I: IntoIterator<Item = T>,
    T: Into<ListItem>,
  {
    MdList::new(items)
      .with_indent(self.list_indent())
      .with_numbered(self.list_numbered())
  }

  /// Generate a default configuration file with commented explanations
  ///
  /// # Errors
  ///
  /// Returns an error if the template cannot be retrieved or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let config_content = crate::templates::get_template(format)?;

    fs::write(path, config_content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write default config to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}

fn non_empty_name<'a>(
  key: &str,
  name: &'a str,
) -> Result<&'a str, ConfigError> {
  let name = name.trim();
  if name.is_empty() {
    return Err(ConfigError::Config(format!(
      "Missing style name in configuration key '{key}'"
    )));
  }
  Ok(name)
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
  match value.to_lowercase().as_str() {
    "true" | "yes" | "1" => Ok(true),
    "false" | "no" | "0" => Ok(false),
    _ => {
      Err(ConfigError::Config(format!(
        "Invalid boolean value for '{key}': '{value}'. Expected true/false, \
         yes/no, or 1/0"
      )))
    },
  }
}

fn parse_optional_usize(
  key: &str,
  value: &str,
) -> Result<Option<usize>, ConfigError> {
  if value.is_empty() {
    return Ok(None);
  }
  value.parse().map(Some).map_err(|_| {
    ConfigError::Config(format!(
      "Invalid value for '{key}': '{value}'. Expected a positive integer"
    ))
  })
}
