//! Style name to Markdown template lookup.
use indexmap::IndexMap;
use log::warn;

/// Slot that receives the styled content inside a template.
pub const SLOT: &str = "{}";

/// Built-in canonical styles and their templates.
pub const STYLE_PATTERNS: &[(&str, &str)] = &[
  ("strong", "***{}***"),
  ("bold", "**{}**"),
  ("italic", "*{}*"),
  ("not", "~~{}~~"),
  ("underline", "<u>{}</u>"),
  ("code", "`{}`"),
];

/// Short aliases for the built-in styles.
pub const STYLE_ALIASES: &[(&str, &[&str])] = &[
  ("strong", &["st"]),
  ("bold", &["bo", "bd"]),
  ("italic", &["it"]),
  ("not", &["no", "nt"]),
  ("underline", &["un", "ul"]),
  ("code", &["cd", "quote"]),
];

/// Combined lookup of canonical style names and their aliases.
///
/// Aliases are resolved through their canonical style on every lookup, so
/// replacing a canonical template also changes what its aliases render.
/// Alias expansion never replaces a canonical entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePatterns {
  canonical: IndexMap<String, String>,
  aliases:   IndexMap<String, String>,
}

impl StylePatterns {
  /// A lookup without any styles.
  #[must_use]
  pub fn empty() -> Self {
    Self {
      canonical: IndexMap::new(),
      aliases:   IndexMap::new(),
    }
  }

  /// Build a lookup from canonical patterns, then expand `aliases`.
  #[must_use]
  pub fn expand<'a, P, A, N>(patterns: P, aliases: A) -> Self
  where
    P: IntoIterator<Item = (&'a str, &'a str)>,
    A: IntoIterator<Item = (&'a str, N)>,
    N: IntoIterator<Item = &'a str>,
  {
    let mut expanded = Self::empty();
    for (name, template) in patterns {
      expanded.insert(name, template);
    }
    for (name, names) in aliases {
      for alias in names {
        expanded.alias(name, alias);
      }
    }
    expanded
  }

  /// Register or replace a canonical style.
  ///
  /// A name that was previously an alias becomes canonical and stops
  /// following its old style.
  pub fn insert(&mut self, name: impl Into<String>, template: impl Into<String>) {
    let name = name.into();
    if self.aliases.shift_remove(&name).is_some() {
      warn!("Style '{name}' replaces an alias of the same name");
    }
    self.canonical.insert(name, template.into());
  }

  /// Point `alias` at the canonical style `name`.
  ///
  /// Returns `false` (and leaves the lookup untouched) when `name` is not a
  /// canonical style or `alias` already names a canonical style.
  pub fn alias(&mut self, name: &str, alias: &str) -> bool {
    if !self.canonical.contains_key(name) {
      warn!("Alias '{alias}' refers to unknown style '{name}', ignoring it");
      return false;
    }

    if self.canonical.contains_key(alias) {
      warn!(
        "Alias '{alias}' for '{name}' would shadow a canonical style, \
         ignoring it"
      );
      return false;
    }

    self.aliases.insert(alias.to_string(), name.to_string());
    true
  }

  /// Look up the template for a style name or alias.
  #[must_use]
  pub fn get(&self, name: &str) -> Option<&str> {
    let canonical = self.aliases.get(name).map_or(name, String::as_str);
    self.canonical.get(canonical).map(String::as_str)
  }

  #[must_use]
  pub fn contains(&self, name: &str) -> bool {
    self.get(name).is_some()
  }

  /// Iterate over all resolvable names (canonical first, then aliases).
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self
      .canonical
      .keys()
      .chain(self.aliases.keys())
      .map(String::as_str)
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.canonical.len() + self.aliases.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.canonical.is_empty()
  }
}

impl Default for StylePatterns {
  fn default() -> Self {
    Self::expand(
      STYLE_PATTERNS.iter().copied(),
      STYLE_ALIASES
        .iter()
        .map(|(name, aliases)| (*name, aliases.iter().copied())),
    )
  }
}

/// Substitute `content` into the first slot of `template`.
///
/// Content is inserted verbatim, so a `{}` inside it is never expanded. A
/// template without a slot is returned followed by the content.
#[must_use]
pub fn apply_template(template: &str, content: &str) -> String {
  template.split_once(SLOT).map_or_else(
    || format!("{template}{content}"),
    |(before, after)| format!("{before}{content}{after}"),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_lookup_has_canonical_and_aliases() {
    let patterns = StylePatterns::default();
    assert_eq!(patterns.get("bold"), Some("**{}**"));
    assert_eq!(patterns.get("bd"), Some("**{}**"));
    assert_eq!(patterns.get("bo"), Some("**{}**"));
    assert_eq!(patterns.get("quote"), Some("`{}`"));
    assert_eq!(patterns.get("ul"), Some("<u>{}</u>"));
    assert_eq!(patterns.get("nope"), None);
    assert_eq!(patterns.len(), 6 + 10);
  }

  #[test]
  fn test_every_alias_matches_its_canonical_template() {
    let patterns = StylePatterns::default();
    for (name, aliases) in STYLE_ALIASES {
      for alias in *aliases {
        assert_eq!(patterns.get(alias), patterns.get(name), "alias {alias}");
      }
    }
  }

  #[test]
  fn test_alias_never_overwrites_canonical() {
    let patterns = StylePatterns::expand([("bold", "**{}**"), ("it", "_{}_")], [(
      "bold",
      ["it", "b"],
    )]);
    assert_eq!(patterns.get("it"), Some("_{}_"));
    assert_eq!(patterns.get("b"), Some("**{}**"));
  }

  #[test]
  fn test_alias_to_unknown_style_is_skipped() {
    let mut patterns = StylePatterns::default();
    assert!(!patterns.alias("sparkle", "sp"));
    assert!(!patterns.contains("sp"));
  }

  #[test]
  fn test_apply_template_does_not_reexpand_content() {
    assert_eq!(apply_template("**{}**", "a {} b"), "**a {} b**");
    assert_eq!(apply_template(">>", "x"), ">>x");
  }

  #[test]
  fn test_replaced_canonical_updates_its_aliases() {
    let mut patterns = StylePatterns::default();
    patterns.insert("bold", "__{}__");
    assert_eq!(patterns.get("bold"), Some("__{}__"));
    assert_eq!(patterns.get("bd"), Some("__{}__"));
    assert_eq!(patterns.get("bo"), Some("__{}__"));
    assert_eq!(patterns.get("st"), Some("***{}***"));
  }

  #[test]
  fn test_insert_over_alias_makes_it_canonical() {
    let mut patterns = StylePatterns::default();
    patterns.insert("bd", "<b>{}</b>");
    assert_eq!(patterns.get("bd"), Some("<b>{}</b>"));
    assert_eq!(patterns.get("bo"), Some("**{}**"));
    assert_eq!(patterns.len(), 6 + 10);
  }
}
