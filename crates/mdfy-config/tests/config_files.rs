#![allow(clippy::expect_used, clippy::panic, reason = "Fine in tests")]
use std::fs;

use mdfy_config::{Config, ConfigError, templates};
use tempfile::TempDir;

#[test]
fn test_default_templates_load_to_default_behaviour() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");

  for format in ["toml", "json"] {
    let path = temp_dir.path().join(format!("mdfy.{format}"));
    Config::generate_default_config(format, &path)
      .expect("Failed to generate default config");

    let config = Config::from_file(&path).expect("Failed to load template");
    config.validate().expect("Template should validate");
    assert_eq!(config.encoding(), "utf-8", "{format}");
    assert_eq!(config.list_indent(), 4, "{format}");
    assert!(config.list_numbered(), "{format}");
    assert_eq!(config.table.precision, None, "{format}");
    assert!(config.styles.patterns.is_empty(), "{format}");
  }
}

#[test]
fn test_unsupported_template_format() {
  assert!(matches!(
    templates::get_template("yaml"),
    Err(templates::TemplateError::UnsupportedFormat(_))
  ));
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let result =
    Config::generate_default_config("yaml", &temp_dir.path().join("x.yaml"));
  assert!(matches!(result, Err(ConfigError::Template(_))));
}

#[test]
fn test_from_file_toml() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let path = temp_dir.path().join("mdfy.toml");
  fs::write(
    &path,
    r#"
[output]
encoding = "latin1"

[styles]
patterns = { mark = "<mark>{}</mark>" }
aliases = { mark = ["hl"] }

[table]
precision = 2
"#,
  )
  .expect("Failed to write config");

  let config = Config::from_file(&path).expect("Failed to load config");
  assert_eq!(config.encoding(), "latin1");
  assert_eq!(config.table.precision, Some(2));
  assert_eq!(
    config.text_formatter().format("[x:hl]"),
    "<mark>x</mark>"
  );
}

#[test]
fn test_from_file_rejects_unknown_fields_and_formats() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");

  let typo = temp_dir.path().join("typo.toml");
  fs::write(&typo, "[list]\nindnet = 2\n").expect("Failed to write config");
  assert!(Config::from_file(&typo).is_err());

  let yaml = temp_dir.path().join("mdfy.yaml");
  fs::write(&yaml, "list: {}\n").expect("Failed to write config");
  let err = Config::from_file(&yaml).expect_err("yaml is unsupported");
  assert!(err.to_string().contains("Unsupported config file format"));

  assert!(Config::from_file(temp_dir.path().join("missing.toml")).is_err());
}

#[test]
fn test_load_merges_files_then_applies_overrides() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let base = temp_dir.path().join("base.toml");
  let local = temp_dir.path().join("local.json");
  fs::write(&base, "[list]\nindent = 2\nnumbered = false\n")
    .expect("Failed to write config");
  fs::write(&local, r#"{"list": {"indent": 3}, "table": {"precision": 1}}"#)
    .expect("Failed to write config");

  let config = Config::load(&[base, local], &["table.precision=5".to_string()])
    .expect("Failed to load config");

  assert_eq!(config.list_indent(), 3);
  assert!(!config.list_numbered());
  assert_eq!(config.table.precision, Some(5));
}

#[test]
fn test_load_validates_result() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let path = temp_dir.path().join("bad.toml");
  fs::write(&path, "[styles]\npatterns = { loud = \"!!\" }\n")
    .expect("Failed to write config");

  let err = Config::load(&[path], &[]).expect_err("template lacks a slot");
  assert!(err.to_string().contains("'loud'"));
}

#[test]
fn test_find_config_file_in_directory() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  fs::create_dir_all(temp_dir.path().join(".config"))
    .expect("Failed to create dir");
  fs::write(temp_dir.path().join(".config/mdfy.toml"), "")
    .expect("Failed to write config");
  fs::write(temp_dir.path().join(".mdfy.json"), "{}")
    .expect("Failed to write config");

  let found = Config::find_config_file_in(temp_dir.path())
    .expect("config should be found");
  assert_eq!(found, temp_dir.path().join(".mdfy.json"));
}
