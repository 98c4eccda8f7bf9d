#![allow(clippy::expect_used, clippy::panic, reason = "Fine in tests")]
use std::fs;

use mdfy_core::{
  Content,
  Element,
  ListItem,
  MdCode,
  MdHeader,
  MdHorizontal,
  MdImage,
  MdLink,
  MdList,
  MdQuote,
  MdTable,
  MdTableOfContents,
  MdText,
  Mdfier,
  MdfyError,
  contents,
  flatten,
};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_write_creates_two_line_file() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let path = temp_dir.path().join("nested").join("dir").join("out.md");

  Mdfier::new(&path)
    .write(contents![MdHeader::new("Hi"), MdText::new("[X:bold] ok")])
    .expect("Failed to write document");

  let written = fs::read_to_string(&path).expect("Failed to read output");
  assert_eq!(written, "# Hi\n**X** ok\n");
}

#[test]
fn test_write_overwrites_existing_file() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let path = temp_dir.path().join("out.md");
  fs::write(&path, "old content that is much longer than the new one\n")
    .expect("Failed to seed file");

  mdfy_core::write("new", &path).expect("Failed to write document");

  assert_eq!(fs::read_to_string(&path).expect("read"), "new\n");
}

#[test]
fn test_toc_lists_only_following_headers() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let path = temp_dir.path().join("toc.md");

  Mdfier::new(&path)
    .write(contents![
      MdHeader::new("First Section"),
      MdHeader::with_level("Subsection", 2),
      MdTableOfContents::new(),
      MdHeader::new("Second Section"),
      MdHeader::with_level("Another Subsection", 2),
    ])
    .expect("Failed to write document");

  let written = fs::read_to_string(&path).expect("read");
  let toc: Vec<&str> = written.lines().filter(|l| l.contains("](#")).collect();
  assert_eq!(toc, [
    "- [Second Section](#second-section)",
    "  - [Another Subsection](#another-subsection)",
  ]);
}

#[test]
fn test_toc_snapshot_ignores_position() {
  let chapters = vec![MdHeader::new("One"), MdHeader::new("Two")];
  let markdown = Mdfier::stringify(contents![
    MdTableOfContents::with_contents(chapters.clone()),
    chapters,
  ])
  .expect("stringify");
  assert_eq!(
    markdown,
    "- [One](#one)\n- [Two](#two)\n\n# One\n# Two"
  );
}

#[test]
fn test_toc_in_snapshot_mode_without_headers_is_empty() {
  let toc = MdTableOfContents::with_contents(contents!["just text"]);
  assert_eq!(toc.render().expect("render"), "");
}

#[test]
fn test_toc_without_any_contents_is_an_error() {
  let err = MdTableOfContents::new()
    .render()
    .expect_err("standalone ToC has no contents");
  assert!(matches!(err, MdfyError::MissingTocContents));
  assert!(err.to_string().starts_with("No contents provided."));
}

#[test]
fn test_toc_nested_in_quote_is_an_error_when_written() {
  let result = Mdfier::stringify(contents![
    MdQuote::new(MdTableOfContents::new()),
    MdHeader::new("Later"),
  ]);
  assert!(matches!(result, Err(MdfyError::MissingTocContents)));
}

#[test]
fn test_flatten_nested_groups() {
  let flat = flatten(contents!["A", contents!["B1", vec!["B2"]], "C"]);
  let texts: Vec<String> = flat.iter().map(ToString::to_string).collect();
  assert_eq!(texts, ["A", "B1", "B2", "C"]);
}

#[test]
fn test_every_element_kind_renders() {
  let table = MdTable::from_json(json!({"k": "v"})).expect("table");
  let content: Content = contents![
    MdHeader::new("Title"),
    MdText::new("[styled:it]"),
    "plain",
    MdList::new(vec![ListItem::from("a"), ListItem::Nested(vec!["b".into()])])
      .bulleted(),
    table,
    MdCode::block("let x = 1;").with_syntax("rust"),
    MdQuote::new("quoted"),
    MdImage::new("img.png").with_alt("alt"),
    MdLink::new("https://example.com").with_text("site"),
    MdHorizontal::default(),
  ];
  let markdown = Mdfier::stringify(content).expect("stringify");
  assert_eq!(
    markdown,
    "# Title\n*styled*\nplain\n- a\n    - b\n| k |\n| --- |\n| v \
     |\n```rust\nlet x = 1;\n```\n> quoted\n![alt](img.png)\n[site](https://example.com)\n\n***\n"
  );
}

#[test]
fn test_session_writes_batches_in_order() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let path = temp_dir.path().join("session.md");
  let mdfier = Mdfier::new(&path);

  mdfier
    .with_session(|session| {
      session.write(contents![
        MdHeader::new("Part 1"),
        MdTableOfContents::new(),
      ])?;
      session.write(contents![MdHeader::new("Part 2")])?;
      Ok(())
    })
    .expect("Failed to write session");

  assert_eq!(
    fs::read_to_string(&path).expect("read"),
    "# Part 1\n\n# Part 2\n"
  );
}

#[test]
fn test_session_error_is_propagated() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let path = temp_dir.path().join("failed.md");

  let result: Result<(), MdfyError> =
    Mdfier::new(&path).with_session(|session| {
      session.write("before")?;
      session.write(Element::from(MdQuote::new(MdTableOfContents::new())))
    });

  assert!(matches!(result, Err(MdfyError::MissingTocContents)));
  // The handle was released, so the file can be replaced right away.
  mdfy_core::write("after", &path).expect("Failed to rewrite file");
  assert_eq!(fs::read_to_string(&path).expect("read"), "after\n");
}

#[test]
fn test_encoded_output() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let path = temp_dir.path().join("latin1.md");

  Mdfier::new(&path)
    .with_encoding("iso-8859-1")
    .expect("known label")
    .write(contents![MdText::new("[café:bold]")])
    .expect("Failed to write document");

  assert_eq!(fs::read(&path).expect("read"), b"**caf\xe9**\n");
}
