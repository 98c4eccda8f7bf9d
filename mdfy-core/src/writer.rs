//! Rendering flattened documents and persisting them.
use std::{
  borrow::Cow,
  fs::{self, File},
  io::{BufWriter, Write},
  path::{Path, PathBuf},
};

use encoding_rs::{Encoding, UTF_8};
use log::{debug, warn};

use crate::{
  content::{Content, flatten},
  elements::Element,
  error::{MdfyError, Result},
};

/// Writes Markdown documents to a file.
///
/// ```no_run
/// use mdfy_core::{MdHeader, MdText, Mdfier, contents};
///
/// Mdfier::new("out/README.md")
///   .write(contents![MdHeader::new("Hi"), MdText::new("[X:bold] ok")])
///   .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Mdfier {
  filepath: PathBuf,
  encoding: &'static Encoding,
}

impl Mdfier {
  /// A writer targeting `filepath`, encoding output as UTF-8.
  pub fn new(filepath: impl Into<PathBuf>) -> Self {
    Self {
      filepath: filepath.into(),
      encoding: UTF_8,
    }
  }

  /// Encode output with the encoding named by `label`.
  ///
  /// Labels follow the WHATWG Encoding Standard, for example `utf-8`,
  /// `latin1` or `shift_jis`.
  ///
  /// # Errors
  ///
  /// Returns [`MdfyError::UnsupportedEncoding`] for unknown labels.
  pub fn with_encoding(mut self, label: &str) -> Result<Self> {
    self.encoding = Encoding::for_label(label.trim().as_bytes())
      .ok_or_else(|| MdfyError::UnsupportedEncoding(label.to_string()))?;
    Ok(self)
  }

  #[must_use]
  pub fn filepath(&self) -> &Path {
    &self.filepath
  }

  #[must_use]
  pub const fn encoding(&self) -> &'static Encoding {
    self.encoding
  }

  /// Flatten `content` and join the rendered elements with newlines.
  ///
  /// A table of contents without a snapshot lists the headers that follow
  /// it in the flattened sequence.
  ///
  /// # Errors
  ///
  /// Propagates element rendering errors.
  pub fn stringify(content: impl Into<Content>) -> Result<String> {
    render_document(&flatten(content))
  }

  /// Render `content` and replace the target file with it.
  ///
  /// Parent directories are created as needed and the output always ends
  /// with a newline.
  ///
  /// # Errors
  ///
  /// Propagates rendering and I/O errors. A failed write may leave a
  /// partially written file behind.
  pub fn write(&self, content: impl Into<Content>) -> Result<()> {
    let markdown = Self::stringify(content)?;
    create_parent_dirs(&self.filepath)?;
    fs::write(&self.filepath, self.encode(&markdown, true))?;
    debug!("Wrote {}", self.filepath.display());
    Ok(())
  }

  /// Open the target file for a series of incremental writes.
  ///
  /// The file is truncated once, when the session starts.
  ///
  /// # Errors
  ///
  /// Returns an I/O error if the file or its parent directories cannot be
  /// created.
  pub fn session(&self) -> Result<WriteSession> {
    create_parent_dirs(&self.filepath)?;
    let file = File::create(&self.filepath)?;
    debug!("Opened write session for {}", self.filepath.display());
    Ok(WriteSession {
      writer: BufWriter::new(file),
      mdfier: self.clone(),
    })
  }

  /// Run `f` with an open session and close it afterwards.
  ///
  /// The file handle is released whether `f` succeeds or fails; only a
  /// successful run flushes the buffered output explicitly.
  ///
  /// # Errors
  ///
  /// Returns the error of `f`, or an error opening or finishing the
  /// session.
  pub fn with_session<T, F>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&mut WriteSession) -> Result<T>,
  {
    let mut session = self.session()?;
    let result = f(&mut session);
    match result {
      Ok(value) => {
        session.finish()?;
        Ok(value)
      },
      Err(e) => {
        drop(session);
        Err(e)
      },
    }
  }

  fn encode<'a>(
    &self,
    markdown: &'a str,
    trailing_newline: bool,
  ) -> Cow<'a, [u8]> {
    let text: Cow<'a, str> = if trailing_newline {
      Cow::Owned(format!("{markdown}\n"))
    } else {
      Cow::Borrowed(markdown)
    };

    if self.encoding == UTF_8 {
      return match text {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
      };
    }

    let (bytes, used, had_errors) = self.encoding.encode(&text);
    if had_errors {
      warn!(
        "Some characters cannot be represented in {}, writing them as \
         numeric character references",
        used.name()
      );
    }
    Cow::Owned(bytes.into_owned())
  }
}

/// An open output file accepting several document batches.
///
/// Dropping the session closes the file.
#[derive(Debug)]
pub struct WriteSession {
  writer: BufWriter<File>,
  mdfier: Mdfier,
}

impl WriteSession {
  /// Render one batch of content and append it to the file.
  ///
  /// A table of contents without a snapshot only sees the elements of its
  /// own batch.
  ///
  /// # Errors
  ///
  /// Propagates rendering and I/O errors.
  pub fn write(&mut self, content: impl Into<Content>) -> Result<()> {
    let markdown = Mdfier::stringify(content)?;
    let bytes = self.mdfier.encode(&markdown, true);
    self.writer.write_all(&bytes)?;
    Ok(())
  }

  #[must_use]
  pub fn filepath(&self) -> &Path {
    self.mdfier.filepath()
  }

  /// Flush buffered output and close the file.
  ///
  /// # Errors
  ///
  /// Returns an I/O error if flushing fails.
  pub fn finish(mut self) -> Result<()> {
    self.writer.flush()?;
    debug!("Closed write session for {}", self.filepath().display());
    Ok(())
  }
}

/// Write `content` to `filepath` as UTF-8 in one go.
///
/// # Errors
///
/// See [`Mdfier::write`].
pub fn write(
  content: impl Into<Content>,
  filepath: impl AsRef<Path>,
) -> Result<()> {
  Mdfier::new(filepath.as_ref()).write(content)
}

fn render_document(elements: &[Element]) -> Result<String> {
  let rendered = elements
    .iter()
    .enumerate()
    .map(|(position, element)| element.render_at(elements, position))
    .collect::<Result<Vec<_>>>()?;
  Ok(rendered.join("\n"))
}

fn create_parent_dirs(path: &Path) -> Result<()> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    fs::create_dir_all(parent)?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::*;
  use crate::{MdHeader, MdTableOfContents, MdText, contents};

  #[test]
  fn test_stringify_joins_with_newlines() {
    let markdown = Mdfier::stringify(contents![
      MdHeader::new("Hi"),
      MdText::new("[X:bold] ok"),
    ])
    .expect("stringify");
    assert_eq!(markdown, "# Hi\n**X** ok");
  }

  #[test]
  fn test_toc_between_headers() {
    let markdown = Mdfier::stringify(contents![
      MdHeader::new("First Section"),
      MdHeader::with_level("Subsection", 2),
      MdTableOfContents::new(),
      MdHeader::new("Second Section"),
      MdHeader::with_level("Another Subsection", 2),
    ])
    .expect("stringify");
    assert_eq!(
      markdown,
      "# First Section\n## Subsection\n- [Second Section](#second-section)\n  \
       - [Another Subsection](#another-subsection)\n\n# Second Section\n## \
       Another Subsection"
    );
  }

  #[test]
  fn test_unknown_encoding() {
    assert!(matches!(
      Mdfier::new("x.md").with_encoding("klingon"),
      Err(MdfyError::UnsupportedEncoding(_))
    ));
  }

  #[test]
  fn test_unmappable_characters_become_references() {
    let mdfier = Mdfier::new("x.md").with_encoding("latin1").expect("label");
    assert_eq!(mdfier.encode("é✓", false).as_ref(), b"\xe9&#10003;");
  }
}
