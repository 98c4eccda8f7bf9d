use log::{debug, warn};

use crate::{
  error::{MdfyError, Result},
  value::{Record, Value, flatten_record},
};

/// Header, row labels and the value grid of a table.
///
/// Every row of `values` has the same length.
#[derive(Debug, Clone, Default)]
pub struct TableData {
  pub header:     Vec<String>,
  pub row_labels: Vec<String>,
  pub values:     Vec<Vec<Value>>,
}

impl TableData {
  /// Build the grid from already flattened records.
  ///
  /// Columns follow the key order of the first record. Keys missing from a
  /// later record become empty cells, keys that only later records carry
  /// are ignored. `header` replaces the displayed column names only.
  #[must_use]
  pub fn from_records(
    records: &[Record],
    header: Option<Vec<String>>,
    row_labels: Option<Vec<String>>,
  ) -> Self {
    let Some(first) = records.first() else {
      return Self::default();
    };

    let keys: Vec<&String> = first.keys().collect();
    let values = records
      .iter()
      .map(|record| {
        keys
          .iter()
          .map(|key| record.get(*key).cloned().unwrap_or(Value::Null))
          .collect()
      })
      .collect();

    Self {
      header: header
        .unwrap_or_else(|| keys.iter().map(|key| (*key).clone()).collect()),
      row_labels: row_labels.unwrap_or_default(),
      values,
    }
  }

  /// Swap the roles of header and row labels and pivot the grid.
  ///
  /// The new header is the old row labels, or blank cells when there were
  /// none.
  #[must_use]
  pub fn transpose(&self) -> Self {
    let Some(columns) = self.values.first().map(Vec::len) else {
      return Self::default();
    };
    if columns == 0 {
      return Self::default();
    }

    let values = (0..columns)
      .map(|column| {
        self
          .values
          .iter()
          .map(|row| row.get(column).cloned().unwrap_or(Value::Null))
          .collect()
      })
      .collect();

    let header = if self.row_labels.is_empty() {
      vec![String::new(); self.values.len()]
    } else {
      self.row_labels.clone()
    };

    Self {
      header,
      row_labels: self.header.clone(),
      values,
    }
  }

  /// Render as a Markdown pipe table. A grid without columns renders as
  /// an empty string.
  ///
  /// # Errors
  ///
  /// Propagates rendering errors of element cells.
  pub fn render(&self, precision: Option<usize>) -> Result<String> {
    let columns = self.values.first().map_or(0, Vec::len);
    if columns == 0 {
      return Ok(String::new());
    }
    let has_row_labels = !self.row_labels.is_empty();

    let mut lines = Vec::with_capacity(self.values.len() + 2);

    let mut header_parts: Vec<&str> = Vec::with_capacity(columns + 1);
    if has_row_labels {
      header_parts.push("");
    }
    header_parts.extend(self.fitted_header(columns));
    let header_cells: Vec<String> = header_parts
      .iter()
      .map(|part| {
        if part.is_empty() {
          " ".to_string()
        } else {
          format!(" {part} ")
        }
      })
      .collect();
    lines.push(format!("|{}|", header_cells.join("|")));

    let separator_columns = columns + usize::from(has_row_labels);
    lines.push(format!("|{}|", vec![" --- "; separator_columns].join("|")));

    if has_row_labels && self.row_labels.len() < self.values.len() {
      warn!(
        "{} row labels given for {} rows, leaving the remaining rows unlabeled",
        self.row_labels.len(),
        self.values.len()
      );
    }

    for (i, row) in self.values.iter().enumerate() {
      let mut parts = Vec::with_capacity(row.len() + 1);
      if has_row_labels {
        parts.push(self.row_labels.get(i).cloned().unwrap_or_default());
      }
      for value in row {
        parts.push(value.render(precision)?);
      }
      lines.push(format!("| {} |", parts.join(" | ")));
    }

    Ok(lines.join("\n"))
  }

  fn fitted_header(&self, columns: usize) -> impl Iterator<Item = &str> {
    match self.header.len().cmp(&columns) {
      std::cmp::Ordering::Less => {
        warn!(
          "{} header labels given for {columns} columns, padding with blanks",
          self.header.len()
        );
      },
      std::cmp::Ordering::Greater => {
        warn!(
          "{} header labels given for {columns} columns, dropping the surplus",
          self.header.len()
        );
      },
      std::cmp::Ordering::Equal => {},
    }

    self
      .header
      .iter()
      .map(String::as_str)
      .chain(std::iter::repeat(""))
      .take(columns)
  }
}

/// A Markdown table built from one or more records.
///
/// Nested records are flattened into dotted column names on construction.
///
/// # Examples
///
/// ```
/// use mdfy_core::MdTable;
/// use serde_json::json;
///
/// let table = MdTable::from_json(json!([
///   {"Name": "John Doe", "Age": 30},
///   {"Name": "Jane Doe", "Age": 25},
/// ]))
/// .unwrap();
///
/// assert_eq!(
///   table.clone().with_row_labels(["Person 1", "Person 2"]).render().unwrap(),
///   "| | Name | Age |\n| --- | --- | --- |\n| Person 1 | John Doe | 30 |\n| Person 2 | Jane Doe | 25 |"
/// );
/// assert_eq!(
///   table.transposed().render().unwrap(),
///   "| | | |\n| --- | --- | --- |\n| Name | John Doe | Jane Doe |\n| Age | 30 | 25 |"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MdTable {
  records:    Vec<Record>,
  header:     Option<Vec<String>>,
  row_labels: Option<Vec<String>>,
  transpose:  bool,
  precision:  Option<usize>,
}

impl MdTable {
  /// A single-row table.
  #[must_use]
  pub fn new(record: Record) -> Self {
    Self::from_records([record])
  }

  pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
    Self {
      records: records
        .into_iter()
        .map(|record| flatten_record(&record))
        .collect(),
      ..Self::default()
    }
  }

  /// Build a table from a dynamic value.
  ///
  /// # Errors
  ///
  /// Returns [`MdfyError::InvalidTableInput`] unless `value` is a record.
  pub fn from_value(value: Value) -> Result<Self> {
    match value {
      Value::Record(record) => Ok(Self::new(record)),
      other => {
        Err(MdfyError::InvalidTableInput(format!(
          "expected a record, got {}",
          kind_of(&other)
        )))
      },
    }
  }

  /// Build a table from a JSON object or an array of JSON objects.
  ///
  /// # Errors
  ///
  /// Returns [`MdfyError::InvalidTableInput`] for any other JSON shape.
  pub fn from_json(value: serde_json::Value) -> Result<Self> {
    use serde_json::Value as Json;

    match value {
      object @ Json::Object(_) => Self::from_value(Value::from(object)),
      Json::Array(items) => {
        let records = items
          .into_iter()
          .enumerate()
          .map(|(i, item)| {
            match Value::from(item) {
              Value::Record(record) => Ok(record),
              other => {
                Err(MdfyError::InvalidTableInput(format!(
                  "item {i} is {}, expected an object",
                  kind_of(&other)
                )))
              },
            }
          })
          .collect::<Result<Vec<_>>>()?;
        debug!("Building table from {} records", records.len());
        Ok(Self::from_records(records))
      },
      other => {
        Err(MdfyError::InvalidTableInput(format!(
          "expected an object or an array of objects, got {other}"
        )))
      },
    }
  }

  /// Replace the displayed column names.
  #[must_use]
  pub fn with_header<I, S>(mut self, header: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.header = Some(header.into_iter().map(Into::into).collect());
    self
  }

  /// Label each row. An empty list disables row labels.
  #[must_use]
  pub fn with_row_labels<I, S>(mut self, row_labels: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.row_labels = Some(row_labels.into_iter().map(Into::into).collect());
    self
  }

  #[must_use]
  pub const fn transposed(self) -> Self {
    self.with_transpose(true)
  }

  #[must_use]
  pub const fn with_transpose(mut self, transpose: bool) -> Self {
    self.transpose = transpose;
    self
  }

  /// Format floats with a fixed number of decimal places.
  #[must_use]
  pub const fn with_precision(mut self, precision: usize) -> Self {
    self.precision = Some(precision);
    self
  }

  #[must_use]
  pub const fn precision(&self) -> Option<usize> {
    self.precision
  }

  #[must_use]
  pub fn records(&self) -> &[Record] {
    &self.records
  }

  /// The grid that [`MdTable::render`] draws, after transposition.
  #[must_use]
  pub fn table_data(&self) -> TableData {
    let data = TableData::from_records(
      &self.records,
      self.header.clone(),
      self.row_labels.clone(),
    );
    if self.transpose { data.transpose() } else { data }
  }

  /// Render the table. An empty table renders as an empty string.
  ///
  /// # Errors
  ///
  /// Propagates rendering errors of element cells.
  pub fn render(&self) -> Result<String> {
    self.table_data().render(self.precision)
  }
}

impl From<Record> for MdTable {
  fn from(record: Record) -> Self {
    Self::new(record)
  }
}

impl From<Vec<Record>> for MdTable {
  fn from(records: Vec<Record>) -> Self {
    Self::from_records(records)
  }
}

impl TryFrom<serde_json::Value> for MdTable {
  type Error = MdfyError;

  fn try_from(value: serde_json::Value) -> Result<Self> {
    Self::from_json(value)
  }
}

impl TryFrom<Value> for MdTable {
  type Error = MdfyError;

  fn try_from(value: Value) -> Result<Self> {
    Self::from_value(value)
  }
}

const fn kind_of(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Integer(_) | Value::Float(_) => "a number",
    Value::String(_) => "a string",
    Value::Element(_) => "an element",
    Value::Record(_) => "a record",
  }
}
