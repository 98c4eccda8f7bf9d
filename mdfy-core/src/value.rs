//! Dynamically typed table cells.
use indexmap::IndexMap;
use log::warn;

use crate::{
  elements::{Element, MdText},
  error::Result,
  utils::natural_float,
};

/// A mapping from column name to value, in first-seen key order.
pub type Record = IndexMap<String, Value>;

/// A single table value.
///
/// Nested [`Record`]s are flattened into dotted column names before a
/// table is rendered, so they never reach a cell.
#[derive(Debug, Clone)]
pub enum Value {
  Null,
  Bool(bool),
  Integer(i128),
  Float(f64),
  String(String),
  Element(Box<Element>),
  Record(Record),
}

impl Value {
  /// Render the value as table cell text.
  ///
  /// `precision` only affects floats. Without it floats use their natural
  /// form, so `3.0` stays `3.0`.
  ///
  /// # Errors
  ///
  /// Propagates the rendering error of an embedded element.
  pub fn render(&self, precision: Option<usize>) -> Result<String> {
    Ok(match self {
      Self::Null => String::new(),
      Self::Bool(b) => b.to_string(),
      Self::Integer(i) => i.to_string(),
      Self::Float(f) => {
        precision.map_or_else(|| natural_float(*f), |p| format!("{f:.p$}"))
      },
      Self::String(s) => s.clone(),
      Self::Element(element) => element.render()?,
      Self::Record(record) => record_to_json(record).to_string(),
    })
  }

  #[must_use]
  pub const fn as_record(&self) -> Option<&Record> {
    match self {
      Self::Record(record) => Some(record),
      _ => None,
    }
  }

  #[must_use]
  pub const fn is_null(&self) -> bool {
    matches!(self, Self::Null)
  }
}

/// Flatten nested records into dotted keys, depth-first.
///
/// ```
/// use mdfy_core::{Record, Value, value::flatten_record};
///
/// let mut user = Record::new();
/// user.insert("name".into(), "John".into());
/// user.insert("age".into(), 30.into());
/// let mut record = Record::new();
/// record.insert("user".into(), Value::Record(user));
///
/// let flat = flatten_record(&record);
/// assert_eq!(flat.keys().collect::<Vec<_>>(), ["user.name", "user.age"]);
/// ```
#[must_use]
pub fn flatten_record(record: &Record) -> Record {
  let mut flat = Record::new();
  flatten_into(record, None, &mut flat);
  flat
}

fn flatten_into(record: &Record, parent: Option<&str>, out: &mut Record) {
  for (key, value) in record {
    let key = parent.map_or_else(|| key.clone(), |p| format!("{p}.{key}"));
    match value {
      Value::Record(nested) => flatten_into(nested, Some(&key), out),
      other => {
        out.insert(key, other.clone());
      },
    }
  }
}

fn record_to_json(record: &Record) -> serde_json::Value {
  serde_json::Value::Object(
    record
      .iter()
      .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
      .collect(),
  )
}

impl From<&Value> for serde_json::Value {
  fn from(value: &Value) -> Self {
    match value {
      Value::Null => Self::Null,
      Value::Bool(b) => Self::Bool(*b),
      Value::Integer(i) => {
        i64::try_from(*i)
          .map(Self::from)
          .or_else(|_| u64::try_from(*i).map(Self::from))
          .unwrap_or_else(|_| Self::String(i.to_string()))
      },
      Value::Float(f) => Self::from(*f),
      Value::String(s) => Self::String(s.clone()),
      Value::Element(element) => {
        Self::String(element.render().unwrap_or_else(|e| {
          warn!("Failed to render element inside a value: {e}");
          String::new()
        }))
      },
      Value::Record(record) => record_to_json(record),
    }
  }
}

impl From<serde_json::Value> for Value {
  fn from(value: serde_json::Value) -> Self {
    use serde_json::Value as Json;

    match value {
      Json::Null => Self::Null,
      Json::Bool(b) => Self::Bool(b),
      Json::Number(n) => {
        if let Some(i) = n.as_i64() {
          Self::Integer(i128::from(i))
        } else if let Some(u) = n.as_u64() {
          Self::Integer(i128::from(u))
        } else {
          n.as_f64()
            .map_or_else(|| Self::String(n.to_string()), Self::Float)
        }
      },
      Json::String(s) => Self::String(s),
      array @ Json::Array(_) => Self::String(array.to_string()),
      Json::Object(map) => {
        Self::Record(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
      },
    }
  }
}

macro_rules! impl_from_integer {
  ($($ty:ty),*) => {
    $(
      impl From<$ty> for Value {
        fn from(value: $ty) -> Self {
          Self::Integer(i128::from(value))
        }
      }
    )*
  };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<usize> for Value {
  fn from(value: usize) -> Self {
    i128::try_from(value)
      .map_or_else(|_| Self::String(value.to_string()), Self::Integer)
  }
}

impl From<f32> for Value {
  fn from(value: f32) -> Self {
    Self::Float(f64::from(value))
  }
}

impl From<f64> for Value {
  fn from(value: f64) -> Self {
    Self::Float(value)
  }
}

impl From<bool> for Value {
  fn from(value: bool) -> Self {
    Self::Bool(value)
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Self {
    Self::String(value.to_string())
  }
}

impl From<String> for Value {
  fn from(value: String) -> Self {
    Self::String(value)
  }
}

impl From<Record> for Value {
  fn from(value: Record) -> Self {
    Self::Record(value)
  }
}

impl From<Element> for Value {
  fn from(value: Element) -> Self {
    Self::Element(Box::new(value))
  }
}

impl From<MdText> for Value {
  fn from(value: MdText) -> Self {
    Self::Element(Box::new(Element::Text(value)))
  }
}

impl<T: Into<Self>> From<Option<T>> for Value {
  fn from(value: Option<T>) -> Self {
    value.map_or(Self::Null, Into::into)
  }
}
