//! Small helpers shared by the element renderers.
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left untouched when building a URL fragment.
///
/// Everything outside `A-Z a-z 0-9 - _ . ~ /` is percent-encoded.
const FRAGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'_')
  .remove(b'.')
  .remove(b'~')
  .remove(b'/');

/// Generate an anchor for header text.
///
/// Lowercases the text, replaces spaces with hyphens and percent-encodes the
/// remaining unsafe bytes. The mapping is deterministic and does not
/// disambiguate repeated header texts.
///
/// # Examples
///
/// ```
/// use mdfy_core::utils::generate_anchor;
///
/// assert_eq!(generate_anchor("Second Section"), "second-section");
/// assert_eq!(generate_anchor("Section 2.1"), "section-2.1");
/// assert_eq!(generate_anchor("Q&A"), "q%26a");
/// ```
#[must_use]
pub fn generate_anchor(text: &str) -> String {
  let slug = text.to_lowercase().replace(' ', "-");
  utf8_percent_encode(&slug, FRAGMENT_ENCODE_SET).to_string()
}

/// Render a float in its natural form.
///
/// Uses the shortest representation that round-trips. Integral values keep
/// one decimal place (`3.0`). Decimal exponents below -4 or from 16 up
/// switch to exponent form with a signed, two-digit exponent (`1e-05`,
/// `1.5e+16`).
#[must_use]
pub fn natural_float(value: f64) -> String {
  if value.is_nan() {
    return "nan".to_string();
  }
  if value.is_infinite() {
    return if value > 0.0 { "inf" } else { "-inf" }.to_string();
  }

  let scientific = format!("{value:e}");
  let Some((mantissa, exponent)) = scientific.split_once('e') else {
    return scientific;
  };
  let exponent: i32 = exponent.parse().unwrap_or_default();

  if (-4..16).contains(&exponent) {
    if value.fract() == 0.0 {
      format!("{value:.1}")
    } else {
      format!("{value}")
    }
  } else {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_anchor_lowercases_and_hyphenates() {
    assert_eq!(generate_anchor("First Section"), "first-section");
    assert_eq!(generate_anchor("Another Subsection"), "another-subsection");
  }

  #[test]
  fn test_anchor_is_stable_for_duplicates() {
    assert_eq!(generate_anchor("Intro"), generate_anchor("Intro"));
  }

  #[test]
  fn test_anchor_encodes_non_ascii() {
    assert_eq!(generate_anchor("Café"), "caf%C3%A9");
    assert_eq!(generate_anchor("a/b"), "a/b");
  }

  #[test]
  fn test_natural_float() {
    assert_eq!(natural_float(3.0), "3.0");
    assert_eq!(natural_float(1.234_567_89), "1.23456789");
    assert_eq!(natural_float(-0.5), "-0.5");
    assert_eq!(natural_float(0.0001), "0.0001");
    assert_eq!(natural_float(1e15), "1000000000000000.0");
  }

  #[test]
  fn test_natural_float_exponent_form() {
    assert_eq!(natural_float(1e-5), "1e-05");
    assert_eq!(natural_float(1e16), "1e+16");
    assert_eq!(natural_float(-1.5e-7), "-1.5e-07");
    assert_eq!(natural_float(1.234e100), "1.234e+100");
    assert_eq!(natural_float(f64::NAN), "nan");
    assert_eq!(natural_float(f64::NEG_INFINITY), "-inf");
  }
}
