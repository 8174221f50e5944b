//! Conversions between native scalars and their canonical text.
//!
//! Every candidate travels as text. Backing-file values are flattened to text
//! with [`scalar_to_text`]; resolvers turn text back into typed values with
//! [`parse_int`], [`parse_float`] and [`BoolVocabulary::parse`].

use toml::Value;

use crate::error::ChainfigError;

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Convert a parsed backing-file value to its canonical text.
///
/// Floats use the shortest representation that round-trips, never an
/// exponent (`3.14159`, `1e20` → `100000000000000000000`).
pub fn scalar_to_text(key: &str, value: &Value) -> Result<String, ChainfigError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        other => Err(ChainfigError::UnexpectedType {
            key: key.to_string(),
            type_name: other.type_str(),
        }),
    }
}

/// Parse text as a 64-bit integer.
///
/// Text containing a `.` is parsed as a float and truncated toward zero.
/// Anything else is read as an optionally signed integer with an optional
/// base prefix: `0x` hex, `0o` octal, `0b` binary, or a bare leading `0`
/// for octal. `_` separators are accepted after a base prefix only.
pub fn parse_int(text: &str) -> Result<i64, ChainfigError> {
    let invalid = |reason: String| ChainfigError::InvalidNumber {
        value: text.to_string(),
        reason,
    };

    if text.is_empty() {
        return Err(invalid("empty string".into()));
    }

    if text.contains('.') {
        let f: f64 = text
            .parse()
            .map_err(|e: std::num::ParseFloatError| invalid(e.to_string()))?;
        let truncated = f.trunc();
        // i64::MAX is not representable as f64; 2^63 is the first value out of range.
        if !truncated.is_finite() || !(-TWO_POW_63..TWO_POW_63).contains(&truncated) {
            return Err(invalid("value out of range".into()));
        }
        return Ok(truncated as i64);
    }

    parse_prefixed(text).map_err(invalid)
}

fn parse_prefixed(text: &str) -> Result<i64, String> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits, prefixed) = if let Some(rest) = strip_prefix_ci(body, "0x") {
        (16, rest, true)
    } else if let Some(rest) = strip_prefix_ci(body, "0o") {
        (8, rest, true)
    } else if let Some(rest) = strip_prefix_ci(body, "0b") {
        (2, rest, true)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..], true)
    } else {
        (10, body, false)
    };

    let digits = if prefixed {
        digits.replace('_', "")
    } else {
        digits.to_string()
    };

    // from_str_radix tolerates its own sign; a second one is malformed here.
    if !digits.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return Err("invalid syntax".into());
    }

    let magnitude = u64::from_str_radix(&digits, radix).map_err(|e| e.to_string())?;
    let value = if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };
    value.ok_or_else(|| "value out of range".to_string())
}

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

/// Parse text as a 64-bit float.
pub fn parse_float(text: &str) -> Result<f64, ChainfigError> {
    text.parse()
        .map_err(|e: std::num::ParseFloatError| ChainfigError::InvalidNumber {
            value: text.to_string(),
            reason: e.to_string(),
        })
}

/// The strings accepted as `true` and as `false`.
///
/// Matching trims surrounding whitespace and ignores case, including
/// non-ASCII letters. The true set is checked first, so a string listed in
/// both counts as `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolVocabulary {
    pub true_strings: Vec<String>,
    pub false_strings: Vec<String>,
}

impl Default for BoolVocabulary {
    fn default() -> Self {
        Self {
            true_strings: vec!["true".into()],
            false_strings: vec!["false".into()],
        }
    }
}

impl BoolVocabulary {
    /// Interpret `text` as a boolean. `None` means it matched neither set;
    /// the caller decides whether that is an error.
    pub fn parse(&self, text: &str) -> Option<bool> {
        let folded = text.trim().to_lowercase();
        let listed = |set: &[String]| set.iter().any(|s| s.to_lowercase() == folded);
        if listed(&self.true_strings) {
            return Some(true);
        }
        if listed(&self.false_strings) {
            return Some(false);
        }
        None
    }
}
