//! Field resolution and flattening
//!
//! A resolved field is one of a closed set of shapes; flattening is a case
//! split over that set rather than runtime type probing of the JSON value.

use crate::constants::{
    CACHE_KEY_NULL_TOKEN, CACHE_KEY_PATH_SEPARATOR, CACHE_KEY_SEGMENT_SEPARATOR,
    CACHE_KEY_UNDEFINED_TOKEN,
};
use serde_json::{Map, Number, Value};

/// A value reached by a selector path, or the lack of one
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// The path did not resolve
    Missing,
    /// Explicit null
    Null,
    /// Boolean, number or string
    Scalar(&'a Value),
    /// Nested mapping, flattened as `key|value` pairs
    Mapping(&'a Map<String, Value>),
    /// Sequence, flattened element by element
    Sequence(&'a [Value]),
}

impl<'a> FieldValue<'a> {
    /// Classify a JSON value
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Object(map) => Self::Mapping(map),
            Value::Array(items) => Self::Sequence(items),
            scalar => Self::Scalar(scalar),
        }
    }

    /// Walk a dot-path from `root`
    ///
    /// Mapping segments are looked up by key, sequence segments by decimal
    /// index. Stepping into anything else, or a missing segment, yields
    /// [`FieldValue::Missing`].
    pub fn resolve(root: Option<&'a Value>, path: &str) -> Self {
        let Some(mut current) = root else {
            return Self::Missing;
        };

        for segment in path.split(CACHE_KEY_PATH_SEPARATOR) {
            let next = match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index)),
                _ => None,
            };
            match next {
                Some(value) => current = value,
                None => return Self::Missing,
            }
        }

        Self::of(current)
    }

    /// Flatten into a new string
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        self.write_flattened(&mut out);
        out
    }

    /// Append the flattened form to `out`
    pub fn write_flattened(&self, out: &mut String) {
        match self {
            Self::Missing => out.push_str(CACHE_KEY_UNDEFINED_TOKEN),
            Self::Null => out.push_str(CACHE_KEY_NULL_TOKEN),
            Self::Scalar(value) => write_scalar(value, out),
            Self::Mapping(map) => {
                for (index, (key, value)) in map.iter().enumerate() {
                    if index > 0 {
                        out.push_str(CACHE_KEY_SEGMENT_SEPARATOR);
                    }
                    out.push_str(key);
                    out.push_str(CACHE_KEY_SEGMENT_SEPARATOR);
                    FieldValue::of(value).write_flattened(out);
                }
            }
            Self::Sequence(items) => {
                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        out.push_str(CACHE_KEY_SEGMENT_SEPARATOR);
                    }
                    FieldValue::of(value).write_flattened(out);
                }
            }
        }
    }
}

fn write_scalar(value: &Value, out: &mut String) {
    match value {
        Value::String(text) => out.push_str(text),
        Value::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
        Value::Number(number) => out.push_str(&render_number(number)),
        // Containers and null never reach here, see FieldValue::of
        other => FieldValue::of(other).write_flattened(out),
    }
}

/// Render a number the way it reads in a key
///
/// Integral floats drop `.0`, negative zero reads `0`, and magnitudes at or
/// above `1e21` or below `1e-6` use exponent form with an explicit sign
/// (`1e+21`, `1e-7`).
pub fn render_number(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(uint) = number.as_u64() {
        return uint.to_string();
    }
    match number.as_f64() {
        Some(float) if float == 0.0 => "0".to_string(),
        Some(float) if float.abs() >= 1e21 || float.abs() < 1e-6 => exponent_form(float),
        Some(float) if float.fract() == 0.0 => format!("{float:.0}"),
        Some(float) => float.to_string(),
        None => number.to_string(),
    }
}

fn exponent_form(float: f64) -> String {
    let rendered = format!("{float:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}
