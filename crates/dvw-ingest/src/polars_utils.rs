//! Polars AnyValue utility functions.

use polars::prelude::AnyValue;

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null, properly formats numeric types.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Converts AnyValue to a trimmed String, returning None for null, empty or "NA".
pub fn any_to_string_non_empty(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == "NA" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Converts an AnyValue to i64, returning None for non-integer or null values.
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::Float32(v) => float_to_i64(f64::from(v)),
        AnyValue::Float64(v) => float_to_i64(v),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(&s),
        _ => None,
    }
}

/// Converts an AnyValue to a boolean flag, accepting the usual spellings.
pub fn any_to_bool(value: AnyValue<'_>) -> Option<bool> {
    match value {
        AnyValue::Null => None,
        AnyValue::Boolean(b) => Some(b),
        other => parse_bool(&any_to_string(other)),
    }
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().and_then(float_to_i64))
}

/// Parses a boolean flag ("TRUE", "y", "1", ...).
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "t" | "y" | "yes" | "1" => Some(true),
        "false" | "f" | "n" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn float_to_i64(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 {
        Some(v as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string_formats_floats() {
        assert_eq!(any_to_string(AnyValue::Float64(3.0)), "3");
        assert_eq!(any_to_string(AnyValue::Float64(2.5)), "2.5");
        assert_eq!(any_to_string(AnyValue::Int64(10)), "10");
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_i64_accepts_whole_floats_only() {
        assert_eq!(any_to_i64(AnyValue::Float64(7.0)), Some(7));
        assert_eq!(any_to_i64(AnyValue::Float64(7.5)), None);
        assert_eq!(any_to_i64(AnyValue::String("12")), Some(12));
        assert_eq!(any_to_i64(AnyValue::String("NA")), None);
    }

    #[test]
    fn test_bool_spellings() {
        assert_eq!(any_to_bool(AnyValue::String("TRUE")), Some(true));
        assert_eq!(any_to_bool(AnyValue::Boolean(false)), Some(false));
        assert_eq!(any_to_bool(AnyValue::String("maybe")), None);
        assert_eq!(any_to_string_non_empty(AnyValue::String(" NA ")), None);
    }
}
