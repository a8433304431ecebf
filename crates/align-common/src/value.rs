//! Polars `AnyValue` text rendering and strict scalar parsing.

use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` to its text form.
///
/// Returns an empty string for `Null` and formats floats without trailing
/// zeros, so a whole-number float renders like the integer a spreadsheet shows.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use align_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::Float64(2.0)), "2");
/// assert_eq!(any_to_string(AnyValue::String("Name")), "Name");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        other => {
            let rendered = other.to_string();
            // Display quotes some scalar kinds
            match rendered
                .strip_prefix('"')
                .and_then(|inner| inner.strip_suffix('"'))
            {
                Some(inner) => inner.to_string(),
                None => rendered,
            }
        }
    }
}

/// Renders a float the way a spreadsheet cell shows it.
///
/// Whole numbers carry no fractional part, so 40.0 renders as "40". Negative
/// zero renders as "0".
///
/// ```
/// use align_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(40.0), "40");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    // f64 Display is the shortest round-trip form and never pads zeros
    v.to_string()
}

/// Parses trimmed text as `f64`. Empty or malformed text gives `None`.
pub fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Parses trimmed text as `i64`. Empty or malformed text gives `None`.
///
/// Accepts integral float text such as "3.0", which is how a whole number
/// read from a float-typed cell comes back. Floats outside the `i64` range
/// are rejected rather than saturated.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(v);
    }
    let float = trimmed.parse::<f64>().ok()?;
    // 2^63
    let bound = 9_223_372_036_854_775_808.0;
    (float.fract() == 0.0 && float.abs() < bound).then_some(float as i64)
}

/// Parses a boolean literal (`true`/`false`, any ASCII case).
pub fn parse_bool(value: &str) -> Option<bool> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
