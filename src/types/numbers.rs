//! The ordered list of values that flows from the parser through the engine.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::ops::Deref;

/// An ordered sequence of floating-point values.
///
/// Order is preserved from the input and duplicates are allowed. The engine
/// sorts a private copy, so a `NumberList` handed to it is never modified.
///
/// Serializes as a sequence of numbers. `inf`, `-inf` and `nan` have no JSON
/// number form, so they serialize as the strings shown in the step log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberList(pub Vec<f64>);

impl NumberList {
    pub fn new(values: Vec<f64>) -> Self {
        NumberList(values)
    }

    /// Returns the values as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Joins the values with `", "` without surrounding brackets.
    ///
    /// This is the form shown in the "Sorted Result" output.
    pub fn joined(&self) -> String {
        join_numbers(&self.0)
    }
}

impl Deref for NumberList {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for NumberList {
    fn from(values: Vec<f64>) -> Self {
        NumberList(values)
    }
}

impl Serialize for NumberList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for &value in &self.0 {
            if value.is_finite() {
                seq.serialize_element(&value)?;
            } else {
                seq.serialize_element(&format_number(value))?;
            }
        }
        seq.end()
    }
}

impl fmt::Display for NumberList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", join_numbers(&self.0))
    }
}

/// Decimal exponents outside this range switch to scientific notation.
const POSITIONAL_EXPONENTS: std::ops::Range<i32> = -4..16;

/// Formats a single value for display.
///
/// Values print with the shortest digits that round-trip. Integral values
/// keep a trailing `.0` so `3` reads as `3.0`. Values below `1e-4` or at and
/// above `1e16` in magnitude use scientific notation with a signed, two-digit
/// exponent: `1e-07`, `1.5e+16`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        return format!("{sign}inf");
    }

    let scientific = format!("{value:e}");
    if let Some((mantissa, exponent)) = scientific.split_once('e')
        && let Ok(exponent) = exponent.parse::<i32>()
        && !POSITIONAL_EXPONENTS.contains(&exponent)
    {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    let positional = format!("{value}");
    if positional.contains('.') {
        positional
    } else {
        format!("{positional}.0")
    }
}

/// Formats a slice snapshot, e.g. `[1.0, 2.5]`.
pub(crate) fn format_list(values: &[f64]) -> String {
    format!("[{}]", join_numbers(values))
}

fn join_numbers(values: &[f64]) -> String {
    values
        .iter()
        .map(|&v| format_number(v))
        .collect::<Vec<_>>()
        .join(", ")
}
