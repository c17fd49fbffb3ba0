//! Parser for comma-delimited number lists.
//!
//! This is a pure function over the raw text; it performs no I/O and keeps no
//! state between calls.

use crate::types::NumberList;

use super::error::InvalidInput;

/// The separator between values.
pub const DELIMITER: char = ',';

/// Parses comma-separated text into a list of numbers.
///
/// # Parsing Rules
///
/// - The text is split on `,` and each segment is trimmed
/// - Empty segments are skipped (`"1,,2"` is `[1.0, 2.0]`)
/// - Each remaining segment must parse as an `f64`; this accepts decimals,
///   exponents (`1e3`), a leading sign, `inf` and `nan`
/// - Input order and duplicates are preserved
///
/// # Errors
///
/// - [`InvalidInput::Empty`] if the text is empty or only whitespace
/// - [`InvalidInput::NotANumber`] for the first segment that is not a number
/// - [`InvalidInput::NoNumbers`] if no segment survives filtering
///
/// # Examples
///
/// ```
/// use bubble_trace::input::{parse_numbers, InvalidInput};
///
/// assert_eq!(parse_numbers(" 4.5 ,-2, 1e2").unwrap().as_slice(), &[4.5, -2.0, 100.0]);
/// assert_eq!(parse_numbers("   "), Err(InvalidInput::Empty));
/// assert_eq!(parse_numbers(" , ,"), Err(InvalidInput::NoNumbers));
/// ```
pub fn parse_numbers(text: &str) -> Result<NumberList, InvalidInput> {
    if text.trim().is_empty() {
        return Err(InvalidInput::Empty);
    }

    let numbers = text
        .split(DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_value)
        .collect::<Result<Vec<_>, _>>()?;

    if numbers.is_empty() {
        return Err(InvalidInput::NoNumbers);
    }

    Ok(NumberList::new(numbers))
}

/// Parses one trimmed, non-empty segment.
fn parse_value(token: &str) -> Result<f64, InvalidInput> {
    token.parse::<f64>().map_err(|_| InvalidInput::NotANumber {
        token: token.to_string(),
    })
}
