//! Parsing of user-entered number lists.
//!
//! Users type a comma-separated list such as `3, 1, 4.5`. Whitespace around
//! each value is ignored, as are empty segments left by stray commas.
//!
//! # Example
//!
//! ```
//! use bubble_trace::input::{parse_numbers, InvalidInput};
//!
//! let numbers = parse_numbers("3, 1, 4, 1, 5").unwrap();
//! assert_eq!(numbers.as_slice(), &[3.0, 1.0, 4.0, 1.0, 5.0]);
//!
//! // Trailing commas are tolerated
//! assert_eq!(parse_numbers("2,7,").unwrap().as_slice(), &[2.0, 7.0]);
//!
//! assert_eq!(
//!     parse_numbers("3, abc, 5"),
//!     Err(InvalidInput::NotANumber { token: "abc".to_string() })
//! );
//! ```

mod error;
mod parser;

pub use error::InvalidInput;
pub use parser::{DELIMITER, parse_numbers};
