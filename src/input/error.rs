//! The single error kind raised while reading user input.

use thiserror::Error;

/// The input text could not be turned into a list of numbers.
///
/// The `Display` output is written for end users and is shown verbatim in the
/// form's log area.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The input was empty or contained only whitespace.
    #[error("Input is empty. Please enter at least one number.")]
    Empty,

    /// A non-empty segment is not a number.
    #[error("'{token}' is not a valid number.")]
    NotANumber { token: String },

    /// Every segment was empty, e.g. `", ,"`.
    #[error("No valid numbers found. Please check your input.")]
    NoNumbers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            InvalidInput::Empty.to_string(),
            "Input is empty. Please enter at least one number."
        );
        assert_eq!(
            InvalidInput::NotANumber {
                token: "abc".to_string()
            }
            .to_string(),
            "'abc' is not a valid number."
        );
        assert_eq!(
            InvalidInput::NoNumbers.to_string(),
            "No valid numbers found. Please check your input."
        );
    }
}
