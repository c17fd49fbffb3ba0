//! Parse, sort and format in one call.

use std::fmt;

use tracing::{debug, info};

use crate::engine::{SortOutcome, bubble_sort};
use crate::input::parse_numbers;
use crate::types::SortOrder;

/// Sample input echoed back alongside every input error.
pub const EXAMPLE_INPUT: &str = "3, 1, 4, 1, 5";

/// Shown in place of the log when the user turned tracing off.
pub const HIDDEN_LOG_NOTICE: &str = "Step-by-step log is hidden.\n\
     Check the 'Show step-by-step' box and run again to see the details.";

/// The display texts for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    /// Sorted values joined by `", "`. Empty on error.
    pub sorted_text: String,

    /// The step log, one step per line, or the hidden-log notice, or the error.
    pub steps_text: String,
}

/// Runs the full pipeline for one form submission.
///
/// Parse failures are returned as display text rather than as an error.
pub fn run_visualizer(raw: &str, order: SortOrder, show_steps: bool) -> Rendered {
    let numbers = match parse_numbers(raw) {
        Ok(numbers) => numbers,
        Err(err) => {
            info!(error = %err, "Rejected input");
            return format_error(err);
        }
    };

    debug!(count = numbers.len(), order = %order, show_steps, "Sorting submission");
    let outcome = bubble_sort(&numbers, order, show_steps);
    format_outcome(&outcome, show_steps)
}

/// Formats a successful run.
pub fn format_outcome(outcome: &SortOutcome, show_steps: bool) -> Rendered {
    let steps_text = if show_steps {
        outcome.steps.to_text()
    } else {
        HIDDEN_LOG_NOTICE.to_string()
    };

    Rendered {
        sorted_text: outcome.sorted.joined(),
        steps_text,
    }
}

/// Formats a rejected submission together with a usage example.
pub fn format_error(err: impl fmt::Display) -> Rendered {
    Rendered {
        sorted_text: String::new(),
        steps_text: format!("Error: {err}\nExample input: {EXAMPLE_INPUT}"),
    }
}
