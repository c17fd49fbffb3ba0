//! Turns a sort run into the two texts shown to the user.
//!
//! The visualizer shows two read-only outputs: the sorted values and the
//! step-by-step log. This module produces both from raw user input, folding
//! parse failures into the log area together with a usage example so that a
//! bad submission never becomes a server error.
//!
//! # Example
//!
//! ```
//! use bubble_trace::render::run_visualizer;
//! use bubble_trace::types::SortOrder;
//!
//! let rendered = run_visualizer("2, 1", SortOrder::Ascending, true);
//! assert_eq!(rendered.sorted_text, "1.0, 2.0");
//! assert!(rendered.steps_text.starts_with("Initial list: [2.0, 1.0]"));
//!
//! let rendered = run_visualizer("", SortOrder::Ascending, true);
//! assert_eq!(rendered.sorted_text, "");
//! assert!(rendered.steps_text.starts_with("Error: Input is empty."));
//! ```

mod visualizer;

pub use visualizer::{
    EXAMPLE_INPUT, HIDDEN_LOG_NOTICE, Rendered, format_error, format_outcome, run_visualizer,
};
