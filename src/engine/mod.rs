//! The bubble sort engine.
//!
//! The engine sorts a list of numbers and, on request, records a trace of
//! every comparison, swap and pass so that the run can be replayed for a
//! student.
//!
//! # Key Invariants
//!
//! 1. **Input untouched**: the engine sorts a private copy of its input.
//!
//! 2. **Trace fidelity**: a non-empty trace starts with `Initial`, ends with
//!    `Final`, and contains exactly one `Compare` per comparison performed, in
//!    execution order.
//!
//! 3. **Stability**: comparisons are strict, so equal values never swap.
//!
//! The engine cannot fail. Malformed input is rejected earlier by
//! [`crate::input::parse_numbers`].

pub mod sort;
pub mod step;

pub use sort::{SortOutcome, SortStats, bubble_sort};
pub use step::{SortStep, StepLog};
