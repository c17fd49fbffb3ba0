//! Trace events recorded while sorting.
//!
//! Each [`SortStep`] renders to exactly one line of the step-by-step log. The
//! structured form is kept so callers (and tests) can inspect the trace
//! without re-parsing text.

use std::fmt;

use crate::types::format_number;
use crate::types::numbers::format_list;

/// One event in the step-by-step log.
///
/// Pass numbers are 1-based, element indices are 0-based.
#[derive(Debug, Clone, PartialEq)]
pub enum SortStep {
    /// The list before any pass.
    Initial { list: Vec<f64> },

    /// A comparison of the elements at `left` and `left + 1`.
    ///
    /// `swapped` holds the two values as they were before the swap, or `None`
    /// if the pair was already in order.
    Compare {
        pass: usize,
        left: usize,
        swapped: Option<(f64, f64)>,
    },

    /// Snapshot of the list once a pass has finished.
    PassComplete { pass: usize, list: Vec<f64> },

    /// The pass made no swaps, so sorting stops here.
    EarlyExit { pass: usize },

    /// The fully sorted list.
    Final { list: Vec<f64> },
}

impl SortStep {
    /// Returns true for comparison events.
    pub fn is_compare(&self) -> bool {
        matches!(self, SortStep::Compare { .. })
    }

    /// Returns true for comparisons that swapped their pair.
    pub fn is_swap(&self) -> bool {
        matches!(
            self,
            SortStep::Compare {
                swapped: Some(_),
                ..
            }
        )
    }
}

impl fmt::Display for SortStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortStep::Initial { list } => write!(f, "Initial list: {}", format_list(list)),
            SortStep::Compare {
                pass,
                left,
                swapped: Some((a, b)),
            } => write!(
                f,
                "Pass {pass}, compare index {left} and {}: swap {} and {}",
                left + 1,
                format_number(*a),
                format_number(*b)
            ),
            SortStep::Compare {
                pass,
                left,
                swapped: None,
            } => write!(
                f,
                "Pass {pass}, compare index {left} and {}: no swap",
                left + 1
            ),
            SortStep::PassComplete { pass, list } => {
                write!(f, "After pass {pass}: {}", format_list(list))
            }
            SortStep::EarlyExit { pass } => write!(
                f,
                "No swap in pass {pass}, the list is already sorted. Stopping early."
            ),
            SortStep::Final { list } => write!(f, "Final sorted list: {}", format_list(list)),
        }
    }
}

/// Append-only record of the events of one sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepLog(Vec<SortStep>);

impl StepLog {
    pub fn new() -> Self {
        StepLog(Vec::new())
    }

    pub(crate) fn push(&mut self, step: SortStep) {
        self.0.push(step);
    }

    pub fn steps(&self) -> &[SortStep] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders every step to its display line.
    pub fn lines(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Renders the log as one block of text, one step per line.
    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }
}

impl<'a> IntoIterator for &'a StepLog {
    type Item = &'a SortStep;
    type IntoIter = std::slice::Iter<'a, SortStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
