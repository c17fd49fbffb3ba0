//! Bubble sort with early exit and an optional step trace.

use serde::Serialize;
use tracing::debug;

use crate::types::{NumberList, SortOrder};

use super::step::{SortStep, StepLog};

/// Counters describing the work done by one sort.
///
/// These are gathered whether or not tracing is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    /// Passes started (and completed) over the list.
    pub passes: usize,

    /// Adjacent-pair comparisons performed.
    pub comparisons: usize,

    /// Comparisons that swapped their pair.
    pub swaps: usize,

    /// Whether a pass without swaps ended the sort before all `n` passes ran.
    pub stopped_early: bool,
}

/// The result of one call to [`bubble_sort`].
#[derive(Debug, Clone, PartialEq)]
pub struct SortOutcome {
    /// The values in sorted order.
    pub sorted: NumberList,

    /// The step-by-step trace. Empty when tracing was disabled.
    pub steps: StepLog,

    pub stats: SortStats,
}

/// Sorts `numbers` with bubble sort, optionally tracing every step.
///
/// The input is copied; the caller's slice is left untouched.
///
/// # Algorithm
///
/// For pass `i` in `0..n`, adjacent pairs `j, j + 1` with `j < n - i - 1` are
/// compared using [`SortOrder::should_swap`] and swapped when out of order.
/// After each pass the largest (or smallest, for descending) remaining value
/// has bubbled into its final slot. A pass with no swaps means the list is
/// sorted and the loop stops early.
///
/// # Trace
///
/// With `trace` set, the log contains in order:
/// 1. `Initial` with the input list
/// 2. for each pass, one `Compare` per comparison, then `PassComplete`
///    (followed by `EarlyExit` if the pass made no swaps)
/// 3. `Final` with the sorted list
///
/// With `trace` unset no steps are built and the log is empty.
///
/// # Examples
///
/// ```
/// use bubble_trace::engine::bubble_sort;
/// use bubble_trace::types::SortOrder;
///
/// let outcome = bubble_sort(&[3.0, 1.0, 4.0, 1.0, 5.0], SortOrder::Descending, false);
/// assert_eq!(outcome.sorted.as_slice(), &[5.0, 4.0, 3.0, 1.0, 1.0]);
/// assert!(outcome.steps.is_empty());
/// ```
pub fn bubble_sort(numbers: &[f64], order: SortOrder, trace: bool) -> SortOutcome {
    let mut values = numbers.to_vec();
    let n = values.len();
    let mut log = trace.then(StepLog::new);
    let mut stats = SortStats::default();

    record(&mut log, || SortStep::Initial {
        list: values.clone(),
    });

    for i in 0..n {
        let pass = i + 1;
        let mut swapped_in_pass = false;
        stats.passes += 1;

        for j in 0..n - i - 1 {
            stats.comparisons += 1;
            let (left, right) = (values[j], values[j + 1]);

            let swapped = if order.should_swap(left, right) {
                values.swap(j, j + 1);
                swapped_in_pass = true;
                stats.swaps += 1;
                Some((left, right))
            } else {
                None
            };

            record(&mut log, || SortStep::Compare {
                pass,
                left: j,
                swapped,
            });
        }

        record(&mut log, || SortStep::PassComplete {
            pass,
            list: values.clone(),
        });

        if !swapped_in_pass {
            record(&mut log, || SortStep::EarlyExit { pass });
            stats.stopped_early = pass < n;
            break;
        }
    }

    record(&mut log, || SortStep::Final {
        list: values.clone(),
    });

    debug!(
        len = n,
        order = %order,
        passes = stats.passes,
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        stopped_early = stats.stopped_early,
        "Bubble sort finished"
    );

    SortOutcome {
        sorted: NumberList::new(values),
        steps: log.unwrap_or_default(),
        stats,
    }
}

/// Appends a step when tracing is on. The step is only built if it is kept.
fn record(log: &mut Option<StepLog>, step: impl FnOnce() -> SortStep) {
    if let Some(log) = log {
        log.push(step());
    }
}
