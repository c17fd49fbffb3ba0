//! Shared test utilities and arbitrary generators for property-based testing.

use crate::types::SortOrder;
use proptest::prelude::*;

pub fn arb_sort_order() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Ascending), Just(SortOrder::Descending)]
}

/// Finite values, mixing small integers (to force ties) with arbitrary floats.
pub fn arb_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-5i32..=5).prop_map(f64::from),
        -1e6f64..1e6,
    ]
}

pub fn arb_number_list() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(arb_value(), 0..24)
}

/// Comma-separated text for a list of values, as a user would type it.
pub fn arb_input_text() -> impl Strategy<Value = (Vec<f64>, String)> {
    prop::collection::vec(arb_value(), 1..16).prop_map(|values| {
        let text = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        (values, text)
    })
}
