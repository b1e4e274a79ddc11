//! Searching generators
//!
//! Every search trace contains exactly one step with `complete` set, and it is
//! always the last step. When that step reports `found`, `array[found_index]`
//! equals the target.

pub mod binary;
pub mod linear;

pub use binary::BinarySearch;
pub use linear::LinearSearch;

use super::format_values;
use crate::snapshot::{SearchState, Step, StepSequence};

pub(crate) fn begin(arr: &[i64], target: Option<i64>, name: &str) -> StepSequence {
    let mut steps = StepSequence::new();
    let description = match target {
        Some(t) => format!("{}: looking for {} in {}", name, t, format_values(arr)),
        None => format!("{}: {} with no target", name, format_values(arr)),
    };
    steps.push(
        Step::new(arr, description, "// initial state").search(SearchState::default()),
    );
    steps
}

pub(crate) fn found(steps: &mut StepSequence, arr: &[i64], index: usize, mut state: SearchState) {
    state.current_index = Some(index);
    state.found = true;
    state.found_index = Some(index);
    state.complete = true;
    steps.push(
        Step::new(
            arr,
            format!("Found {} at index {}", arr[index], index),
            format!("return Some({});", index),
        )
        .search(state),
    );
}

pub(crate) fn not_found(
    steps: &mut StepSequence,
    arr: &[i64],
    target: Option<i64>,
    mut state: SearchState,
) {
    state.found = false;
    state.found_index = None;
    state.complete = true;
    let description = match target {
        Some(t) => format!("{} is not in the array", t),
        None => "No target was supplied: nothing to search for".to_string(),
    };
    steps.push(Step::new(arr, description, "return None;").search(state));
}
