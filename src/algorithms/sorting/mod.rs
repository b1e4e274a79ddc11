//! Sorting generators
//!
//! Every sorting trace starts with an initial-state step and ends with a step
//! whose `sorted` set covers the whole array.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;

pub use bubble::BubbleSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use radix::RadixSort;
pub use selection::SelectionSort;
pub use shell::ShellSort;

use super::format_values;
use crate::snapshot::{Step, StepSequence};

/// Start a trace with the untouched input
pub(crate) fn begin(arr: &[i64], name: &str) -> StepSequence {
    let mut steps = StepSequence::new();
    steps.push(Step::new(
        arr,
        format!("Initial array {} ({})", format_values(arr), name),
        "// initial state",
    ));
    steps
}

/// Close a trace by marking every index sorted
pub(crate) fn finish(steps: &mut StepSequence, arr: &[i64], name: &str) {
    let description = if arr.is_empty() {
        format!("{} finished: nothing to sort", name)
    } else {
        format!("{} finished: {}", name, format_values(arr))
    };
    steps.push(Step::new(arr, description, "return arr;").sorted(0..arr.len()));
}
