// Quick sort with Lomuto partitioning around the last element

use super::{begin, finish};
use crate::algorithms::{AlgorithmDescriptor, AlgorithmKey, StepGenerator};
use crate::snapshot::{Step, StepSequence};

pub const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    key: AlgorithmKey::Quick,
    name: "Quick Sort",
    description: "Picks the last element as pivot, partitions smaller-or-equal values to \
                  its left, then recursively sorts both sides.",
    time_complexity: "O(n log n)",
    space_complexity: "O(log n)",
    best_case: "O(n log n)",
    worst_case: "O(n²)",
    source: SOURCE,
};

const SOURCE: &str = r#"fn quick_sort(arr: &mut [i64], low: isize, high: isize) {
    if low < high {
        let p = partition(arr, low as usize, high as usize);
        quick_sort(arr, low, p as isize - 1);
        quick_sort(arr, p as isize + 1, high);
    }
}

fn partition(arr: &mut [i64], low: usize, high: usize) -> usize {
    let pivot = arr[high];
    let mut i = low;
    for j in low..high {
        if arr[j] <= pivot {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, high);
    i
}"#;

pub struct QuickSort;

impl StepGenerator for QuickSort {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn generate(&self, array: &[i64], _target: Option<i64>) -> StepSequence {
        let mut arr = array.to_vec();
        let mut steps = begin(&arr, DESCRIPTOR.name);

        if !arr.is_empty() {
            let high = arr.len() - 1;
            sort_range(&mut arr, 0, high, &mut steps);
        }

        finish(&mut steps, &arr, DESCRIPTOR.name);
        steps
    }
}

fn sort_range(arr: &mut [i64], low: usize, high: usize, steps: &mut StepSequence) {
    if low >= high {
        return;
    }

    let p = partition(arr, low, high, steps);
    if p > low {
        sort_range(arr, low, p - 1, steps);
    }
    sort_range(arr, p + 1, high, steps);
}

/// Lomuto partition of `arr[low..=high]`; returns the pivot's final index
fn partition(arr: &mut [i64], low: usize, high: usize, steps: &mut StepSequence) -> usize {
    steps.push(
        Step::new(
            arr,
            format!("Partition arr[{}..={}]", low, high),
            format!("partition(arr, {}, {})", low, high),
        )
        .range(low, high),
    );

    let pivot = arr[high];
    steps.push(
        Step::new(
            arr,
            format!("Pivot is the last element: {} at index {}", pivot, high),
            "let pivot = arr[high];",
        )
        .pivot(high)
        .range(low, high),
    );

    // `boundary` is one past the last element known to be <= pivot.
    let mut boundary = low;
    for j in low..high {
        steps.push(
            Step::new(
                arr,
                format!("Compare arr[{}] = {} with pivot {}", j, arr[j], pivot),
                "if arr[j] <= pivot",
            )
            .comparing(&[j, high])
            .pivot(high)
            .range(low, high),
        );

        if arr[j] <= pivot {
            let i = boundary;
            boundary += 1;
            if i != j {
                arr.swap(i, j);
                steps.push(
                    Step::new(
                        arr,
                        format!("{} <= {}: swap arr[{}] and arr[{}]", arr[i], pivot, i, j),
                        "i += 1; arr.swap(i, j);",
                    )
                    .swapping(&[i, j])
                    .pivot(high)
                    .range(low, high),
                );
            } else {
                steps.push(
                    Step::new(
                        arr,
                        format!(
                            "{} <= {} and already in place at index {}: no swap",
                            arr[j], pivot, j
                        ),
                        "i += 1;",
                    )
                    .pivot(high)
                    .range(low, high),
                );
            }
        }
    }

    arr.swap(boundary, high);
    let moved = if boundary == high { vec![high] } else { vec![boundary, high] };
    steps.push(
        Step::new(
            arr,
            format!("Move pivot {} into its final position {}", pivot, boundary),
            "arr.swap(i + 1, high);",
        )
        .swapping(&moved)
        .pivot(boundary)
        .range(low, high),
    );

    boundary
}
