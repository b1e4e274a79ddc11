// Selection sort

use super::{begin, finish};
use crate::algorithms::{AlgorithmDescriptor, AlgorithmKey, StepGenerator};
use crate::snapshot::{Step, StepSequence};

pub const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    key: AlgorithmKey::Selection,
    name: "Selection Sort",
    description: "Finds the minimum of the unsorted suffix and swaps it to the front of \
                  that suffix, growing the sorted prefix by one each pass.",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    best_case: "O(n²)",
    worst_case: "O(n²)",
    source: SOURCE,
};

const SOURCE: &str = r#"fn selection_sort(arr: &mut [i64]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            arr.swap(i, min_idx);
        }
    }
}"#;

pub struct SelectionSort;

impl StepGenerator for SelectionSort {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn generate(&self, array: &[i64], _target: Option<i64>) -> StepSequence {
        let mut arr = array.to_vec();
        let mut steps = begin(&arr, DESCRIPTOR.name);
        let n = arr.len();

        for i in 0..n.saturating_sub(1) {
            let mut min_idx = i;
            steps.push(Step::new(
                &arr,
                format!("Pass {}: searching for the minimum of arr[{}..{}]", i + 1, i, n - 1),
                format!("let mut min_idx = {};", i),
            ));

            for j in i + 1..n {
                steps.push(
                    Step::new(
                        &arr,
                        format!(
                            "Compare current minimum arr[{}] = {} with arr[{}] = {}",
                            min_idx, arr[min_idx], j, arr[j]
                        ),
                        "if arr[j] < arr[min_idx]",
                    )
                    .comparing(&[min_idx, j]),
                );

                if arr[j] < arr[min_idx] {
                    min_idx = j;
                    steps.push(Step::new(
                        &arr,
                        format!("New minimum found: {} at index {}", arr[min_idx], min_idx),
                        format!("min_idx = {};", j),
                    ));
                }
            }

            if min_idx != i {
                arr.swap(i, min_idx);
                steps.push(
                    Step::new(
                        &arr,
                        format!("Swap minimum {} into position {}", arr[i], i),
                        "arr.swap(i, min_idx);",
                    )
                    .swapping(&[i, min_idx]),
                );
            }

            steps.push(
                Step::new(
                    &arr,
                    format!("Positions 0..={} now hold the {} smallest values", i, i + 1),
                    "// arr[0..=i] sorted",
                )
                .sorted(0..i + 1),
            );
        }

        finish(&mut steps, &arr, DESCRIPTOR.name);
        steps
    }
}
