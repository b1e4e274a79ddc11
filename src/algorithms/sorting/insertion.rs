// Insertion sort

use super::{begin, finish};
use crate::algorithms::{AlgorithmDescriptor, AlgorithmKey, StepGenerator};
use crate::snapshot::{Step, StepSequence};

pub const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    key: AlgorithmKey::Insertion,
    name: "Insertion Sort",
    description: "Takes each element in turn and shifts it left past every larger \
                  neighbour until it sits in order within the prefix.",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    best_case: "O(n)",
    worst_case: "O(n²)",
    source: SOURCE,
};

const SOURCE: &str = r#"fn insertion_sort(arr: &mut [i64]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}"#;

pub struct InsertionSort;

impl StepGenerator for InsertionSort {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn generate(&self, array: &[i64], _target: Option<i64>) -> StepSequence {
        let mut arr = array.to_vec();
        let mut steps = begin(&arr, DESCRIPTOR.name);

        for i in 1..arr.len() {
            let key = arr[i];
            steps.push(
                Step::new(
                    &arr,
                    format!("Insert key {} from index {} into the sorted prefix", key, i),
                    format!("let key = arr[{}];", i),
                )
                .comparing(&[i]),
            );

            // The key travels left one slot per shift, so it always sits at j + 1.
            let mut j = i;
            while j > 0 && arr[j - 1] > key {
                let left = j - 1;
                steps.push(
                    Step::new(
                        &arr,
                        format!("arr[{}] = {} is greater than key {}", left, arr[left], key),
                        "while j > 0 && arr[j - 1] > key",
                    )
                    .comparing(&[left, j]),
                );

                arr.swap(left, j);
                steps.push(
                    Step::new(
                        &arr,
                        format!("Shift {} right to index {}", arr[j], j),
                        "arr[j] = arr[j - 1]; j -= 1;",
                    )
                    .swapping(&[left, j]),
                );
                j = left;
            }

            steps.push(
                Step::new(
                    &arr,
                    format!("Key {} placed at index {}; arr[0..={}] is in order", key, j, i),
                    "arr[j] = key;",
                )
                .sorted(0..i + 1),
            );
        }

        finish(&mut steps, &arr, DESCRIPTOR.name);
        steps
    }
}
