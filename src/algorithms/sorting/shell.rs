// Shell sort with the halving gap sequence

use super::{begin, finish};
use crate::algorithms::{AlgorithmDescriptor, AlgorithmKey, StepGenerator};
use crate::snapshot::{Step, StepSequence};

pub const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    key: AlgorithmKey::Shell,
    name: "Shell Sort",
    description: "Runs insertion sort over elements a gap apart, halving the gap each \
                  round until a final plain insertion sort with gap 1.",
    time_complexity: "O(n^1.5)",
    space_complexity: "O(1)",
    best_case: "O(n log n)",
    worst_case: "O(n²)",
    source: SOURCE,
};

const SOURCE: &str = r#"fn shell_sort(arr: &mut [i64]) {
    let n = arr.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && arr[j - gap] > arr[j] {
                arr.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}"#;

pub struct ShellSort;

impl StepGenerator for ShellSort {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn generate(&self, array: &[i64], _target: Option<i64>) -> StepSequence {
        let mut arr = array.to_vec();
        let mut steps = begin(&arr, DESCRIPTOR.name);
        let n = arr.len();

        let mut gap = n / 2;
        while gap > 0 {
            steps.push(Step::new(
                &arr,
                format!("Gap is now {}: insertion sort elements {} apart", gap, gap),
                format!("gap = {};", gap),
            ));

            for i in gap..n {
                let key = arr[i];
                steps.push(
                    Step::new(
                        &arr,
                        format!("Insert key {} from index {} into its gap-{} chain", key, i, gap),
                        format!("let key = arr[{}];", i),
                    )
                    .comparing(&[i]),
                );

                let mut j = i;
                while j >= gap && arr[j - gap] > key {
                    let left = j - gap;
                    steps.push(
                        Step::new(
                            &arr,
                            format!("arr[{}] = {} is greater than key {}", left, arr[left], key),
                            "while j >= gap && arr[j - gap] > key",
                        )
                        .comparing(&[left, j]),
                    );

                    arr.swap(left, j);
                    steps.push(
                        Step::new(
                            &arr,
                            format!("Shift {} from index {} to index {}", arr[j], left, j),
                            "arr[j] = arr[j - gap]; j -= gap;",
                        )
                        .swapping(&[left, j]),
                    );
                    j = left;
                }
            }

            gap /= 2;
        }

        finish(&mut steps, &arr, DESCRIPTOR.name);
        steps
    }
}
