// Bubble sort with early exit on a swap-free pass

use super::{begin, finish};
use crate::algorithms::{AlgorithmDescriptor, AlgorithmKey, StepGenerator};
use crate::snapshot::{Step, StepSequence};

pub const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    key: AlgorithmKey::Bubble,
    name: "Bubble Sort",
    description: "Repeatedly walks the array, swapping adjacent elements that are out of \
                  order. Stops as soon as a full pass makes no swaps.",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    best_case: "O(n)",
    worst_case: "O(n²)",
    source: SOURCE,
};

const SOURCE: &str = r#"fn bubble_sort(arr: &mut [i64]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}"#;

pub struct BubbleSort;

impl StepGenerator for BubbleSort {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn generate(&self, array: &[i64], _target: Option<i64>) -> StepSequence {
        let mut arr = array.to_vec();
        let mut steps = begin(&arr, DESCRIPTOR.name);
        let n = arr.len();

        for i in 0..n.saturating_sub(1) {
            steps.push(Step::new(
                &arr,
                format!(
                    "Pass {}: bubbling the largest remaining value to index {}",
                    i + 1,
                    n - i - 1
                ),
                format!("for i = {}", i),
            ));

            let mut swapped = false;
            for j in 0..n - i - 1 {
                steps.push(
                    Step::new(
                        &arr,
                        format!(
                            "Compare arr[{}] = {} with arr[{}] = {}",
                            j,
                            arr[j],
                            j + 1,
                            arr[j + 1]
                        ),
                        "if arr[j] > arr[j + 1]",
                    )
                    .comparing(&[j, j + 1]),
                );

                if arr[j] > arr[j + 1] {
                    arr.swap(j, j + 1);
                    swapped = true;
                    steps.push(
                        Step::new(
                            &arr,
                            format!("Swap: {} moves left, {} moves right", arr[j], arr[j + 1]),
                            "arr.swap(j, j + 1);",
                        )
                        .swapping(&[j, j + 1]),
                    );
                }
            }

            if !swapped {
                steps.push(Step::new(
                    &arr,
                    format!("No swaps in pass {}: the array is already sorted", i + 1),
                    "if !swapped { break; }",
                ));
                break;
            }
        }

        finish(&mut steps, &arr, DESCRIPTOR.name);
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_stops_after_first_pass() {
        let steps = BubbleSort.generate(&[1, 2, 3, 4], None);
        // initial, pass start, 3 compares, early exit, final
        assert_eq!(steps.len(), 7);
        assert!(steps.iter().all(|s| s.swapping.is_empty()));
        assert!(steps.get(5).unwrap().description.contains("No swaps"));
    }

    #[test]
    fn each_swap_follows_its_comparison() {
        let steps = BubbleSort.generate(&[2, 1], None);
        let compare = steps.get(2).unwrap();
        let swap = steps.get(3).unwrap();
        assert_eq!(compare.comparing, vec![0, 1]);
        assert_eq!(compare.array, vec![2, 1]);
        assert_eq!(swap.swapping, vec![0, 1]);
        assert_eq!(swap.array, vec![1, 2]);
    }
}
