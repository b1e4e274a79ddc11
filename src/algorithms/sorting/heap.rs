// Heap sort over an implicit max-heap

use super::{begin, finish};
use crate::algorithms::{AlgorithmDescriptor, AlgorithmKey, StepGenerator};
use crate::snapshot::{Step, StepSequence};
use std::ops::Range;

pub const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    key: AlgorithmKey::Heap,
    name: "Heap Sort",
    description: "Builds a max-heap in place, then repeatedly swaps the root (the largest \
                  value) to the end and restores the heap on the remaining prefix.",
    time_complexity: "O(n log n)",
    space_complexity: "O(1)",
    best_case: "O(n log n)",
    worst_case: "O(n log n)",
    source: SOURCE,
};

const SOURCE: &str = r#"fn heap_sort(arr: &mut [i64]) {
    let n = arr.len();
    for i in (0..n / 2).rev() {
        heapify(arr, n, i);
    }
    for i in (1..n).rev() {
        arr.swap(0, i);
        heapify(arr, i, 0);
    }
}

fn heapify(arr: &mut [i64], size: usize, root: usize) {
    let mut largest = root;
    let (l, r) = (2 * root + 1, 2 * root + 2);
    if l < size && arr[l] > arr[largest] {
        largest = l;
    }
    if r < size && arr[r] > arr[largest] {
        largest = r;
    }
    if largest != root {
        arr.swap(root, largest);
        heapify(arr, size, largest);
    }
}"#;

pub struct HeapSort;

impl StepGenerator for HeapSort {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn generate(&self, array: &[i64], _target: Option<i64>) -> StepSequence {
        let mut arr = array.to_vec();
        let mut steps = begin(&arr, DESCRIPTOR.name);
        let n = arr.len();

        if n > 1 {
            steps.push(Step::new(
                &arr,
                format!("Build a max-heap starting from the last non-leaf node {}", n / 2 - 1),
                "for i in (0..n / 2).rev() { heapify(arr, n, i); }",
            ));
        }
        for i in (0..n / 2).rev() {
            sift_down(&mut arr, n, i, n..n, &mut steps);
        }

        for i in (1..n).rev() {
            arr.swap(0, i);
            // Index i is final relative to the shrinking heap, so it is
            // marked sorted immediately along with the tail behind it.
            steps.push(
                Step::new(
                    &arr,
                    format!("Move max {} from the root to index {}", arr[i], i),
                    "arr.swap(0, i);",
                )
                .swapping(&[0, i])
                .sorted(i..n),
            );
            sift_down(&mut arr, i, 0, i..n, &mut steps);
        }

        finish(&mut steps, &arr, DESCRIPTOR.name);
        steps
    }
}

/// Restore the max-heap property for the subtree at `root` within `arr[..size]`
fn sift_down(
    arr: &mut [i64],
    size: usize,
    root: usize,
    tail: Range<usize>,
    steps: &mut StepSequence,
) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    for child in [left, right] {
        if child < size {
            steps.push(
                Step::new(
                    &*arr,
                    format!(
                        "Compare arr[{}] = {} with child arr[{}] = {}",
                        largest, arr[largest], child, arr[child]
                    ),
                    "if child < size && arr[child] > arr[largest]",
                )
                .comparing(&[largest, child])
                .sorted(tail.clone()),
            );
            if arr[child] > arr[largest] {
                largest = child;
            }
        }
    }

    if largest != root {
        arr.swap(root, largest);
        steps.push(
            Step::new(
                &*arr,
                format!("Swap parent index {} with larger child index {}", root, largest),
                "arr.swap(root, largest);",
            )
            .swapping(&[root, largest])
            .sorted(tail.clone()),
        );
        sift_down(arr, size, largest, tail, steps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_marks_trailing_positions() {
        let steps = HeapSort.generate(&[1, 3, 2], None);
        let extractions: Vec<_> = steps
            .iter()
            .filter(|s| s.description.starts_with("Move max"))
            .collect();
        assert_eq!(extractions.len(), 2);
        assert_eq!(extractions[0].swapping, vec![0, 2]);
        assert_eq!(extractions[0].sorted, vec![2]);
        assert_eq!(extractions[1].sorted, vec![1, 2]);
    }

    #[test]
    fn heap_is_built_before_extraction() {
        let steps = HeapSort.generate(&[1, 3, 2], None);
        let first_extract = steps
            .iter()
            .position(|s| s.description.starts_with("Move max"))
            .unwrap();
        assert_eq!(steps.get(first_extract - 1).unwrap().array, vec![3, 1, 2]);
    }
}
