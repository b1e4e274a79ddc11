// Binary search over a sorted copy of the input

use super::{begin, found, not_found};
use crate::algorithms::{format_values, AlgorithmDescriptor, AlgorithmKey, StepGenerator};
use crate::snapshot::{SearchState, Step, StepSequence};

pub const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    key: AlgorithmKey::Binary,
    name: "Binary Search",
    description: "Halves a sorted search range each step by comparing the target with the \
                  middle element. Unsorted input is sorted on a private copy first.",
    time_complexity: "O(log n)",
    space_complexity: "O(1)",
    best_case: "O(1)",
    worst_case: "O(log n)",
    source: SOURCE,
};

const SOURCE: &str = r#"fn binary_search(arr: &[i64], target: i64) -> Option<usize> {
    let (mut left, mut right) = (0isize, arr.len() as isize - 1);
    while left <= right {
        let mid = left + (right - left) / 2;
        let v = arr[mid as usize];
        if v == target {
            return Some(mid as usize);
        } else if v < target {
            left = mid + 1;
        } else {
            right = mid - 1;
        }
    }
    None
}"#;

pub struct BinarySearch;

impl StepGenerator for BinarySearch {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn generate(&self, array: &[i64], target: Option<i64>) -> StepSequence {
        let mut arr = array.to_vec();
        let mut steps = begin(&arr, target, DESCRIPTOR.name);

        let Some(target) = target else {
            not_found(&mut steps, &arr, None, SearchState::default());
            return steps;
        };

        if !arr.windows(2).all(|w| w[0] <= w[1]) {
            let before = format_values(&arr);
            arr.sort_unstable();
            steps.push(
                Step::new(
                    &arr,
                    format!(
                        "Binary search needs sorted input: {} normalized to {}",
                        before,
                        format_values(&arr)
                    ),
                    "arr.sort();",
                )
                .search(SearchState::default()),
            );
        }

        // Bounds are signed so `right` can step below zero and end the loop.
        let mut left: isize = 0;
        let mut right: isize = arr.len() as isize - 1;
        steps.push(
            Step::new(
                &arr,
                format!("Search range is [{}, {}]", left, right),
                "let (mut left, mut right) = (0, arr.len() - 1);",
            )
            .search(bounds(left, right, None)),
        );

        while left <= right {
            let mid = left + (right - left) / 2;
            let m = mid as usize;
            steps.push(
                Step::new(
                    &arr,
                    format!("mid = ({} + {}) / 2 = {}", left, right, mid),
                    "let mid = left + (right - left) / 2;",
                )
                .search(bounds(left, right, Some(m))),
            );

            let mut state = bounds(left, right, Some(m));
            state.current_index = Some(m);
            steps.push(
                Step::new(
                    &arr,
                    format!("Compare arr[{}] = {} with target {}", m, arr[m], target),
                    "if arr[mid] == target",
                )
                .comparing(&[m])
                .search(state.clone()),
            );

            if arr[m] == target {
                found(&mut steps, &arr, m, state);
                return steps;
            }

            let (description, code) = if arr[m] < target {
                left = mid + 1;
                (
                    format!("{} < {}: discard the left half, left = {}", arr[m], target, left),
                    "left = mid + 1;",
                )
            } else {
                right = mid - 1;
                (
                    format!("{} > {}: discard the right half, right = {}", arr[m], target, right),
                    "right = mid - 1;",
                )
            };
            steps.push(Step::new(&arr, description, code).search(bounds(left, right, None)));
        }

        not_found(&mut steps, &arr, Some(target), SearchState::default());
        steps
    }
}

/// Search state for the live range `[left, right]`; an empty range has no bounds
fn bounds(left: isize, right: isize, mid: Option<usize>) -> SearchState {
    let (left, right) = if left <= right {
        (Some(left as usize), Some(right as usize))
    } else {
        (None, None)
    };
    SearchState {
        left,
        right,
        mid,
        ..SearchState::default()
    }
}
