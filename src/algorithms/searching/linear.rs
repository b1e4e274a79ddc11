// Linear search

use super::{begin, found, not_found};
use crate::algorithms::{AlgorithmDescriptor, AlgorithmKey, StepGenerator};
use crate::snapshot::{SearchState, Step, StepSequence};

pub const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    key: AlgorithmKey::Linear,
    name: "Linear Search",
    description: "Checks every element from left to right and stops at the first match.",
    time_complexity: "O(n)",
    space_complexity: "O(1)",
    best_case: "O(1)",
    worst_case: "O(n)",
    source: SOURCE,
};

const SOURCE: &str = r#"fn linear_search(arr: &[i64], target: i64) -> Option<usize> {
    for (i, &v) in arr.iter().enumerate() {
        if v == target {
            return Some(i);
        }
    }
    None
}"#;

pub struct LinearSearch;

impl StepGenerator for LinearSearch {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn generate(&self, array: &[i64], target: Option<i64>) -> StepSequence {
        let arr = array.to_vec();
        let mut steps = begin(&arr, target, DESCRIPTOR.name);

        let Some(target) = target else {
            not_found(&mut steps, &arr, None, SearchState::default());
            return steps;
        };

        for (i, &v) in arr.iter().enumerate() {
            let state = SearchState {
                current_index: Some(i),
                ..SearchState::default()
            };
            steps.push(
                Step::new(
                    &arr,
                    format!("Check arr[{}] = {} against {}", i, v, target),
                    "if arr[i] == target",
                )
                .comparing(&[i])
                .search(state.clone()),
            );

            if v == target {
                found(&mut steps, &arr, i, state);
                return steps;
            }
        }

        not_found(&mut steps, &arr, Some(target), SearchState::default());
        steps
    }
}
