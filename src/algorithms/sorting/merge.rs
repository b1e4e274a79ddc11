// Top-down merge sort with a stable merge

use super::{begin, finish};
use crate::algorithms::{format_values, AlgorithmDescriptor, AlgorithmKey, StepGenerator};
use crate::snapshot::{Step, StepSequence};

pub const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    key: AlgorithmKey::Merge,
    name: "Merge Sort",
    description: "Splits the array in half recursively, then merges the sorted halves \
                  back together. Equal elements keep their original order.",
    time_complexity: "O(n log n)",
    space_complexity: "O(n)",
    best_case: "O(n log n)",
    worst_case: "O(n log n)",
    source: SOURCE,
};

const SOURCE: &str = r#"fn merge_sort(arr: &mut [i64], left: usize, right: usize) {
    if left < right {
        let mid = left + (right - left) / 2;
        merge_sort(arr, left, mid);
        merge_sort(arr, mid + 1, right);
        merge(arr, left, mid, right);
    }
}

fn merge(arr: &mut [i64], left: usize, mid: usize, right: usize) {
    let l = arr[left..=mid].to_vec();
    let r = arr[mid + 1..=right].to_vec();
    let (mut i, mut j, mut k) = (0, 0, left);
    while i < l.len() && j < r.len() {
        if l[i] <= r[j] {
            arr[k] = l[i];
            i += 1;
        } else {
            arr[k] = r[j];
            j += 1;
        }
        k += 1;
    }
    while i < l.len() {
        arr[k] = l[i];
        i += 1;
        k += 1;
    }
    while j < r.len() {
        arr[k] = r[j];
        j += 1;
        k += 1;
    }
}"#;

pub struct MergeSort;

impl StepGenerator for MergeSort {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn generate(&self, array: &[i64], _target: Option<i64>) -> StepSequence {
        let mut arr = array.to_vec();
        let mut steps = begin(&arr, DESCRIPTOR.name);

        if !arr.is_empty() {
            let right = arr.len() - 1;
            sort_range(&mut arr, 0, right, &mut steps);
        }

        finish(&mut steps, &arr, DESCRIPTOR.name);
        steps
    }
}

fn sort_range(arr: &mut [i64], left: usize, right: usize, steps: &mut StepSequence) {
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;
    steps.push(
        Step::new(
            arr,
            format!(
                "Divide arr[{}..={}] at mid {} into [{}..={}] and [{}..={}]",
                left,
                right,
                mid,
                left,
                mid,
                mid + 1,
                right
            ),
            format!("let mid = {};", mid),
        )
        .range(left, right),
    );

    sort_range(arr, left, mid, steps);
    sort_range(arr, mid + 1, right, steps);
    merge(arr, left, mid, right, steps);
}

fn merge(arr: &mut [i64], left: usize, mid: usize, right: usize, steps: &mut StepSequence) {
    let l = arr[left..=mid].to_vec();
    let r = arr[mid + 1..=right].to_vec();

    steps.push(
        Step::new(
            arr,
            format!("Merge {} and {}", format_values(&l), format_values(&r)),
            format!("merge(arr, {}, {}, {});", left, mid, right),
        )
        .range(left, right),
    );

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < l.len() && j < r.len() {
        // Ties take from the left half to keep the merge stable.
        let description = if l[i] <= r[j] {
            arr[k] = l[i];
            i += 1;
            format!(
                "{} <= {}: place {} from the left half at index {}",
                arr[k], r[j], arr[k], k
            )
        } else {
            arr[k] = r[j];
            j += 1;
            format!(
                "{} > {}: place {} from the right half at index {}",
                l[i], arr[k], arr[k], k
            )
        };
        steps.push(
            Step::new(
                arr,
                description,
                "if l[i] <= r[j] { arr[k] = l[i] } else { arr[k] = r[j] }",
            )
            .comparing(&[k])
            .range(left, right),
        );
        k += 1;
    }

    while i < l.len() {
        arr[k] = l[i];
        steps.push(
            Step::new(
                arr,
                format!("Copy remaining left element {} to index {}", l[i], k),
                "arr[k] = l[i];",
            )
            .range(left, right),
        );
        i += 1;
        k += 1;
    }

    while j < r.len() {
        arr[k] = r[j];
        steps.push(
            Step::new(
                arr,
                format!("Copy remaining right element {} to index {}", r[j], k),
                "arr[k] = r[j];",
            )
            .range(left, right),
        );
        j += 1;
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_and_merge_steps_pair_up() {
        let steps = MergeSort.generate(&[4, 3, 2, 1], None);
        let divides = steps.iter().filter(|s| s.description.starts_with("Divide")).count();
        let merges = steps.iter().filter(|s| s.description.starts_with("Merge [")).count();
        assert_eq!(divides, 3);
        assert_eq!(merges, 3);
    }

    #[test]
    fn one_placement_step_per_merged_element() {
        let steps = MergeSort.generate(&[2, 1], None);
        // initial, divide, merge header, compare-place, leftover copy, final
        assert_eq!(steps.len(), 6);
        assert_eq!(steps.get(3).unwrap().comparing, vec![0]);
        assert_eq!(steps.get(4).unwrap().array, vec![1, 2]);
    }

    #[test]
    fn tie_takes_the_left_element_first() {
        let steps = MergeSort.generate(&[1, 1], None);
        let placed = steps.get(3).unwrap();
        assert!(placed.description.ends_with("from the left half at index 0"));
        assert_eq!(placed.comparing, vec![0]);

        let copied = steps.get(4).unwrap();
        assert!(copied.description.starts_with("Copy remaining right element"));
        assert!(copied.comparing.is_empty());
    }
}
