// Integration tests for the sorting trace generators

use algotrace::algorithms::{AlgorithmKey, AlgorithmKind};
use algotrace::metrics::Metrics;
use algotrace::registry::{generate_for_key, AlgorithmRegistry};
use algotrace::snapshot::StepSequence;

fn sorting_keys() -> Vec<AlgorithmKey> {
    AlgorithmKey::ALL
        .into_iter()
        .filter(|k| k.kind() == AlgorithmKind::Sorting)
        .collect()
}

fn inputs() -> Vec<Vec<i64>> {
    vec![
        vec![],
        vec![42],
        vec![2, 1],
        vec![64, 34, 25, 12, 22, 11, 90],
        vec![5, 1, 4, 2, 8, 5, 1],
        vec![1, 2, 3, 4, 5, 6],
        vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
        vec![7, 7, 7, 7],
        vec![170, 45, 75, 90, 802, 24, 2, 66],
        vec![3, -4, 0, 12, -9, 3],
    ]
}

fn trace(key: AlgorithmKey, input: &[i64]) -> StepSequence {
    let registry = AlgorithmRegistry::with_defaults();
    generate_for_key(&registry, key, input, None)
}

// === FINAL STATE ===

#[test]
fn test_final_step_is_sorted_permutation() {
    for key in sorting_keys() {
        for input in inputs() {
            let steps = trace(key, &input);
            let last = steps.last().expect("trace is never empty");

            let mut expected = input.clone();
            expected.sort();
            assert_eq!(last.array, expected, "{} on {:?}", key, input);
        }
    }
}

#[test]
fn test_final_step_marks_every_index_sorted() {
    for key in sorting_keys() {
        for input in inputs() {
            let steps = trace(key, &input);
            let last = steps.last().unwrap();
            let all: Vec<usize> = (0..input.len()).collect();
            assert_eq!(last.sorted, all, "{} on {:?}", key, input);
        }
    }
}

#[test]
fn test_first_step_shows_untouched_input() {
    for key in sorting_keys() {
        for input in inputs() {
            let steps = trace(key, &input);
            let first = steps.first().unwrap();
            assert_eq!(first.array, input, "{}", key);
            assert!(first.comparing.is_empty() && first.swapping.is_empty());
        }
    }
}

#[test]
fn test_array_length_is_invariant() {
    for key in sorting_keys() {
        for input in inputs() {
            let steps = trace(key, &input);
            assert!(
                steps.iter().all(|s| s.array.len() == input.len()),
                "{} changed length on {:?}",
                key,
                input
            );
        }
    }
}

#[test]
fn test_role_indices_stay_in_bounds() {
    for key in sorting_keys() {
        for input in inputs() {
            for step in &trace(key, &input) {
                assert!(step.comparing.len() <= 2, "{}: {}", key, step.description);
                let in_bounds = |i: &usize| *i < input.len();
                assert!(step.comparing.iter().all(in_bounds));
                assert!(step.swapping.iter().all(in_bounds));
                assert!(step.sorted.iter().all(in_bounds));
                assert!(step.pivot.map_or(true, |p| p < input.len()));
            }
        }
    }
}

// === DETERMINISM ===

#[test]
fn test_repeated_runs_are_identical() {
    for key in sorting_keys() {
        let input = vec![5, 3, 9, 1, 5, 0, 7];
        assert_eq!(trace(key, &input), trace(key, &input), "{}", key);
    }
}

// === EMPTY INPUT ===

#[test]
fn test_empty_array_yields_minimal_trace() {
    for key in sorting_keys() {
        let steps = trace(key, &[]);
        let metrics = Metrics::from_sequence(&steps);
        assert!(steps.len() >= 1, "{}", key);
        assert_eq!(metrics.comparisons, 0, "{}", key);
        assert_eq!(metrics.swaps, 0, "{}", key);
    }
}

// === ALGORITHM-SPECIFIC ===

#[test]
fn test_radix_sort_reference_input() {
    let steps = trace(AlgorithmKey::Radix, &[170, 45, 75, 90, 802, 24, 2, 66]);
    assert_eq!(
        steps.last().unwrap().array,
        vec![2, 24, 45, 66, 75, 90, 170, 802]
    );

    // Raw counts, cumulative counts, one placement per element, copy-back.
    let per_pass = 2 + 8 + 1;
    assert_eq!(steps.len(), 1 + 1 + 3 * per_pass + 1);
}

#[test]
fn test_radix_sort_counts_are_per_digit() {
    let steps = trace(AlgorithmKey::Radix, &[170, 45, 75, 90, 802, 24, 2, 66]);
    let first_counts = steps.iter().find(|s| s.buckets.is_some()).unwrap();
    // Ones digits: 0,5,5,0,2,4,2,6
    assert_eq!(
        first_counts.buckets,
        Some(vec![2, 0, 2, 0, 1, 2, 1, 0, 0, 0])
    );
}

#[test]
fn test_bubble_sort_early_exit() {
    let steps = trace(AlgorithmKey::Bubble, &[1, 2, 3, 4, 5]);
    let early = steps
        .iter()
        .filter(|s| s.description.contains("No swaps"))
        .count();
    assert_eq!(early, 1);
    assert_eq!(Metrics::from_sequence(&steps).comparisons, 4);
}

#[test]
fn test_merge_sort_is_stable_on_ties() {
    // Every merge of equal values must drain the left half first.
    let steps = trace(AlgorithmKey::Merge, &[5, 5, 5, 5]);
    let from_left = steps
        .iter()
        .filter(|s| s.description.contains("from the left half"))
        .count();
    let from_right = steps
        .iter()
        .filter(|s| s.description.contains("from the right half"))
        .count();
    let right_leftovers = steps
        .iter()
        .filter(|s| s.description.starts_with("Copy remaining right"))
        .count();

    assert_eq!(from_left, 4);
    assert_eq!(from_right, 0);
    assert_eq!(right_leftovers, 4);
}

#[test]
fn test_quick_sort_recurses_left_then_right() {
    let steps = trace(AlgorithmKey::Quick, &[2, 8, 7, 1, 3, 5, 6, 4]);
    let ranges: Vec<(usize, usize)> = steps
        .iter()
        .filter(|s| s.description.starts_with("Partition"))
        .filter_map(|s| s.active_range)
        .collect();
    assert_eq!(ranges, vec![(0, 7), (0, 2), (0, 1), (4, 7), (4, 6)]);
}

#[test]
fn test_quick_sort_pivot_is_last_element() {
    let steps = trace(AlgorithmKey::Quick, &[4, 8, 1, 6]);
    let pivot_step = steps.get(2).unwrap();
    assert_eq!(pivot_step.pivot, Some(3));
    assert_eq!(pivot_step.array[3], 6);
}

#[test]
fn test_heap_sort_marks_tail_before_the_end() {
    let steps = trace(AlgorithmKey::Heap, &[4, 10, 3, 5, 1]);
    let n = steps.len();
    let early_sorted = steps
        .iter()
        .take(n - 1)
        .filter(|s| !s.sorted.is_empty())
        .count();
    assert!(early_sorted > 0);
}

#[test]
fn test_shell_sort_single_element_has_no_gap_rounds() {
    let steps = trace(AlgorithmKey::Shell, &[1]);
    assert_eq!(steps.len(), 2);
}
