// Integration tests for the search trace generators

use algotrace::algorithms::AlgorithmKey;
use algotrace::registry::{generate_for_key, AlgorithmRegistry};
use algotrace::snapshot::{Role, StepSequence};

fn trace(key: AlgorithmKey, input: &[i64], target: i64) -> StepSequence {
    let registry = AlgorithmRegistry::with_defaults();
    generate_for_key(&registry, key, input, Some(target))
}

/// Checks the completion invariant and returns `(found, found_index)`
fn outcome(steps: &StepSequence) -> (bool, Option<usize>) {
    let complete: Vec<_> = steps.iter().filter(|s| s.is_search_complete()).collect();
    assert_eq!(complete.len(), 1, "exactly one completion step");

    let last = steps.last().unwrap();
    assert!(last.is_search_complete(), "completion is the final step");

    let search = last.search.as_ref().unwrap();
    (search.found, search.found_index)
}

// === LINEAR SEARCH ===

#[test]
fn test_linear_search_reference_input() {
    let steps = trace(AlgorithmKey::Linear, &[64, 34, 25, 12, 22, 11, 90], 22);

    let (found, index) = outcome(&steps);
    assert!(found);
    assert_eq!(index, Some(4));

    let n = steps.len();
    let comparisons = steps
        .iter()
        .take(n - 1)
        .filter(|s| !s.comparing.is_empty())
        .count();
    assert_eq!(comparisons, 5);
}

#[test]
fn test_linear_search_miss_scans_everything() {
    let steps = trace(AlgorithmKey::Linear, &[4, 8, 15], 16);
    assert_eq!(outcome(&steps), (false, None));
    assert_eq!(steps.iter().filter(|s| !s.comparing.is_empty()).count(), 3);
}

#[test]
fn test_linear_search_empty_array() {
    let steps = trace(AlgorithmKey::Linear, &[], 1);
    assert_eq!(steps.len(), 2);
    assert_eq!(outcome(&steps), (false, None));
}

// === BINARY SEARCH ===

#[test]
fn test_binary_search_normalizes_unsorted_input() {
    let steps = trace(AlgorithmKey::Binary, &[5, 3, 1], 3);

    let normalized: Vec<_> = steps
        .iter()
        .filter(|s| s.description.contains("normalized"))
        .collect();
    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized[0].array, vec![1, 3, 5]);

    // The first step still shows the caller's order
    assert_eq!(steps.first().unwrap().array, vec![5, 3, 1]);

    let (found, index) = outcome(&steps);
    assert!(found);
    assert_eq!(index, Some(1));
    assert_eq!(steps.last().unwrap().array[1], 3);
}

#[test]
fn test_binary_search_narrows_bounds() {
    let steps = trace(AlgorithmKey::Binary, &[1, 3, 5, 7, 9, 11, 13], 11);
    let mids: Vec<usize> = steps
        .iter()
        .filter(|s| !s.comparing.is_empty())
        .map(|s| s.comparing[0])
        .collect();
    assert_eq!(mids, vec![3, 5]);
    assert_eq!(outcome(&steps), (true, Some(5)));
}

#[test]
fn test_binary_search_miss_and_empty() {
    assert_eq!(outcome(&trace(AlgorithmKey::Binary, &[2, 4, 6], 5)), (false, None));
    assert_eq!(outcome(&trace(AlgorithmKey::Binary, &[], 5)), (false, None));
    assert_eq!(outcome(&trace(AlgorithmKey::Binary, &[2, 4, 6], 1)), (false, None));
}

#[test]
fn test_binary_search_excludes_discarded_half() {
    let steps = trace(AlgorithmKey::Binary, &[1, 2, 3, 4, 5, 6, 7], 6);
    let narrowed = steps
        .iter()
        .find(|s| s.code == "left = mid + 1;")
        .unwrap();
    assert_eq!(narrowed.role_of(0), Role::Excluded);
    assert_eq!(narrowed.role_of(3), Role::Excluded);
    assert_eq!(narrowed.role_of(4), Role::Default);
}

// === SHARED INVARIANTS ===

#[test]
fn test_found_index_holds_target() {
    let inputs: Vec<Vec<i64>> = vec![
        vec![],
        vec![7],
        vec![9, 2, 7, 2, 5],
        vec![-3, -1, 0, 4, 4, 8],
        vec![10, 9, 8, 7, 6, 5],
    ];
    for key in [AlgorithmKey::Linear, AlgorithmKey::Binary] {
        for input in &inputs {
            for target in [-3, 0, 2, 4, 5, 7, 100] {
                let steps = trace(key, input, target);
                let (found, index) = outcome(&steps);
                if found {
                    let last = steps.last().unwrap();
                    assert_eq!(last.array[index.unwrap()], target);
                } else {
                    assert!(!input.contains(&target), "{} missed {} in {:?}", key, target, input);
                }
            }
        }
    }
}

#[test]
fn test_search_is_deterministic() {
    for key in [AlgorithmKey::Linear, AlgorithmKey::Binary] {
        let input = [8, 3, 5, 1, 9];
        assert_eq!(trace(key, &input, 5), trace(key, &input, 5));
    }
}
