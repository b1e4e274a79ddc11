// LSD radix sort, base 10, with a stable counting pass per digit

use super::{begin, finish};
use crate::algorithms::{format_values, AlgorithmDescriptor, AlgorithmKey, StepGenerator};
use crate::snapshot::{Step, StepSequence};

pub const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    key: AlgorithmKey::Radix,
    name: "Radix Sort",
    description: "Sorts by one decimal digit at a time, least significant first, using a \
                  stable counting sort for each digit place.",
    time_complexity: "O(d·(n + k))",
    space_complexity: "O(n + k)",
    best_case: "O(d·(n + k))",
    worst_case: "O(d·(n + k))",
    source: SOURCE,
};

const SOURCE: &str = r#"fn radix_sort(arr: &mut [i64]) {
    let Some(&max) = arr.iter().max() else { return };
    let mut exp = 1;
    while max / exp > 0 {
        counting_sort(arr, exp);
        exp *= 10;
    }
}

fn counting_sort(arr: &mut [i64], exp: i64) {
    let mut output = vec![0; arr.len()];
    let mut count = [0usize; 10];
    for &v in arr.iter() {
        count[((v / exp) % 10) as usize] += 1;
    }
    for d in 1..10 {
        count[d] += count[d - 1];
    }
    for &v in arr.iter().rev() {
        let d = ((v / exp) % 10) as usize;
        count[d] -= 1;
        output[count[d]] = v;
    }
    arr.copy_from_slice(&output);
}"#;

const BASE: u128 = 10;

pub struct RadixSort;

impl StepGenerator for RadixSort {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn generate(&self, array: &[i64], _target: Option<i64>) -> StepSequence {
        let mut arr = array.to_vec();
        let mut steps = begin(&arr, DESCRIPTOR.name);

        if let Some(&min) = arr.iter().min() {
            // Negative input is keyed by its distance from the minimum so every
            // digit pass runs on non-negative keys.
            let offset = min.min(0);
            let max_key = arr.iter().map(|&v| key(v, offset)).max().unwrap_or(0);

            let description = if offset < 0 {
                format!(
                    "Minimum is {}: sorting keys are value - ({}), largest key {}",
                    min, offset, max_key
                )
            } else {
                format!("Maximum value is {}: it sets the number of digit passes", max_key)
            };
            steps.push(Step::new(&arr, description, "let max = arr.iter().max();"));

            let mut exp: u128 = 1;
            while max_key / exp > 0 {
                counting_pass(&mut arr, exp, offset, &mut steps);
                exp *= BASE;
            }
        }

        finish(&mut steps, &arr, DESCRIPTOR.name);
        steps
    }
}

fn key(value: i64, offset: i64) -> u128 {
    (i128::from(value) - i128::from(offset)) as u128
}

fn digit(value: i64, offset: i64, exp: u128) -> usize {
    ((key(value, offset) / exp) % BASE) as usize
}

/// Stable counting sort of `arr` on the digit at place `exp`
fn counting_pass(arr: &mut Vec<i64>, exp: u128, offset: i64, steps: &mut StepSequence) {
    let mut count = [0usize; BASE as usize];
    for &v in arr.iter() {
        count[digit(v, offset, exp)] += 1;
    }
    steps.push(
        Step::new(
            arr,
            format!("Digit place {}: count how many keys have each digit 0-9", exp),
            "count[(arr[i] / exp) % 10] += 1;",
        )
        .buckets(&count),
    );

    for d in 1..count.len() {
        count[d] += count[d - 1];
    }
    steps.push(
        Step::new(
            arr,
            "Cumulative counts give each digit's end position in the output",
            "count[d] += count[d - 1];",
        )
        .buckets(&count),
    );

    // Walking backward keeps equal digits in their current relative order.
    let mut output: Vec<Option<i64>> = vec![None; arr.len()];
    for i in (0..arr.len()).rev() {
        let v = arr[i];
        let d = digit(v, offset, exp);
        count[d] -= 1;
        let pos = count[d];
        output[pos] = Some(v);
        steps.push(
            Step::new(
                arr,
                format!("Place arr[{}] = {} (digit {}) at output[{}]", i, v, d, pos),
                "count[digit] -= 1; output[count[digit]] = arr[i];",
            )
            .buckets(&count)
            .staging(&output),
        );
    }

    *arr = output.into_iter().flatten().collect();
    steps.push(Step::new(
        arr,
        format!("After digit place {}: {}", exp, format_values(arr)),
        "arr.copy_from_slice(&output);",
    ));
}
