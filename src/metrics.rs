//! Summary counts derived from a trace

use crate::snapshot::StepSequence;

/// Operation counts for one trace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Steps with a non-empty `comparing` set
    pub comparisons: usize,
    /// Steps with a non-empty `swapping` set
    pub swaps: usize,
    pub steps: usize,
}

impl Metrics {
    pub fn from_sequence(sequence: &StepSequence) -> Self {
        sequence.iter().fold(
            Metrics {
                steps: sequence.len(),
                ..Metrics::default()
            },
            |mut acc, step| {
                if !step.comparing.is_empty() {
                    acc.comparisons += 1;
                }
                if !step.swapping.is_empty() {
                    acc.swaps += 1;
                }
                acc
            },
        )
    }
}

impl From<&StepSequence> for Metrics {
    fn from(sequence: &StepSequence) -> Self {
        Metrics::from_sequence(sequence)
    }
}
