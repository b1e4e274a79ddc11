//! Step-trace generators for every supported algorithm
//!
//! Each algorithm is a zero-sized type implementing [`StepGenerator`]. A
//! generator copies the caller's array, runs the algorithm to completion on
//! that private copy, and records a [`Step`](crate::snapshot::Step) after every
//! comparison, exchange, partition, digit pass or bound update.
//!
//! - [`sorting`]: bubble, selection, insertion, merge, quick, heap, radix, shell
//! - [`searching`]: linear, binary
//!
//! Recursive generators (merge, quick, heap) thread the output
//! [`StepSequence`] through every call as `&mut`, so the trace has exactly one
//! owner for the whole run.

pub mod searching;
pub mod sorting;

use crate::snapshot::StepSequence;
use std::fmt;
use std::str::FromStr;

use crate::errors::TraceError;

/// Stable identity of an algorithm variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum AlgorithmKey {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Radix,
    Shell,
    Linear,
    Binary,
}

impl AlgorithmKey {
    pub const ALL: [AlgorithmKey; 10] = [
        AlgorithmKey::Bubble,
        AlgorithmKey::Selection,
        AlgorithmKey::Insertion,
        AlgorithmKey::Merge,
        AlgorithmKey::Quick,
        AlgorithmKey::Heap,
        AlgorithmKey::Radix,
        AlgorithmKey::Shell,
        AlgorithmKey::Linear,
        AlgorithmKey::Binary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmKey::Bubble => "bubble",
            AlgorithmKey::Selection => "selection",
            AlgorithmKey::Insertion => "insertion",
            AlgorithmKey::Merge => "merge",
            AlgorithmKey::Quick => "quick",
            AlgorithmKey::Heap => "heap",
            AlgorithmKey::Radix => "radix",
            AlgorithmKey::Shell => "shell",
            AlgorithmKey::Linear => "linear",
            AlgorithmKey::Binary => "binary",
        }
    }

    pub fn kind(self) -> AlgorithmKind {
        match self {
            AlgorithmKey::Linear | AlgorithmKey::Binary => AlgorithmKind::Searching,
            _ => AlgorithmKind::Sorting,
        }
    }
}

impl fmt::Display for AlgorithmKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKey {
    type Err = TraceError;

    /// Accepts the bare identity (`"quick"`) as well as the long form
    /// (`"quick-sort"`, `"Quick Sort"`, `"binary_search"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        let bare = normalized
            .strip_suffix("-sort")
            .or_else(|| normalized.strip_suffix("-search"))
            .unwrap_or(&normalized);

        AlgorithmKey::ALL
            .into_iter()
            .find(|key| key.as_str() == bare)
            .ok_or_else(|| TraceError::unknown(s))
    }
}

/// Whether an algorithm orders the array or looks up a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Sorting,
    Searching,
}

/// Static metadata shown next to a trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmDescriptor {
    pub key: AlgorithmKey,
    pub name: &'static str,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub best_case: &'static str,
    pub worst_case: &'static str,
    /// Reference implementation displayed once playback completes
    pub source: &'static str,
}

impl AlgorithmDescriptor {
    pub fn kind(&self) -> AlgorithmKind {
        self.key.kind()
    }
}

/// A deterministic trace generator for one algorithm variant
///
/// Implementations must be pure: the same `(array, target)` always yields an
/// identical [`StepSequence`], and the caller's slice is never modified.
/// Sorting generators ignore `target`.
pub trait StepGenerator: Send + Sync {
    fn descriptor(&self) -> &'static AlgorithmDescriptor;

    fn generate(&self, array: &[i64], target: Option<i64>) -> StepSequence;

    fn key(&self) -> AlgorithmKey {
        self.descriptor().key
    }
}

/// Render a slice the way narration strings show arrays
pub(crate) fn format_values(values: &[i64]) -> String {
    let inner: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", inner.join(", "))
}
