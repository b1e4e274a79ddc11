//! Algorithm lookup and the public trace entry point
//!
//! An [`AlgorithmRegistry`] is an explicit value: construct one with
//! [`AlgorithmRegistry::with_defaults`] at startup and pass it to whatever
//! needs to generate traces. Tests can build their own registries, including
//! empty or partial ones.

use crate::algorithms::searching::{BinarySearch, LinearSearch};
use crate::algorithms::sorting::{
    BubbleSort, HeapSort, InsertionSort, MergeSort, QuickSort, RadixSort, SelectionSort,
    ShellSort,
};
use crate::algorithms::{AlgorithmDescriptor, AlgorithmKey, StepGenerator};
use crate::errors::TraceError;
use crate::snapshot::{Step, StepSequence};
use rustc_hash::FxHashMap;

/// Maps algorithm keys to their generators, in registration order
pub struct AlgorithmRegistry {
    generators: Vec<Box<dyn StepGenerator>>,
    index: FxHashMap<AlgorithmKey, usize>,
}

impl AlgorithmRegistry {
    /// An empty registry
    pub fn new() -> Self {
        AlgorithmRegistry {
            generators: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// A registry holding every built-in algorithm, sorting variants first
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(BubbleSort));
        registry.register(Box::new(SelectionSort));
        registry.register(Box::new(InsertionSort));
        registry.register(Box::new(MergeSort));
        registry.register(Box::new(QuickSort));
        registry.register(Box::new(HeapSort));
        registry.register(Box::new(RadixSort));
        registry.register(Box::new(ShellSort));
        registry.register(Box::new(LinearSearch));
        registry.register(Box::new(BinarySearch));
        registry
    }

    /// Add a generator. Re-registering a key replaces the generator in place.
    pub fn register(&mut self, generator: Box<dyn StepGenerator>) {
        let key = generator.key();
        match self.index.get(&key) {
            Some(&slot) => self.generators[slot] = generator,
            None => {
                self.index.insert(key, self.generators.len());
                self.generators.push(generator);
            }
        }
    }

    /// Look up the generator for `key`
    pub fn resolve(&self, key: AlgorithmKey) -> Result<&dyn StepGenerator, TraceError> {
        self.index
            .get(&key)
            .map(|&slot| self.generators[slot].as_ref())
            .ok_or(TraceError::AlgorithmNotFound(key))
    }

    /// Every registered descriptor, in registration order
    pub fn list_all(&self) -> impl Iterator<Item = &'static AlgorithmDescriptor> + '_ {
        self.generators.iter().map(|g| g.descriptor())
    }

    pub fn keys(&self) -> impl Iterator<Item = AlgorithmKey> + '_ {
        self.generators.iter().map(|g| g.key())
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// The key registered after `key`, wrapping around
    pub fn next_key(&self, key: AlgorithmKey) -> Option<AlgorithmKey> {
        self.cycle(key, 1)
    }

    /// The key registered before `key`, wrapping around
    pub fn prev_key(&self, key: AlgorithmKey) -> Option<AlgorithmKey> {
        self.cycle(key, self.generators.len().saturating_sub(1))
    }

    fn cycle(&self, key: AlgorithmKey, offset: usize) -> Option<AlgorithmKey> {
        if self.generators.is_empty() {
            return None;
        }
        let slot = self.index.get(&key).copied().unwrap_or(0);
        let next = (slot + offset) % self.generators.len();
        Some(self.generators[next].key())
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Generate the trace for the algorithm named `name`.
///
/// Never fails: an unknown name or a key missing from `registry` is logged and
/// answered with a one-step trace describing the problem.
#[tracing::instrument(skip(registry, array), fields(len = array.len()))]
pub fn generate_steps(
    registry: &AlgorithmRegistry,
    name: &str,
    array: &[i64],
    target: Option<i64>,
) -> StepSequence {
    match name.parse::<AlgorithmKey>() {
        Ok(key) => generate_for_key(registry, key, array, target),
        Err(err) => fallback(err, array),
    }
}

/// Generate the trace for an already-parsed key, with the same fallback
/// behaviour as [`generate_steps`]
pub fn generate_for_key(
    registry: &AlgorithmRegistry,
    key: AlgorithmKey,
    array: &[i64],
    target: Option<i64>,
) -> StepSequence {
    match registry.resolve(key) {
        Ok(generator) => {
            let steps = generator.generate(array, target);
            tracing::debug!(
                algorithm = %key,
                steps = steps.len(),
                bytes = steps.estimated_size(),
                "generated trace"
            );
            steps
        }
        Err(err) => fallback(err, array),
    }
}

fn fallback(err: TraceError, array: &[i64]) -> StepSequence {
    tracing::warn!(error = %err, "falling back to an empty trace");
    let description = match &err {
        TraceError::UnknownAlgorithm(name) => format!("Unknown algorithm: {}", name),
        TraceError::AlgorithmNotFound(key) => {
            format!("Unknown algorithm: {} is not registered", key)
        }
    };
    let mut steps = StepSequence::new();
    steps.push(Step::new(array, description, format!("// {}", err)));
    steps
}
