//! # Introduction
//!
//! algotrace runs a sorting or searching algorithm to completion on a private
//! copy of its input, capturing a fully annotated snapshot after every
//! comparison, exchange, partition, digit pass or bound update. The resulting
//! trace can then be replayed forward and backward, one step at a time or on
//! a timer, through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Registry → Generator → StepSequence → Metrics / Playback → TUI
//! ```
//!
//! 1. [`registry`] — maps an [`algorithms::AlgorithmKey`] to its generator;
//!    [`registry::generate_steps`] is the entry point that never fails.
//! 2. [`algorithms`] — one [`algorithms::StepGenerator`] per variant:
//!    bubble, selection, insertion, merge, quick, heap, radix and shell sort,
//!    plus linear and binary search.
//! 3. [`snapshot`] — the [`snapshot::Step`] record and the append-only
//!    [`snapshot::StepSequence`].
//! 4. [`metrics`] — comparison, swap and step counts for a trace.
//! 5. [`playback`] — cursor state machine with a cancellable autoplay ticker.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use algotrace::metrics::Metrics;
//! use algotrace::registry::{generate_steps, AlgorithmRegistry};
//!
//! let registry = AlgorithmRegistry::with_defaults();
//! let steps = generate_steps(&registry, "bubble", &[3, 1, 2], None);
//! assert_eq!(steps.last().unwrap().array, vec![1, 2, 3]);
//! assert!(Metrics::from_sequence(&steps).comparisons > 0);
//! ```

pub mod algorithms;
pub mod errors;
pub mod input;
pub mod metrics;
pub mod playback;
pub mod registry;
pub mod snapshot;
pub mod ui;
