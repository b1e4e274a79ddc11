//! Error types for algorithm lookup
//!
//! Generators themselves cannot fail: every input, including an empty array,
//! yields a valid trace. The only failures are at the lookup boundary, and
//! [`crate::registry::generate_steps`] turns both of them into a one-step
//! fallback trace instead of returning them to the caller.

use crate::algorithms::AlgorithmKey;

/// Errors raised while resolving an algorithm
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// The name does not correspond to any known algorithm
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The key is valid but this registry has no generator for it
    #[error("algorithm not found in registry: {0}")]
    AlgorithmNotFound(AlgorithmKey),
}

impl TraceError {
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_key() {
        assert_eq!(
            TraceError::unknown("bogo").to_string(),
            "unknown algorithm: bogo"
        );
        assert_eq!(
            TraceError::AlgorithmNotFound(AlgorithmKey::Radix).to_string(),
            "algorithm not found in registry: radix"
        );
    }
}
