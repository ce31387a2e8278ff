//! Error types for Fair Ordering

use thiserror::Error;

/// All errors that can occur in the ordering pipeline.
///
/// Degenerate-but-valid outcomes are deliberately absent here: thresholds
/// that no pair reaches, incomplete tournaments, and non-transitive vote
/// cycles are all resolved by the deterministic insertion rule instead of
/// being rejected.
#[derive(Debug, Error)]
pub enum OrderingError {
    /// No transactions supplied
    #[error("Empty transaction batch")]
    EmptyBatch,

    /// Too few transactions for the configured round count (slot size would be zero)
    #[error("Cannot partition {transactions} transactions into {rounds} rounds")]
    InvalidPartition { transactions: usize, rounds: usize },

    /// Fewer than four replicas cannot tolerate any fault
    #[error("Replica count too small: {replicas} < 4")]
    TooFewReplicas { replicas: usize },

    /// Round count must be at least one
    #[error("Round count must be at least 1")]
    NoRounds,

    /// A delivery vector or local-ordering set disagrees with the declared replica count
    #[error("Replica count mismatch: expected {expected}, got {actual}")]
    ReplicaCountMismatch { expected: usize, actual: usize },

    /// A resolved path referenced an ID outside the batch universe
    #[error("Unknown transaction ID {id} in resolved path")]
    UnknownTransaction { id: u64 },

    /// The resolved path does not cover the batch
    #[error("Path length {path} does not match batch size {batch}")]
    PathLengthMismatch { path: usize, batch: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OrderingError::InvalidPartition {
            transactions: 3,
            rounds: 5,
        };
        assert_eq!(
            err.to_string(),
            "Cannot partition 3 transactions into 5 rounds"
        );
    }

    #[test]
    fn test_mismatch_display() {
        let err = OrderingError::ReplicaCountMismatch {
            expected: 4,
            actual: 7,
        };
        assert_eq!(err.to_string(), "Replica count mismatch: expected 4, got 7");
    }
}
