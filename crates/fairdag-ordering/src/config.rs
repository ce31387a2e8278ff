//! Configuration for the Fair Ordering pipeline

use crate::domain::errors::OrderingError;
use crate::domain::value_objects::Protocol;
use serde::{Deserialize, Serialize};

/// Ordering configuration.
///
/// `fault_bound` and the quorum thresholds are derived, not configured:
/// they follow from the replica count and the protocol variant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// Number of replicas contributing local orderings (`n`).
    pub replicas: usize,
    /// Number of DAG rounds per run (`R`).
    pub rounds: usize,
    /// Seed for strong-edge sampling and leader election; fixed seed, fixed run.
    pub seed: u64,
    /// Which protocol variant to run.
    pub protocol: Protocol,
}

impl OrderingConfig {
    /// Maximum tolerated faulty replicas for the configured variant.
    pub fn fault_bound(&self) -> usize {
        self.protocol.fault_bound(self.replicas)
    }

    /// Quorum for a single leader's vote pass (both variants).
    pub fn leader_threshold(&self) -> u64 {
        self.fault_bound() as u64 + 1
    }

    /// Quorum for the final aggregate pass of the DAG variant.
    pub fn aggregate_threshold(&self) -> u64 {
        ((self.replicas - self.fault_bound()) / 2) as u64
    }

    /// Reject configurations that cannot produce a meaningful run before
    /// any shared structure is touched.
    pub fn validate(&self, batch_size: usize) -> Result<(), OrderingError> {
        if self.replicas < 4 {
            return Err(OrderingError::TooFewReplicas {
                replicas: self.replicas,
            });
        }
        if self.rounds == 0 {
            return Err(OrderingError::NoRounds);
        }
        if batch_size == 0 {
            return Err(OrderingError::EmptyBatch);
        }
        if batch_size / self.rounds == 0 {
            return Err(OrderingError::InvalidPartition {
                transactions: batch_size,
                rounds: self.rounds,
            });
        }
        Ok(())
    }
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            replicas: 4,
            rounds: 5,
            seed: 42,
            protocol: Protocol::FairDag,
        }
    }
}
