//! # FairDAG Simulation & Evaluation
//!
//! Everything around the core ordering pipeline that the pipeline itself
//! does not own: synthetic workload generation, adversarial delivery-time
//! injection, and fairness evaluation (Spearman rank correlation and
//! pairwise distance correctness) over committed orders.
//!
//! This crate only consumes the core's boundary data: `delivery_times`
//! going in, `delivery_rank` / `final_position` coming out.

pub mod distance;
pub mod spearman;
pub mod workload;

pub use distance::{correct_pair_ratio, pairwise_distances};
pub use spearman::{correlation, spearman_rank_correlation, Reference};
pub use workload::{generate_transactions, inject_leader_bias, WorkloadParams};

use thiserror::Error;

/// Errors from evaluation and workload tooling.
#[derive(Debug, Error)]
pub enum SimError {
    /// Correlation inputs must be equally long
    #[error("Sequence length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Rank correlation needs at least two elements
    #[error("Need at least 2 elements, got {count}")]
    InsufficientData { count: usize },

    /// The batch has no delivery ranks yet
    #[error("Batch has not been ranked by average delivery time")]
    UnrankedBatch,

    /// The batch has no committed order yet
    #[error("Batch has no committed final positions")]
    UncommittedBatch,
}
