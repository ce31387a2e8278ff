//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{FinalOrder, Transaction};
use crate::domain::errors::OrderingError;
use async_trait::async_trait;

/// Primary Fair Ordering API.
#[async_trait]
pub trait FairOrderingApi: Send + Sync {
    /// Compute a fair total order for the batch and commit it.
    ///
    /// This is the main entry point. It:
    /// 1. Validates configuration against the batch
    /// 2. Builds the vote inputs (raw orderings or DAG causal histories)
    /// 3. Accumulates the majority-voted dependency graph
    /// 4. Resolves a tournament path and writes `final_position`
    ///
    /// The batch is mutated in place: on success every transaction carries
    /// a committed position.
    async fn order_batch(
        &self,
        transactions: &mut [Transaction],
    ) -> Result<FinalOrder, OrderingError>;
}
