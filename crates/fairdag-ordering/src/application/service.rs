//! Fair Ordering Service
//!
//! Main service implementing FairOrderingApi.

use crate::adapters::SeededRandom;
use crate::algorithms::{
    apply_dag_votes, apply_local_orderings, assign_positions, build_dag, raw_local_orderings,
    resolve_causal_histories, tournament_path,
};
use crate::config::OrderingConfig;
use crate::domain::entities::{DependencyGraph, FinalOrder, Transaction};
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::Protocol;
use crate::ports::inbound::FairOrderingApi;
use async_trait::async_trait;

use tracing::{debug, info};

/// Fair Ordering Service
///
/// Orchestrates one ordering run:
/// 1. Validate configuration against the batch
/// 2. Build vote inputs (raw orderings, or DAG + causal histories)
/// 3. Accumulate the voted dependency graph
/// 4. Resolve the tournament path
/// 5. Commit final positions
pub struct FairOrderingService {
    config: OrderingConfig,
}

impl FairOrderingService {
    /// Create a new service with default config.
    pub fn new() -> Self {
        Self {
            config: OrderingConfig::default(),
        }
    }

    /// Create a new service with custom config.
    pub fn with_config(config: OrderingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OrderingConfig {
        &self.config
    }

    /// Baseline variant: vote once over the first `n - 2f` raw orderings.
    fn vote_baseline(
        &self,
        graph: &mut DependencyGraph,
        transactions: &[Transaction],
    ) -> Result<(), OrderingError> {
        let fault_bound = self.config.fault_bound();
        let orderings = raw_local_orderings(transactions, self.config.replicas)?;
        let quorum_view = &orderings[..self.config.replicas - 2 * fault_bound];

        apply_local_orderings(graph, quorum_view, self.config.leader_threshold());
        debug!(
            orderings = quorum_view.len(),
            threshold = self.config.leader_threshold(),
            edges = graph.edge_count(),
            "Applied baseline votes"
        );
        Ok(())
    }

    /// DAG variant: every leader votes with the orderings its causal cone
    /// entitles it to, then the aggregate pass closes out the rest.
    fn vote_fair_dag(
        &self,
        graph: &mut DependencyGraph,
        transactions: &[Transaction],
    ) -> Result<(), OrderingError> {
        let mut rng = SeededRandom::new(self.config.seed);
        let mut dag = build_dag(transactions, &self.config, &mut rng)?;
        resolve_causal_histories(&mut dag);
        debug!(
            replicas = dag.replicas(),
            rounds = dag.rounds(),
            leaders = dag.leaders().len(),
            "Resolved causal histories"
        );

        apply_dag_votes(graph, &dag, &self.config);
        Ok(())
    }
}

impl Default for FairOrderingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FairOrderingApi for FairOrderingService {
    async fn order_batch(
        &self,
        transactions: &mut [Transaction],
    ) -> Result<FinalOrder, OrderingError> {
        self.config.validate(transactions.len())?;

        info!(
            tx_count = transactions.len(),
            replicas = self.config.replicas,
            rounds = self.config.rounds,
            protocol = ?self.config.protocol,
            "Ordering batch"
        );

        let mut graph = DependencyGraph::new(transactions.len());
        match self.config.protocol {
            Protocol::Baseline => self.vote_baseline(&mut graph, transactions)?,
            Protocol::FairDag => self.vote_fair_dag(&mut graph, transactions)?,
        }

        let path = tournament_path(&graph);
        assign_positions(transactions, &path)?;

        info!(
            voted_edges = graph.edge_count(),
            path_len = path.len(),
            "Batch ordering committed"
        );

        Ok(FinalOrder {
            protocol: self.config.protocol,
            voted_edges: graph.edge_count(),
            path,
        })
    }
}
