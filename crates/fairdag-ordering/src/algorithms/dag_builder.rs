//! DAG Builder
//!
//! Partitions each replica's delivery stream into per-round slots, wires
//! strong edges into the previous round, and marks one leader per even round.

use crate::config::OrderingConfig;
use crate::domain::entities::{is_leader_round, Dag, DagVertex, Transaction};
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{ReplicaId, RoundId, VertexId};
use crate::ports::outbound::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Leader replica for an even round, as a pure function of
/// `(round, replicas, seed)`.
///
/// Re-deriving the leader for a round never consumes shared RNG state, so
/// leader assignment for different rounds is independent and individually
/// reproducible.
pub fn leader_for_round(round: RoundId, replicas: usize, seed: u64) -> ReplicaId {
    let mut rng = StdRng::seed_from_u64(seed ^ (round as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    rng.gen_range(0..replicas)
}

/// Build the `replicas x rounds` vertex grid for one run.
///
/// For each replica the transactions are sorted by that replica's delivery
/// time and split into `rounds` contiguous slots of `t / rounds` entries.
/// When `t` is not divisible by the round count, the trailing remainder
/// (up to `rounds - 1` transactions per replica) is dropped from the
/// partition; callers must reject `t / rounds == 0` via
/// [`OrderingConfig::validate`] before reaching this point.
///
/// Every vertex above round 0 receives `2f + 1` strong edges sampled
/// without replacement from the replica universe, `f = (n - 1) / 3`.
pub fn build_dag(
    transactions: &[Transaction],
    config: &OrderingConfig,
    rng: &mut dyn RandomSource,
) -> Result<Dag, OrderingError> {
    let replicas = config.replicas;
    let rounds = config.rounds;
    let slot_size = transactions.len() / rounds;
    if slot_size == 0 {
        return Err(OrderingError::InvalidPartition {
            transactions: transactions.len(),
            rounds,
        });
    }
    for tx in transactions {
        if tx.replica_count() != replicas {
            return Err(OrderingError::ReplicaCountMismatch {
                expected: replicas,
                actual: tx.replica_count(),
            });
        }
    }

    let fault_bound = (replicas - 1) / 3;
    let edge_count = 2 * fault_bound + 1;

    let mut grid: Vec<Vec<DagVertex>> = Vec::with_capacity(replicas);
    for replica in 0..replicas {
        // This replica's view: every transaction stamped with its local
        // delivery time, ascending.
        let mut view: Vec<_> = transactions
            .iter()
            .map(|tx| (tx.id, tx.delivery_times[replica]))
            .collect();
        view.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut row = Vec::with_capacity(rounds);
        for round in 0..rounds {
            let entries = view[round * slot_size..(round + 1) * slot_size].to_vec();
            let strong_edges = if round == 0 {
                Vec::new()
            } else {
                rng.sample_distinct(replicas, edge_count)
            };
            row.push(DagVertex::new(
                VertexId::new(replica, round),
                entries,
                strong_edges,
            ));
        }
        grid.push(row);
    }

    let mut dag = Dag::new(grid);
    for round in 0..rounds {
        if is_leader_round(round) {
            let leader = leader_for_round(round, replicas, config.seed);
            dag.vertex_mut(VertexId::new(leader, round)).is_leader = true;
        }
    }
    Ok(dag)
}
