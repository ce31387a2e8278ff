//! Dependency Graph Builder
//!
//! Turns many local delivery orderings into directed "precedes" edges by
//! pairwise weighted voting against a quorum threshold. Two entry modes
//! share the core vote: raw per-replica orderings (baseline protocol) and
//! orderings reconstructed from a leader's causal history (DAG protocol).

use crate::config::OrderingConfig;
use crate::domain::entities::{Dag, DependencyGraph, Transaction};
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{LocalOrdering, TxId, VertexId};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// One local ordering per replica over the whole batch: sort by that
/// replica's delivery time, dense 1-based ranks.
pub fn raw_local_orderings(
    transactions: &[Transaction],
    replicas: usize,
) -> Result<Vec<LocalOrdering>, OrderingError> {
    for tx in transactions {
        if tx.replica_count() != replicas {
            return Err(OrderingError::ReplicaCountMismatch {
                expected: replicas,
                actual: tx.replica_count(),
            });
        }
    }

    let mut orderings = Vec::with_capacity(replicas);
    for replica in 0..replicas {
        let mut view: Vec<_> = transactions
            .iter()
            .map(|tx| (tx.id, tx.delivery_times[replica]))
            .collect();
        view.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        orderings.push(LocalOrdering::from_sorted_ids(view.into_iter().map(|(id, _)| id)));
    }
    Ok(orderings)
}

/// One local ordering per replica from the slots visible to a causal
/// history: that replica's member rounds in ascending order, each slot's
/// entries in stored order, dense ranks from 1.
///
/// Replicas with no vertex in the history contribute an empty ordering;
/// their votes abstain on every pair.
pub fn local_orderings_from_history(
    dag: &Dag,
    history: &HashSet<VertexId>,
    replicas: usize,
) -> Vec<LocalOrdering> {
    let mut orderings = Vec::with_capacity(replicas);
    for replica in 0..replicas {
        let rounds: BTreeSet<_> = history
            .iter()
            .filter(|v| v.replica == replica)
            .map(|v| v.round)
            .collect();

        let mut ordering = LocalOrdering::new();
        let mut rank = 1u64;
        for round in rounds {
            for &(id, _) in &dag.vertex(VertexId::new(replica, round)).entries {
                ordering.insert(id, rank);
                rank += 1;
            }
        }
        orderings.push(ordering);
    }
    orderings
}

/// Accumulate majority-voted edges into the graph.
///
/// For every undecided pair `(a, b)` with `a < b` over the union of
/// ordering keys: each ordering votes for the side it ranks earlier, or
/// for the side it contains when only one side is present; orderings
/// containing neither abstain. The direction with strictly greater weight
/// wins; a tie goes to the lower ID. The winning edge is inserted only if
/// its weight reaches `threshold`.
///
/// Edges already present (from earlier leaders) are never revisited, so
/// repeated calls are cumulative. A threshold above the ordering count is
/// valid and simply adds nothing.
pub fn apply_local_orderings(
    graph: &mut DependencyGraph,
    orderings: &[LocalOrdering],
    threshold: u64,
) {
    // Sorted universe: deterministic pair iteration, and every pair visits
    // as (lower, higher) exactly once.
    let nodes: BTreeSet<TxId> = orderings.iter().flat_map(|o| o.ids()).collect();
    let nodes: Vec<TxId> = nodes.into_iter().collect();

    for (i, &a) in nodes.iter().enumerate() {
        for &b in &nodes[i + 1..] {
            if graph.pair_decided(a, b) {
                continue;
            }

            let mut weight_ab = 0u64;
            let mut weight_ba = 0u64;
            for ordering in orderings {
                match (ordering.rank(a), ordering.rank(b)) {
                    (None, None) => {}
                    (Some(_), None) => weight_ab += 1,
                    (None, Some(_)) => weight_ba += 1,
                    (Some(rank_a), Some(rank_b)) => {
                        if rank_a < rank_b {
                            weight_ab += 1;
                        } else if rank_b < rank_a {
                            weight_ba += 1;
                        }
                    }
                }
            }

            // Ties go to the lower ID, which is `a` here.
            if weight_ab >= weight_ba {
                if weight_ab >= threshold {
                    graph.try_add_edge(a, b);
                }
            } else if weight_ba >= threshold {
                graph.try_add_edge(b, a);
            }
        }
    }
}

/// Run the DAG protocol's vote passes over an already-resolved grid.
///
/// Intermediate leaders are walked in ascending round order (even rounds
/// below `rounds - 1`) at quorum `f + 1`; a final synthetic leader whose
/// history is the entire grid votes at quorum `(n - f) / 2`.
pub fn apply_dag_votes(graph: &mut DependencyGraph, dag: &Dag, config: &OrderingConfig) {
    let replicas = config.replicas;
    let leader_threshold = config.leader_threshold();

    for leader in dag.leaders() {
        if leader.round + 1 >= config.rounds {
            continue;
        }
        let orderings =
            local_orderings_from_history(dag, &dag.vertex(leader).causal_history, replicas);
        apply_local_orderings(graph, &orderings, leader_threshold);
        debug!(
            replica = leader.replica,
            round = leader.round,
            edges = graph.edge_count(),
            "Applied intermediate leader votes"
        );
    }

    // Aggregate pass: a synthetic leader that sees every slot of every
    // replica, closing out pairs the per-leader cones left undecided.
    let full_grid: HashSet<VertexId> = (0..replicas)
        .flat_map(|replica| (0..config.rounds).map(move |round| VertexId::new(replica, round)))
        .collect();
    let orderings = local_orderings_from_history(dag, &full_grid, replicas);
    apply_local_orderings(graph, &orderings, config.aggregate_threshold());
    debug!(edges = graph.edge_count(), "Applied aggregate votes");
}
