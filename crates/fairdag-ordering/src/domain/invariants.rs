//! Domain invariants for Fair Ordering
//!
//! Checkable predicates over the core structures. Production code upholds
//! these by construction; tests assert them directly.

use super::entities::{Dag, DependencyGraph, Transaction};
use super::value_objects::{TxId, VertexId};
use std::collections::HashSet;

/// INVARIANT-1: Antisymmetric edges.
/// No pair of transactions carries a "precedes" edge in both directions.
pub fn invariant_antisymmetric_edges(graph: &DependencyGraph) -> bool {
    for a in graph.nodes() {
        for b in graph.nodes() {
            if a < b && graph.has_edge(a, b) && graph.has_edge(b, a) {
                return false;
            }
        }
    }
    true
}

/// INVARIANT-2: Path completeness.
/// A resolved path is a permutation of exactly the graph's node universe.
pub fn invariant_path_complete(path: &[TxId], graph: &DependencyGraph) -> bool {
    if path.len() != graph.node_count() {
        return false;
    }
    let seen: HashSet<TxId> = path.iter().copied().collect();
    seen.len() == path.len() && graph.nodes().all(|id| seen.contains(&id))
}

/// INVARIANT-3: Causal closure.
/// A leader's history contains the leader itself and, for every member with
/// round `j > 0`, every vertex its strong edges reach in round `j - 1`.
pub fn invariant_causal_history_closed(dag: &Dag, leader: VertexId) -> bool {
    let history = &dag.vertex(leader).causal_history;
    if !history.contains(&leader) {
        return false;
    }
    for member in history {
        if member.round == 0 {
            continue;
        }
        let vertex = dag.vertex(*member);
        for &edge in &vertex.strong_edges {
            if !history.contains(&VertexId::new(edge, member.round - 1)) {
                return false;
            }
        }
    }
    true
}

/// INVARIANT-4: Committed positions form a permutation of `[0, batch size)`.
pub fn invariant_positions_permutation(transactions: &[Transaction]) -> bool {
    let mut seen = vec![false; transactions.len()];
    for tx in transactions {
        match tx.final_position {
            Some(pos) if pos < seen.len() && !seen[pos] => seen[pos] = true,
            _ => return false,
        }
    }
    true
}
