//! Causal History Resolver
//!
//! Backward reachability over strong edges, restricted to strictly
//! decreasing rounds. A leader may only use observations from vertices in
//! its causal cone; the quorum-intersection argument downstream relies on
//! every cone certifying `2f + 1` distinct replicas per round it touches.

use crate::domain::entities::Dag;
use crate::domain::value_objects::VertexId;
use std::collections::HashSet;

/// Populate `causal_history` for every leader vertex in the grid.
///
/// Idempotent per unmodified grid: rerunning yields the same sets, since
/// membership is keyed purely by reachability.
pub fn resolve_causal_histories(dag: &mut Dag) {
    for leader in dag.leaders() {
        let history = causal_history_of(dag, leader);
        dag.vertex_mut(leader).causal_history = history;
    }
}

/// Reachable `(replica, round)` pairs from `origin`, origin included.
///
/// Explicit work-stack rather than recursion: the pair universe is
/// `n * rounds`, and a visited check before each push bounds the stack.
fn causal_history_of(dag: &Dag, origin: VertexId) -> HashSet<VertexId> {
    let mut history = HashSet::new();
    history.insert(origin);
    let mut stack = vec![origin];

    while let Some(current) = stack.pop() {
        if current.round == 0 {
            continue;
        }
        for &edge in &dag.vertex(current).strong_edges {
            let next = VertexId::new(edge, current.round - 1);
            if history.insert(next) {
                stack.push(next);
            }
        }
    }
    history
}
