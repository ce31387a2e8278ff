//! Tournament Resolver
//!
//! Collapses the (possibly incomplete, possibly non-transitive) precedence
//! graph into one total order by ordered insertion. On a complete acyclic
//! tournament this yields the unique Hamiltonian path; with missing edges
//! or vote cycles it is a best-effort consistent linearization, which is
//! accepted behavior rather than an error.

use crate::domain::entities::DependencyGraph;
use crate::domain::value_objects::TxId;

/// Resolve a total order over the graph's full node universe.
///
/// The path is seeded with the largest ID; remaining nodes are taken in
/// descending ID order and each is inserted immediately before the first
/// path element that holds no committed precedence over it (any element
/// with an edge into the node must stay ahead of it). On a complete
/// tournament that position is exactly the first element the node
/// precedes; on an edgeless graph nothing holds precedence, so every node
/// lands at the front and the canonical result is ascending IDs.
pub fn tournament_path(graph: &DependencyGraph) -> Vec<TxId> {
    let mut nodes: Vec<TxId> = graph.nodes().collect();
    let Some(seed) = nodes.pop() else {
        return Vec::new();
    };

    let mut path = vec![seed];
    for &node in nodes.iter().rev() {
        let slot = path.iter().position(|&c| !graph.has_edge(c, node));
        match slot {
            Some(idx) => path.insert(idx, node),
            None => path.push(node),
        }
    }
    path
}
