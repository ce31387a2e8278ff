//! Core entities for Fair Ordering

use super::value_objects::{Protocol, ReplicaId, RoundId, TxId, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A transaction with one observed delivery timestamp per replica.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, dense within a batch.
    pub id: TxId,
    /// Time the client sent the transaction.
    pub send_time: f64,
    /// Delivery timestamp observed by each replica (length = replica count).
    pub delivery_times: Vec<f64>,
    /// Mean of the delivery timestamps at construction time.
    pub average_delivery_time: f64,
    /// 1-based rank after sorting a batch by average delivery time.
    pub delivery_rank: Option<u64>,
    /// Index in the committed order; `None` until a run commits.
    pub final_position: Option<usize>,
}

impl Transaction {
    pub fn new(id: TxId, send_time: f64, delivery_times: Vec<f64>) -> Self {
        let average_delivery_time = mean(&delivery_times);
        Self {
            id,
            send_time,
            delivery_times,
            average_delivery_time,
            delivery_rank: None,
            final_position: None,
        }
    }

    /// Number of replicas this transaction carries observations for.
    pub fn replica_count(&self) -> usize {
        self.delivery_times.len()
    }

    /// Overwrite one replica's observation. This is the fault-injection
    /// hook; nothing else may mutate `delivery_times`. The stored average
    /// deliberately keeps reflecting the honest observations.
    pub fn inject_delivery_time(&mut self, replica: ReplicaId, time: f64) {
        self.delivery_times[replica] = time;
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sort a batch by average delivery time and assign 1-based delivery ranks.
///
/// The rank order serves as the fair reference order downstream consumers
/// compare a committed order against.
pub fn rank_by_average_delivery(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| {
        a.average_delivery_time
            .partial_cmp(&b.average_delivery_time)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (idx, tx) in transactions.iter_mut().enumerate() {
        tx.delivery_rank = Some(idx as u64 + 1);
    }
}

/// One replica's slot in one round of the DAG.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DagVertex {
    pub id: VertexId,
    /// `(transaction, delivery time at this replica)` pairs assigned to this
    /// slot, in the replica's observed delivery order.
    pub entries: Vec<(TxId, f64)>,
    /// `2f+1` distinct replica indices pointing at the previous round.
    /// Empty at round 0 (there is nothing earlier to reference).
    pub strong_edges: Vec<ReplicaId>,
    pub is_leader: bool,
    /// Vertices reachable by backward strong-edge traversal. Populated only
    /// for leader vertices, in a single resolution pass.
    pub causal_history: HashSet<VertexId>,
}

impl DagVertex {
    pub fn new(id: VertexId, entries: Vec<(TxId, f64)>, strong_edges: Vec<ReplicaId>) -> Self {
        Self {
            id,
            entries,
            strong_edges,
            is_leader: false,
            causal_history: HashSet::new(),
        }
    }
}

/// The full `replicas x rounds` vertex grid for one run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dag {
    replicas: usize,
    rounds: usize,
    /// Indexed `[replica][round]`.
    vertices: Vec<Vec<DagVertex>>,
}

impl Dag {
    pub fn new(vertices: Vec<Vec<DagVertex>>) -> Self {
        let replicas = vertices.len();
        let rounds = vertices.first().map(|row| row.len()).unwrap_or(0);
        Self {
            replicas,
            rounds,
            vertices,
        }
    }

    pub fn replicas(&self) -> usize {
        self.replicas
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn vertex(&self, id: VertexId) -> &DagVertex {
        &self.vertices[id.replica][id.round]
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> &mut DagVertex {
        &mut self.vertices[id.replica][id.round]
    }

    /// Leader vertex IDs in ascending round order.
    pub fn leaders(&self) -> Vec<VertexId> {
        let mut out = Vec::new();
        for round in 0..self.rounds {
            for replica in 0..self.replicas {
                if self.vertices[replica][round].is_leader {
                    out.push(VertexId::new(replica, round));
                }
            }
        }
        out
    }
}

/// Directed precedence graph over a fixed transaction universe.
///
/// Edges encode majority-voted "precedes" relations. Once present, an edge
/// is permanent, and a pair never carries both directions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DependencyGraph {
    node_count: usize,
    successors: HashMap<TxId, HashSet<TxId>>,
    edge_count: usize,
}

impl DependencyGraph {
    /// Create a graph over the dense universe `0..node_count`, edgeless.
    pub fn new(node_count: usize) -> Self {
        let successors = (0..node_count as TxId)
            .map(|id| (id, HashSet::new()))
            .collect();
        Self {
            node_count,
            successors,
            edge_count: 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Node IDs in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = TxId> {
        0..self.node_count as TxId
    }

    pub fn has_edge(&self, from: TxId, to: TxId) -> bool {
        self.successors
            .get(&from)
            .map(|succ| succ.contains(&to))
            .unwrap_or(false)
    }

    /// Whether the pair already carries an edge in either direction.
    pub fn pair_decided(&self, a: TxId, b: TxId) -> bool {
        self.has_edge(a, b) || self.has_edge(b, a)
    }

    /// Insert `from -> to` unless either endpoint falls outside the
    /// universe, it would create a self-loop, or it would contradict an
    /// existing edge on the pair. Returns whether the edge was added.
    pub fn try_add_edge(&mut self, from: TxId, to: TxId) -> bool {
        let bound = self.node_count as TxId;
        if from >= bound || to >= bound {
            return false;
        }
        if from == to || self.pair_decided(from, to) {
            return false;
        }
        self.successors.entry(from).or_default().insert(to);
        self.edge_count += 1;
        true
    }
}

/// Outcome of one ordering run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FinalOrder {
    pub protocol: Protocol,
    /// Permutation of the batch's transaction IDs; index = final position.
    pub path: Vec<TxId>,
    /// Edges the dependency graph held when the path was resolved.
    pub voted_edges: usize,
}

/// A round index hosts a leader iff it is even.
pub fn is_leader_round(round: RoundId) -> bool {
    round % 2 == 0
}
