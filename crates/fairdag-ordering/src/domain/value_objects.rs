//! Value objects for Fair Ordering

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Transaction identifier. The node universe is dense: a batch of `t`
/// transactions carries the IDs `0..t`.
pub type TxId = u64;

/// Replica index in `0..n`.
pub type ReplicaId = usize;

/// Round index in `0..rounds`.
pub type RoundId = usize;

/// Identifies one DAG vertex: the slot of one replica in one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId {
    pub replica: ReplicaId,
    pub round: RoundId,
}

impl VertexId {
    pub fn new(replica: ReplicaId, round: RoundId) -> Self {
        Self { replica, round }
    }
}

/// Which fair-ordering protocol variant to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Protocol {
    /// Vote directly over raw per-replica orderings (fault bound `(n-1)/4`).
    Baseline,
    /// Route observations through DAG leader causal histories
    /// (fault bound `(n-1)/3`).
    FairDag,
}

impl Protocol {
    /// Maximum number of faulty replicas tolerated by this variant.
    pub fn fault_bound(&self, replicas: usize) -> usize {
        match self {
            Protocol::Baseline => (replicas - 1) / 4,
            Protocol::FairDag => (replicas - 1) / 3,
        }
    }
}

/// One replica's view of delivery order: transaction ID to dense 1-based rank.
///
/// Ranks are only ever compared within the same ordering, so the base is a
/// convention, not a requirement. A transaction absent from the map was not
/// visible to this replica (or to the causal history the ordering was
/// derived from).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalOrdering {
    ranks: HashMap<TxId, u64>,
}

impl LocalOrdering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from IDs already sorted into delivery order.
    pub fn from_sorted_ids<I: IntoIterator<Item = TxId>>(ids: I) -> Self {
        let ranks = ids
            .into_iter()
            .enumerate()
            .map(|(idx, id)| (id, idx as u64 + 1))
            .collect();
        Self { ranks }
    }

    pub fn insert(&mut self, id: TxId, rank: u64) {
        self.ranks.insert(id, rank);
    }

    pub fn rank(&self, id: TxId) -> Option<u64> {
        self.ranks.get(&id).copied()
    }

    pub fn contains(&self, id: TxId) -> bool {
        self.ranks.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = TxId> + '_ {
        self.ranks.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
