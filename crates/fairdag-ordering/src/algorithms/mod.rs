//! Algorithms module for Fair Ordering
//!
//! Contains:
//! - DAG construction (slot partition, strong edges, leader election)
//! - Causal-history resolution
//! - Weighted dependency-graph voting
//! - Tournament-path resolution
//! - Position assignment

pub mod causal_history;
pub mod dag_builder;
pub mod dependency_builder;
pub mod positions;
pub mod tournament;

pub use causal_history::resolve_causal_histories;
pub use dag_builder::{build_dag, leader_for_round};
pub use dependency_builder::{
    apply_dag_votes, apply_local_orderings, local_orderings_from_history, raw_local_orderings,
};
pub use positions::assign_positions;
pub use tournament::tournament_path;
