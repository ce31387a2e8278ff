//! # FairDAG: Fair Transaction Ordering
//!
//! Computes a fair global transaction order from the local delivery orders
//! independently observed by `n` replicas. No single replica's clock is
//! trusted: precedence between two transactions is decided by majority vote
//! across a quorum of local orderings, and the resulting (possibly
//! non-transitive) precedence graph is collapsed into one total order.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (Transaction, Dag, DependencyGraph, FinalOrder)
//! - **Algorithms**: DAG construction, causal-history traversal, weighted
//!   dependency voting, tournament-path resolution, position assignment
//! - **Ports**: Inbound (FairOrderingApi) and Outbound (RandomSource)
//! - **Application**: Service orchestration for both protocol variants
//!
//! ## Protocol variants
//!
//! - `Protocol::Baseline` votes directly over raw per-replica orderings
//!   (fault bound `(n-1)/4`, quorum `f+1`).
//! - `Protocol::FairDag` routes observations through leader vertices of a
//!   round-structured DAG: each leader may only use orderings reachable
//!   through its causal history of strong edges (fault bound `(n-1)/3`,
//!   quorum `f+1` per leader, `(n-f)/2` for the final aggregate pass).

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::service::FairOrderingService;
pub use config::OrderingConfig;
pub use domain::entities::*;
pub use domain::errors::OrderingError;
pub use domain::value_objects::*;
pub use ports::inbound::FairOrderingApi;
pub use ports::outbound::RandomSource;
