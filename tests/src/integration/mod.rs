//! Cross-crate integration tests

pub mod fairness;
pub mod pipeline;
