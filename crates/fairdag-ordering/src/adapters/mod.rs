//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound port traits.

mod random;

pub use random::SeededRandom;
