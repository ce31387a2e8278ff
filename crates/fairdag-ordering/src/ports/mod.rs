//! Ports module for Fair Ordering
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::FairOrderingApi;
pub use outbound::RandomSource;
