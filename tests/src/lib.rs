//! # FairDAG Test Suite
//!
//! Unified cross-crate tests:
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── pipeline.rs   # full ordering runs, both protocol variants
//!     └── fairness.rs   # biased-leader scenarios + evaluation metrics
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p fairdag-tests
//! cargo test -p fairdag-tests integration::
//! ```

pub mod integration;
