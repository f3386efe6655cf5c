//! # ALU Tests
//!
//! Deterministic edge-case vectors for the fused ALU/branch unit, organized
//! by operation category.
