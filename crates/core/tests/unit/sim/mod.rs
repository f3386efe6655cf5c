//! Simulation Layer Tests.

/// Image reading, format sniffing, and placement errors.
pub mod loader;
