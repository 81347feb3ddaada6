//! Deterministic, pure logic for the table view pipeline.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! records and return deterministic outputs suitable for tests.

pub mod derive;
pub mod filter;
pub mod invariants;
pub mod paginate;
pub mod sort;
pub mod state_update;
pub mod store;
pub mod types;
