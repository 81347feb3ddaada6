//! Filterable, sortable, paginated view over a fixed set of person records.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic pipeline stages (store, filter, sort,
//!   paginate) and the state transitions that drive them. No I/O.
//! - **[`io`]**: Side-effecting adapters (record source file, config, rendering).
//!
//! [`controller::ViewController`] ties the core stages into one session that
//! recomputes the visible page after every user action.

pub mod browse;
pub mod controller;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod record;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
