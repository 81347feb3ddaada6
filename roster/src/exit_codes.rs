//! Stable exit codes for roster CLI commands.

/// Command succeeded and the view has at least one row.
pub const OK: i32 = 0;
/// Command failed due to invalid config, arguments, or a strict source failure.
pub const INVALID: i32 = 1;
/// `roster view` produced no visible rows (empty source or nothing matched).
pub const EMPTY: i32 = 2;
