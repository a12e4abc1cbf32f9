//! Exit codes for the CLI

/// Rendered changelog missing or out of date
pub const OUT_OF_SYNC: i32 = 1;

/// The changelog document failed to load or validate
pub const VALIDATION_ERROR: i32 = 2;
