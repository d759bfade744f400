//! Exit codes for the nullguard CLI. Part of the public contract.

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID_FIELDS: i32 = 1; // Document contains non-optional nulls
pub const EXIT_CONFIG_ERROR: i32 = 2; // Unreadable input, bad config, bind failure
