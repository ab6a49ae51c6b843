//! Exit codes for atelierctl
//!
//! One code per failure class so scripts can tell a configuration problem
//! from a failed generation run.

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when no API key is configured
pub const EXIT_NO_API_KEY: i32 = 64;

/// Exit code when a generation run ends in the error phase
pub const EXIT_GENERATION_FAILED: i32 = 65;
