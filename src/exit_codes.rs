//! Exit code constants for the tfprompt CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, config, I/O)
//! - 2: Catalog lookup failed (unknown variant or operation)
//! - 3: A required slot was not supplied
//! - 4: A template contains a syntax error

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or a failed read/write.
pub const USER_ERROR: i32 = 1;

/// The requested variant/operation pair is not in the catalog.
pub const NOT_FOUND: i32 = 2;

/// A slot referenced by the template had no value.
pub const MISSING_PARAMETER: i32 = 3;

/// A template could not be parsed.
pub const TEMPLATE_FAILURE: i32 = 4;
