//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! | Code | Meaning                                         |
//! |------|-------------------------------------------------|
//! | 0    | Success (validation ran and found no errors)    |
//! | 1    | General error (unspecified)                     |
//! | 2    | CLI usage error (bad args, bad cell reference)  |
//! | 3    | Validation errors found (like `diff(1)` exit 1) |
//! | 4    | Input could not be read or parsed               |

/// Success - command completed, data is clean.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, malformed cell reference.
pub const EXIT_USAGE: u8 = 2;

/// Validation found errors. The command itself succeeded;
/// the data does not conform to the schema.
pub const EXIT_INVALID: u8 = 3;

/// Parse error - input file or schema file unreadable or malformed.
pub const EXIT_PARSE: u8 = 4;
