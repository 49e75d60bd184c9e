//! Application-wide constants.

/// The binary name of the application (used in usage messages).
pub const APP_BINARY_NAME: &str = "keymapdoc";
