//! Command implementations.

/// Convert-and-send command handler.
pub mod convert;
