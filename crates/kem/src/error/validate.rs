//! Validation utilities for KEM operations

use super::{Error, Result};

/// Validate key format
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { key_type, reason });
    }
    Ok(())
}

/// Validate that a byte slice has exactly the expected length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    pqkem_algorithms::error::validate::length(context, actual, expected).map_err(Error::from)
}
