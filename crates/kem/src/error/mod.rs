//! Error handling for KEM operations
//!
//! Errors only arise at the byte boundary: converting a slice of the wrong
//! length into a key or ciphertext, or rejecting a key that fails its
//! structural check. Decapsulation of a well-sized ciphertext never errors.

use core::fmt;

use pqkem_algorithms::error::Error as PrimitiveError;
use pqkem_api::error::Error as CoreError;

/// Error type for KEM operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Primitive error, including slice length mismatches
    Primitive(PrimitiveError),

    /// Key failed a structural check
    InvalidKey {
        /// Which key was rejected
        key_type: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidKey { key_type, reason } => {
                #[cfg(not(feature = "std"))]
                let _ = reason;
                CoreError::InvalidKey {
                    context: key_type,
                    #[cfg(feature = "std")]
                    message: reason.to_string(),
                }
            }
        }
    }
}

pub mod validate;
