//! Error handling for the pqkem crates

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::InvalidLength {
            context: "ciphertext",
            expected: 1088,
            actual: 1087,
        };
        assert_eq!(err.to_string(), "ciphertext: invalid length (expected 1088, got 1087)");

        let err = Error::InvalidKey {
            context: "ML-KEM-768 public",
            #[cfg(feature = "std")]
            message: "not canonical".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid key: ML-KEM-768 public");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_parameter_display_carries_message() {
        let err = Error::InvalidParameter {
            context: "output_length",
            message: "must be non-zero".to_string(),
        };
        assert_eq!(err.to_string(), "output_length: must be non-zero");
    }
}
