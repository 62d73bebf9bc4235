//! Fixed-size output types
//!
//! Hash outputs carry their size in the type so that a SHA3-256 digest can
//! never be passed where a SHA3-512 digest is expected.

pub mod digest;

pub use digest::Digest;

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}

/// Trait for types that have a fixed size
pub trait FixedSize {
    /// Get the size in bytes
    fn size() -> usize;
}
