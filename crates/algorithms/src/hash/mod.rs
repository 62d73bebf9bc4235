//! Fixed-output hash functions
//!
//! SHA3-256 (`H`) and SHA3-512 (`G`) are the only fixed-output hashes the
//! ML-KEM construction needs. Both are thin instantiations of the shared
//! [`KeccakSponge`](crate::keccak::KeccakSponge).

use crate::error::Result;

pub mod sha3;

pub use sha3::{Sha3_256, Sha3_256Algorithm, Sha3_512, Sha3_512Algorithm};

/// Type-level constants describing a hash algorithm
pub trait HashAlgorithm {
    /// Output size in bytes
    const OUTPUT_SIZE: usize;

    /// Block (rate) size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm identifier
    const ALGORITHM_ID: &'static str;
}

/// Trait for streaming hash functions
pub trait HashFunction: Sized {
    /// Algorithm marker carrying the constants
    type Algorithm: HashAlgorithm;

    /// Fixed-size output type
    type Output: AsRef<[u8]> + Clone;

    /// Create a new hash instance
    fn new() -> Self;

    /// Feed more data into the hash
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Produce the digest and reset the instance for reuse
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Convenience method to hash `data` in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut h = Self::new();
        h.update(data)?;
        h.finalize()
    }

    /// Output size in bytes
    fn output_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::OUTPUT_SIZE
    }

    /// Block size in bytes
    fn block_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> &'static str {
        <Self::Algorithm as HashAlgorithm>::ALGORITHM_ID
    }
}
