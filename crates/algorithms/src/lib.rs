//! Cryptographic primitives for the pqkem library
//!
//! This crate provides the building blocks of the ML-KEM construction:
//!
//! - [`keccak`]: the Keccak-f\[1600\] permutation and one generic sponge
//!   parameterized by rate and domain-separation byte
//! - [`hash`] / [`xof`]: SHA3-256, SHA3-512, SHAKE128 and SHAKE256 as thin
//!   instantiations of that sponge
//! - [`poly`]: arithmetic in `Z_q[X]/(X^256 + 1)` with Montgomery/Barrett
//!   reduction, the number-theoretic transform, the coefficient codec,
//!   compression and the two samplers
//!
//! All secret-dependent arithmetic is branch-free. The crate is usable in
//! both `std` and `no_std` environments.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Keccak permutation and sponge
pub mod keccak;
pub use keccak::{KeccakSponge, Shake128Sponge, Shake256Sponge};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha3_256, Sha3_512};

// Extendable output functions
pub mod xof;
pub use xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};

// Polynomial ring engine
pub mod poly;

// Digest and other fixed-size output types
pub mod types;
pub use types::Digest;
