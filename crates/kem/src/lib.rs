//! Key Encapsulation Mechanisms
//!
//! This crate implements the module-lattice KEM standardized as ML-KEM
//! (FIPS 203) at the 768 parameter set, together with the Kyber round-3
//! key derivation that preceded it. Both variants share one IND-CPA scheme
//! and one Fujisaki-Okamoto transform; they differ only in how the seed,
//! message and shared secret are hashed.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod mlkem;

// Re-exports
pub use error::{Error, Result};
pub use mlkem::{
    Kyber, Kyber768, MlKem, MlKem768, MlKemCiphertext, MlKemKem, MlKemKeyPair, MlKemPublicKey,
    MlKemSecretKey, MlKemSharedSecret,
};
