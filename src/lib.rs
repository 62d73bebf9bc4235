//! # pqkem
//!
//! A pure Rust ML-KEM-768 / Kyber-768 key encapsulation core.
//!
//! ## Usage
//!
//! ```
//! use pqkem::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let keypair = MlKem768::keypair(&mut OsRng).unwrap();
//! let (ct, ss_sender) = MlKem768::encapsulate(&mut OsRng, keypair.public_key()).unwrap();
//! let ss_recipient = MlKem768::decapsulate(keypair.secret_key(), &ct).unwrap();
//! assert_eq!(ss_sender, ss_recipient);
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls, string error messages, OS randomness
//! - `alloc`: `Vec`-returning helpers such as `squeeze_into_vec`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `pqkem-params`: every size and ring constant
//! - `pqkem-internal`: constant-time comparison and selection
//! - `pqkem-common`: zeroizing secret containers
//! - `pqkem-api`: the error type and the `Kem` / `Serialize` traits
//! - `pqkem-algorithms`: Keccak, SHA-3/SHAKE and the polynomial ring engine
//! - `pqkem-kem`: the IND-CPA scheme, the FO transform and the typed KEM
//!
//! `rand`, `subtle` and `zeroize` are re-exported so callers can name the
//! RNG bounds, compare shared secrets with `ConstantTimeEq` and hold
//! `Zeroizing` buffers without adding their own dependency.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use pqkem_algorithms as algorithms;
pub use pqkem_api as api;
pub use pqkem_common as common;
pub use pqkem_internal as internal;
pub use pqkem_kem as kem;
pub use pqkem_params as params;

// Crates whose types appear in the public API
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for pqkem users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Kem, Serialize, SerializeSecret};

    // The two parameter-set aliases and their key types
    pub use crate::kem::{
        Kyber768, MlKem768, MlKemCiphertext, MlKemKeyPair, MlKemPublicKey, MlKemSecretKey,
        MlKemSharedSecret,
    };

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer};
}
