//! Key-derivation variants.
//!
//! FIPS 203 and the Kyber round-3 submission run the same lattice scheme
//! but hash differently at four points. The variant is a type parameter so
//! the choice is fixed at compile time and cannot be mixed up at runtime.
//!
//! | step              | [`MlKem`]           | [`Kyber`]                   |
//! |-------------------|---------------------|-----------------------------|
//! | (ρ, σ)            | G(d ∥ K)            | G(d)                        |
//! | message           | m = randomness      | m = H(randomness)           |
//! | shared secret     | K̄                   | J(K̄ ∥ H(c))                 |
//! | rejection secret  | J(z ∥ c)            | J(z ∥ H(c))                 |

use core::fmt::Debug;

use pqkem_params::pqc::mlkem::{MLKEM_CIPHERTEXT_BYTES, MLKEM_K, MLKEM_SYM_BYTES};
use zeroize::Zeroizing;

use super::symmetric::{hash_g, hash_h, hash_j};

type Seed = Zeroizing<[u8; MLKEM_SYM_BYTES]>;

mod sealed {
    pub trait Sealed {}
}

/// Hashing choices that distinguish ML-KEM from Kyber round 3
pub trait KdfVariant: sealed::Sealed + Clone + Copy + Debug + Default + Send + Sync + 'static {
    /// Algorithm name reported by the KEM
    const NAME: &'static str;

    /// Expand the key-generation seed `d` into (ρ, σ)
    fn keygen_seeds(d: &[u8; MLKEM_SYM_BYTES]) -> (Seed, Seed);

    /// Derive the encrypted message from the encapsulation randomness
    fn encaps_message(randomness: &[u8; MLKEM_SYM_BYTES]) -> Seed;

    /// Shared secret on the accepting path
    fn shared_secret(k_bar: &[u8; MLKEM_SYM_BYTES], ct: &[u8; MLKEM_CIPHERTEXT_BYTES]) -> Seed;

    /// Pseudorandom secret on the rejecting path
    fn rejection_secret(z: &[u8; MLKEM_SYM_BYTES], ct: &[u8; MLKEM_CIPHERTEXT_BYTES]) -> Seed;
}

/// FIPS 203 ML-KEM
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MlKem;

/// Kyber round-3 key derivation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Kyber;

impl sealed::Sealed for MlKem {}
impl sealed::Sealed for Kyber {}

impl KdfVariant for MlKem {
    const NAME: &'static str = "ML-KEM-768";

    fn keygen_seeds(d: &[u8; MLKEM_SYM_BYTES]) -> (Seed, Seed) {
        hash_g(&[d, &[MLKEM_K as u8]])
    }

    fn encaps_message(randomness: &[u8; MLKEM_SYM_BYTES]) -> Seed {
        Zeroizing::new(*randomness)
    }

    fn shared_secret(k_bar: &[u8; MLKEM_SYM_BYTES], _ct: &[u8; MLKEM_CIPHERTEXT_BYTES]) -> Seed {
        Zeroizing::new(*k_bar)
    }

    fn rejection_secret(z: &[u8; MLKEM_SYM_BYTES], ct: &[u8; MLKEM_CIPHERTEXT_BYTES]) -> Seed {
        Zeroizing::new(hash_j(&[z, ct]))
    }
}

impl KdfVariant for Kyber {
    const NAME: &'static str = "Kyber768";

    fn keygen_seeds(d: &[u8; MLKEM_SYM_BYTES]) -> (Seed, Seed) {
        hash_g(&[d])
    }

    fn encaps_message(randomness: &[u8; MLKEM_SYM_BYTES]) -> Seed {
        Zeroizing::new(hash_h(&[randomness]))
    }

    fn shared_secret(k_bar: &[u8; MLKEM_SYM_BYTES], ct: &[u8; MLKEM_CIPHERTEXT_BYTES]) -> Seed {
        let ct_hash = hash_h(&[ct]);
        Zeroizing::new(hash_j(&[k_bar, &ct_hash]))
    }

    fn rejection_secret(z: &[u8; MLKEM_SYM_BYTES], ct: &[u8; MLKEM_CIPHERTEXT_BYTES]) -> Seed {
        let ct_hash = hash_h(&[ct]);
        Zeroizing::new(hash_j(&[z, &ct_hash]))
    }
}
