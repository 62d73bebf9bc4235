//! SHA-3 hash functions (FIPS 202)

use zeroize::Zeroize;

use pqkem_params::utils::hash::{
    SHA3_256_OUTPUT_SIZE, SHA3_256_RATE, SHA3_512_OUTPUT_SIZE, SHA3_512_RATE, SHA3_DELIMITER,
};

use crate::error::Result;
use crate::hash::{HashAlgorithm, HashFunction};
use crate::keccak::KeccakSponge;
use crate::types::Digest;

// ──────────────────────── marker algorithm types ──────────────────────────

/// Marker type for **SHA3-256**.
pub enum Sha3_256Algorithm {}
/// Marker type for **SHA3-512**.
pub enum Sha3_512Algorithm {}

impl HashAlgorithm for Sha3_256Algorithm {
    const OUTPUT_SIZE: usize = SHA3_256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA3_256_RATE;
    const ALGORITHM_ID: &'static str = "SHA3-256";
}
impl HashAlgorithm for Sha3_512Algorithm {
    const OUTPUT_SIZE: usize = SHA3_512_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA3_512_RATE;
    const ALGORITHM_ID: &'static str = "SHA3-512";
}

// ──────────────────────────── engine structs ──────────────────────────────

/// Streaming **SHA3-256** engine.
#[derive(Clone, Debug, Default)]
pub struct Sha3_256 {
    sponge: KeccakSponge<SHA3_256_RATE, SHA3_DELIMITER>,
}

/// Streaming **SHA3-512** engine.
#[derive(Clone, Debug, Default)]
pub struct Sha3_512 {
    sponge: KeccakSponge<SHA3_512_RATE, SHA3_DELIMITER>,
}

// ─────────────────────── shared engine-helper macro ───────────────────────

macro_rules! impl_sha3_variant {
    ($name:ident, $rate:expr, $out:expr, $alg:ty) => {
        impl $name {
            /// Hash the concatenation of `inputs` into a fixed-size array.
            ///
            /// Used for `H(pk)` and `G(m ∥ h)` without building the
            /// concatenation in memory.
            pub fn hash_concat(inputs: &[&[u8]]) -> [u8; $out] {
                let mut out = [0u8; $out];
                KeccakSponge::<$rate, SHA3_DELIMITER>::digest(inputs, &mut out);
                out
            }
        }

        impl HashFunction for $name {
            type Algorithm = $alg;
            type Output = Digest<$out>;

            fn new() -> Self {
                Self {
                    sponge: KeccakSponge::new(),
                }
            }

            fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
                self.sponge.absorb(data)?;
                Ok(self)
            }

            fn finalize(&mut self) -> Result<Self::Output> {
                let mut d = [0u8; $out];
                self.sponge.absorb_final(&[]);
                self.sponge.squeeze(&mut d);
                self.sponge.reset();
                Ok(Digest::new(d))
            }
        }

        impl Zeroize for $name {
            fn zeroize(&mut self) {
                self.sponge.reset();
            }
        }
    };
}

impl_sha3_variant!(Sha3_256, SHA3_256_RATE, SHA3_256_OUTPUT_SIZE, Sha3_256Algorithm);
impl_sha3_variant!(Sha3_512, SHA3_512_RATE, SHA3_512_OUTPUT_SIZE, Sha3_512Algorithm);
