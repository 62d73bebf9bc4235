//! SHAKE extendable output functions
//!
//! Incremental SHAKE128/SHAKE256 sessions: absorb any number of times, then
//! squeeze any number of times. The concatenation of all squeezed outputs
//! equals a single squeeze of the combined length.

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};
use zeroize::Zeroize;

use super::{ExtendableOutputFunction, Shake128Algorithm, Shake256Algorithm, XofAlgorithm};
use crate::error::{validate, Result};
use crate::keccak::{Shake128Sponge, Shake256Sponge};

use pqkem_common::security::barrier;

/// SHAKE-128 extendable output function with secure memory handling
#[derive(Clone, Debug, Default)]
pub struct ShakeXof128 {
    sponge: Shake128Sponge,
}

/// SHAKE-256 extendable output function with secure memory handling
#[derive(Clone, Debug, Default)]
pub struct ShakeXof256 {
    sponge: Shake256Sponge,
}

macro_rules! impl_shake_xof {
    ($name:ident, $sponge:ty, $alg:ty) => {
        impl $name {
            /// Create a session that has already absorbed `data`.
            pub fn with_input(data: &[u8]) -> Self {
                let mut sponge = <$sponge>::new();
                sponge.absorb_final(data);
                Self { sponge }
            }

            /// Whether output has already been requested
            pub fn is_squeezing(&self) -> bool {
                self.sponge.is_squeezing()
            }
        }

        impl ExtendableOutputFunction for $name {
            fn new() -> Self {
                Self {
                    sponge: <$sponge>::new(),
                }
            }

            fn update(&mut self, data: &[u8]) -> Result<()> {
                self.sponge.absorb(data)
            }

            fn finalize(&mut self) -> Result<()> {
                self.sponge.absorb_final(&[]);
                Ok(())
            }

            fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
                validate::parameter(
                    !output.is_empty(),
                    "output_length",
                    "Output buffer must not be empty",
                )?;
                self.sponge.squeeze(output);
                barrier::compiler_fence_seq_cst();
                Ok(())
            }

            #[cfg(feature = "alloc")]
            fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>> {
                validate::parameter(len > 0, "output_length", "Output length must be greater than 0")?;

                let mut v = vec![0u8; len];
                self.squeeze(&mut v)?;
                Ok(v)
            }

            fn reset(&mut self) -> Result<()> {
                self.sponge.reset();
                Ok(())
            }

            fn security_level() -> usize {
                <$alg as XofAlgorithm>::SECURITY_LEVEL
            }
        }

        impl Zeroize for $name {
            fn zeroize(&mut self) {
                self.sponge.zeroize();
            }
        }
    };
}

impl_shake_xof!(ShakeXof128, Shake128Sponge, Shake128Algorithm);
impl_shake_xof!(ShakeXof256, Shake256Sponge, Shake256Algorithm);
