//! Ring elements in the standard and NTT domains
//!
//! [`Polynomial`] and [`NttPolynomial`] share a representation (256 signed
//! coefficients) but are distinct types, so pointwise multiplication is only
//! reachable in the NTT domain and the transform direction is always explicit.
//! Coefficients may leave the canonical range between operations; `reduce`
//! brings them back to the centered Barrett range.

use core::fmt;
use core::marker::PhantomData;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::compress::compress;
use super::ntt::{basemul, inv_ntt, ntt};
use super::params::{Modulus, NttModulus, N};
use super::reduce::{barrett_reduce, fqmul, to_unsigned};
use super::serialize::{bytes_required, pack_bits, unpack_bits};

/// Bytes of a full-precision (12-bit) encoding.
pub const POLY_BYTES: usize = bytes_required(12, N);

/// Bytes of a one-bit-per-coefficient message.
pub const MESSAGE_BYTES: usize = N / 8;

macro_rules! impl_ring_element {
    ($name:ident, $domain:literal) => {
        impl<M: Modulus> $name<M> {
            /// The zero element
            pub fn zero() -> Self {
                Self::from_coeffs([0; N])
            }

            /// Wrap raw coefficients
            pub fn from_coeffs(coeffs: [i16; N]) -> Self {
                Self {
                    coeffs,
                    _marker: PhantomData,
                }
            }

            /// Coefficient view
            pub fn coeffs(&self) -> &[i16; N] {
                &self.coeffs
            }

            /// Mutable coefficient view
            pub fn coeffs_mut(&mut self) -> &mut [i16; N] {
                &mut self.coeffs
            }

            /// Coefficient-wise sum, not reduced
            pub fn add(&self, other: &Self) -> Self {
                let mut r = self.clone();
                r.add_assign(other);
                r
            }

            /// Coefficient-wise difference, not reduced
            pub fn sub(&self, other: &Self) -> Self {
                let mut r = self.clone();
                for (a, b) in r.coeffs.iter_mut().zip(other.coeffs.iter()) {
                    *a -= *b;
                }
                r
            }

            /// In-place coefficient-wise sum, not reduced
            pub fn add_assign(&mut self, other: &Self) {
                for (a, b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
                    *a += *b;
                }
            }
        }

        impl<M: NttModulus> $name<M> {
            /// Barrett-reduce every coefficient into the centered range
            pub fn reduce(&mut self) {
                for c in self.coeffs.iter_mut() {
                    *c = barrett_reduce::<M>(*c);
                }
            }
        }

        impl<M: Modulus> Clone for $name<M> {
            fn clone(&self) -> Self {
                Self::from_coeffs(self.coeffs)
            }
        }

        impl<M: Modulus> PartialEq for $name<M> {
            fn eq(&self, other: &Self) -> bool {
                self.coeffs == other.coeffs
            }
        }

        impl<M: Modulus> Eq for $name<M> {}

        impl<M: Modulus> Default for $name<M> {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<M: Modulus> Zeroize for $name<M> {
            fn zeroize(&mut self) {
                self.coeffs.zeroize();
            }
        }

        impl<M: Modulus> Drop for $name<M> {
            fn drop(&mut self) {
                self.zeroize();
            }
        }

        impl<M: Modulus> ZeroizeOnDrop for $name<M> {}

        impl<M: Modulus> fmt::Debug for $name<M> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("domain", &$domain)
                    .finish_non_exhaustive()
            }
        }
    };
}

/// A ring element in the standard (coefficient) domain
pub struct Polynomial<M: Modulus> {
    coeffs: [i16; N],
    _marker: PhantomData<M>,
}

/// A ring element in the NTT domain: 128 residues modulo `X^2 - ζ_i`
pub struct NttPolynomial<M: Modulus> {
    coeffs: [i16; N],
    _marker: PhantomData<M>,
}

impl_ring_element!(Polynomial, "standard");
impl_ring_element!(NttPolynomial, "ntt");

impl<M: NttModulus> Polynomial<M> {
    /// Forward transform followed by a reduction pass.
    ///
    /// Coefficients must satisfy `|x| < Q`.
    pub fn ntt(&self) -> NttPolynomial<M> {
        let mut r = NttPolynomial::from_coeffs(self.coeffs);
        ntt::<M>(&mut r.coeffs);
        r.reduce();
        r
    }

    /// Map each message bit to `0` or `(Q + 1) / 2`, branch-free.
    pub fn from_message(msg: &[u8; MESSAGE_BYTES]) -> Self {
        let half = (M::Q + 1) / 2;
        let mut r = Self::zero();
        for (i, c) in r.coeffs.iter_mut().enumerate() {
            let bit = ((msg[i / 8] >> (i % 8)) & 1) as i16;
            *c = bit.wrapping_neg() & half;
        }
        r
    }

    /// Round every coefficient to one bit. Coefficients must be reduced.
    pub fn to_message(&self) -> [u8; MESSAGE_BYTES] {
        let mut bits = [0u16; N];
        for (b, &c) in bits.iter_mut().zip(self.coeffs.iter()) {
            *b = compress::<M>(to_unsigned::<M>(c), 1);
        }
        let mut msg = [0u8; MESSAGE_BYTES];
        pack_bits(&bits, 1, &mut msg);
        bits.zeroize();
        msg
    }
}

impl<M: NttModulus> NttPolynomial<M> {
    /// Inverse transform; the result is multiplied by `R^2 / 128` as
    /// described in [`crate::poly::ntt`].
    pub fn inv_ntt(&self) -> Polynomial<M> {
        let mut r = Polynomial::from_coeffs(self.coeffs);
        inv_ntt::<M>(&mut r.coeffs);
        r
    }

    /// Residue-wise product `self ∘ other` (carries a factor `R^-1`)
    pub fn basemul(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        basemul::<M>(&mut r.coeffs, &self.coeffs, &other.coeffs);
        r
    }

    /// `self += a ∘ b`, not reduced
    pub fn mul_acc(&mut self, a: &Self, b: &Self) {
        let prod = a.basemul(b);
        self.add_assign(&prod);
    }

    /// Multiply every coefficient by `R` (enter the Montgomery domain)
    pub fn to_mont(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = fqmul::<M>(*c, M::MONT_R2);
        }
    }

    /// Full-precision 12-bit encoding into `out` ([`POLY_BYTES`] long).
    /// Coefficients must satisfy `|x| < Q`.
    pub fn to_bytes(&self, out: &mut [u8]) {
        let mut t = [0u16; N];
        for (u, &c) in t.iter_mut().zip(self.coeffs.iter()) {
            *u = to_unsigned::<M>(c);
        }
        pack_bits(&t, 12, out);
        t.zeroize();
    }

    /// Decode a 12-bit encoding of [`POLY_BYTES`] bytes. Values up to 4095
    /// are passed through unchanged; callers that need canonical input
    /// validate separately.
    pub fn from_bytes(input: &[u8]) -> Self {
        let mut t = [0u16; N];
        unpack_bits(input, 12, &mut t);
        let mut r = Self::zero();
        for (c, &u) in r.coeffs.iter_mut().zip(t.iter()) {
            *c = u as i16;
        }
        t.zeroize();
        r
    }
}
