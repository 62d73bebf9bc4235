//! Deterministic samplers for ring elements
//!
//! Both samplers are pure functions of their byte input: uniform sampling
//! pulls from a SHAKE128 session that the caller seeded with `ρ ∥ j ∥ i`, and
//! centered-binomial sampling consumes one PRF output.

use pqkem_internal::endian::{u24_from_le_bytes, u32_from_le_bytes};
use pqkem_params::utils::hash::SHAKE128_RATE;
use zeroize::Zeroize;

use super::params::{Modulus, N};
use super::polynomial::{NttPolynomial, Polynomial};
use crate::keccak::Shake128Sponge;

/// PRF output consumed by [`sample_cbd_eta2`]: `64·η` bytes with η = 2.
pub const CBD_ETA2_BYTES: usize = 64 * 2;

/// Rejection-sample a uniformly random NTT-domain element from `xof`.
///
/// The sponge is squeezed one rate-sized block at a time until 256
/// candidates below `Q` have been accepted. Only public seeds feed this
/// sampler, so the data-dependent loop count leaks nothing.
pub fn sample_uniform<M: Modulus>(xof: &mut Shake128Sponge) -> NttPolynomial<M> {
    let mut r = NttPolynomial::zero();
    let mut block = [0u8; SHAKE128_RATE];
    let mut ctr = 0;
    while ctr < N {
        xof.squeeze(&mut block);
        ctr += rej_uniform::<M>(&mut r.coeffs_mut()[ctr..], &block);
    }
    r
}

/// Parse 12-bit candidates from `buf`, keeping those below `Q`.
///
/// Returns the number of coefficients written to `r`.
fn rej_uniform<M: Modulus>(r: &mut [i16], buf: &[u8]) -> usize {
    let mut ctr = 0;
    for chunk in buf.chunks_exact(3) {
        if ctr == r.len() {
            break;
        }
        let w = u24_from_le_bytes(chunk);
        let d1 = (w & 0xFFF) as i16;
        let d2 = (w >> 12) as i16;

        if d1 < M::Q {
            r[ctr] = d1;
            ctr += 1;
        }
        if d2 < M::Q && ctr < r.len() {
            r[ctr] = d2;
            ctr += 1;
        }
    }
    ctr
}

/// Sample from the centered binomial distribution with η = 2.
///
/// Each coefficient is `(a0 + a1) - (b0 + b1)` for four consecutive input
/// bits, counted eight coefficients at a time per 32-bit word.
pub fn sample_cbd_eta2<M: Modulus>(buf: &[u8; CBD_ETA2_BYTES]) -> Polynomial<M> {
    let mut r = Polynomial::zero();
    for (word, coeffs) in buf.chunks_exact(4).zip(r.coeffs_mut().chunks_exact_mut(8)) {
        let mut t = u32_from_le_bytes(word);
        let mut d = (t & 0x5555_5555) + ((t >> 1) & 0x5555_5555);
        for (j, c) in coeffs.iter_mut().enumerate() {
            let a = ((d >> (4 * j)) & 0x3) as i16;
            let b = ((d >> (4 * j + 2)) & 0x3) as i16;
            *c = a - b;
        }
        t.zeroize();
        d.zeroize();
    }
    r
}
