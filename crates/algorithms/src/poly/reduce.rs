//! Branch-free modular reduction
//!
//! All functions are fixed-latency integer arithmetic with no data-dependent
//! branches or table lookups.

use super::params::{Modulus, NttModulus};

/// Montgomery reduction: for `|a| < Q·2^15` returns `r ≡ a·2^-16 (mod Q)`
/// with `|r| < Q`.
#[inline(always)]
pub fn montgomery_reduce<M: NttModulus>(a: i32) -> i16 {
    let t = (a as i16).wrapping_mul(M::Q_INV);
    ((a - (t as i32) * (M::Q as i32)) >> 16) as i16
}

/// Barrett reduction into the centered range `{-(Q-1)/2, …, (Q-1)/2}`.
#[inline(always)]
pub fn barrett_reduce<M: NttModulus>(a: i16) -> i16 {
    let t = ((M::BARRETT_V * a as i32 + (1 << 25)) >> 26) as i16;
    a.wrapping_sub(t.wrapping_mul(M::Q))
}

/// Montgomery multiplication: `a·b·2^-16 mod Q`.
#[inline(always)]
pub fn fqmul<M: NttModulus>(a: i16, b: i16) -> i16 {
    montgomery_reduce::<M>(a as i32 * b as i32)
}

/// Map `a ∈ (-Q, Q)` to its representative in `[0, Q)` without branching.
#[inline(always)]
pub fn to_unsigned<M: Modulus>(a: i16) -> u16 {
    (a + ((a >> 15) & M::Q)) as u16
}
