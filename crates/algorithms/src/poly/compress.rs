//! Lossy coefficient compression
//!
//! `compress_d(x) = round(2^d · x / q) mod 2^d` and
//! `decompress_d(y) = round(q · y / 2^d)`. The division by `2q` is replaced by
//! a multiply-and-shift that is exact over the whole input domain, so the
//! running time does not depend on `x`.

use zeroize::Zeroize;

use super::params::{Modulus, NttModulus, N};
use super::polynomial::Polynomial;
use super::reduce::to_unsigned;
use super::serialize::{pack_bits, unpack_bits};

/// Compress a canonical coefficient `x ∈ [0, Q)` to `d` bits, `1 <= d <= 12`.
#[inline(always)]
pub fn compress<M: Modulus>(x: u16, d: u32) -> u16 {
    let n = ((x as u64) << (d + 1)) + M::Q as u64;
    (((n * M::DIV_2Q_MUL) >> M::DIV_2Q_SHIFT) as u16) & ((1u16 << d) - 1)
}

/// Map a `d`-bit value back to a coefficient in `[0, Q)`.
#[inline(always)]
pub fn decompress<M: Modulus>(y: u16, d: u32) -> u16 {
    ((y as u32 * M::Q as u32 * 2 + (1 << d)) >> (d + 1)) as u16
}

/// Compress every coefficient of a reduced polynomial to `d` bits and pack
/// the result into `out` (`32·d` bytes).
pub fn compress_poly<M: NttModulus>(p: &Polynomial<M>, d: u32, out: &mut [u8]) {
    let mut t = [0u16; N];
    for (u, &c) in t.iter_mut().zip(p.coeffs().iter()) {
        *u = compress::<M>(to_unsigned::<M>(c), d);
    }
    pack_bits(&t, d, out);
    t.zeroize();
}

/// Unpack `d`-bit values from `input` and decompress them.
pub fn decompress_poly<M: Modulus>(input: &[u8], d: u32) -> Polynomial<M> {
    let mut t = [0u16; N];
    unpack_bits(input, d, &mut t);
    let mut r = Polynomial::zero();
    for (c, &u) in r.coeffs_mut().iter_mut().zip(t.iter()) {
        *c = decompress::<M>(u, d) as i16;
    }
    t.zeroize();
    r
}
