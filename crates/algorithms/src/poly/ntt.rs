//! Number-theoretic transform over `Z_q[X]/(X^256 + 1)`
//!
//! The forward transform is seven layers of Cooley–Tukey butterflies with
//! lengths 128 down to 2, one twiddle per butterfly group taken in order from
//! the bit-reversed table. It stops one layer short of a full diagonalization:
//! the output is 128 residues modulo `X^2 - ζ_i`, which is why products are
//! computed pairwise by [`basemul`].
//!
//! ## Montgomery bookkeeping
//! - `ntt` leaves values unscaled (twiddles carry their own factor `R`).
//! - `basemul` introduces a factor `R^-1`.
//! - `inv_ntt` multiplies by `R^2 / 128`, so `inv_ntt(basemul(ntt a, ntt b))`
//!   is exactly `a·b` and `inv_ntt(ntt e)` is `e·R`.

use super::params::{NttModulus, N};
use super::reduce::{barrett_reduce, fqmul};

/// In-place forward NTT.
///
/// Input coefficients must satisfy `|x| < Q`; outputs are bounded by `8Q`
/// and are not reduced.
pub fn ntt<M: NttModulus>(r: &mut [i16; N]) {
    let mut k = 1;
    let mut len = N / 2;
    while len >= 2 {
        for start in (0..N).step_by(2 * len) {
            let zeta = M::ZETAS[k];
            k += 1;
            for j in start..start + len {
                let t = fqmul::<M>(zeta, r[j + len]);
                r[j + len] = r[j] - t;
                r[j] += t;
            }
        }
        len >>= 1;
    }
}

/// In-place inverse NTT with the final multiplication by `R^2 / 128`.
///
/// Outputs satisfy `|x| < Q`.
pub fn inv_ntt<M: NttModulus>(r: &mut [i16; N]) {
    let mut k = 127;
    let mut len = 2;
    while len <= N / 2 {
        for start in (0..N).step_by(2 * len) {
            let zeta = M::ZETAS[k];
            k -= 1;
            for j in start..start + len {
                let t = r[j];
                r[j] = barrett_reduce::<M>(t + r[j + len]);
                r[j + len] -= t;
                r[j + len] = fqmul::<M>(zeta, r[j + len]);
            }
        }
        len <<= 1;
    }

    for c in r.iter_mut() {
        *c = fqmul::<M>(*c, M::INV_NTT_SCALE);
    }
}

/// Product of two degree-one residues modulo `X^2 - zeta`.
#[inline(always)]
fn basemul_pair<M: NttModulus>(a: &[i16], b: &[i16], zeta: i16) -> (i16, i16) {
    let r0 = fqmul::<M>(fqmul::<M>(a[1], b[1]), zeta) + fqmul::<M>(a[0], b[0]);
    let r1 = fqmul::<M>(a[0], b[1]) + fqmul::<M>(a[1], b[0]);
    (r0, r1)
}

/// Multiply two NTT-domain elements residue by residue, writing into `r`.
///
/// Each group of four coefficients holds two residues whose moduli are
/// `X^2 - ζ` and `X^2 + ζ`. Outputs satisfy `|x| < 2Q`.
pub fn basemul<M: NttModulus>(r: &mut [i16; N], a: &[i16; N], b: &[i16; N]) {
    for (i, ((rc, ac), bc)) in r
        .chunks_exact_mut(4)
        .zip(a.chunks_exact(4))
        .zip(b.chunks_exact(4))
        .enumerate()
    {
        let zeta = M::ZETAS[64 + i];
        let (r0, r1) = basemul_pair::<M>(&ac[..2], &bc[..2], zeta);
        let (r2, r3) = basemul_pair::<M>(&ac[2..], &bc[2..], -zeta);
        rc[0] = r0;
        rc[1] = r1;
        rc[2] = r2;
        rc[3] = r3;
    }
}
