//! Vectors of `K` ring elements and the public matrix `A`.

use core::array;

use pqkem_algorithms::poly::compress::{compress_poly, decompress_poly};
use pqkem_algorithms::poly::params::MlKemModulus;
use pqkem_algorithms::poly::polynomial::{NttPolynomial, Polynomial, POLY_BYTES};
use pqkem_algorithms::poly::sampling::sample_uniform;
use pqkem_params::pqc::mlkem::{
    MLKEM_DU, MLKEM_K, MLKEM_POLYVEC_BYTES, MLKEM_POLYVEC_COMPRESSED_BYTES,
    MLKEM_POLY_COMPRESSED_BYTES_DU, MLKEM_SYM_BYTES,
};
use zeroize::Zeroize;

use super::symmetric::xof;

pub(crate) type Poly = Polynomial<MlKemModulus>;
pub(crate) type NttPoly = NttPolynomial<MlKemModulus>;

/// `K` polynomials in the standard domain
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub(crate) struct PolyVec {
    pub(crate) polys: [Poly; MLKEM_K],
}

/// `K` polynomials in the NTT domain
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub(crate) struct NttPolyVec {
    pub(crate) polys: [NttPoly; MLKEM_K],
}

impl PolyVec {
    /// Build a vector element by element
    pub(crate) fn from_fn(f: impl FnMut(usize) -> Poly) -> Self {
        Self {
            polys: array::from_fn(f),
        }
    }

    /// Forward NTT of every element, reduced
    pub(crate) fn ntt(&self) -> NttPolyVec {
        NttPolyVec::from_fn(|i| self.polys[i].ntt())
    }

    pub(crate) fn add_assign(&mut self, other: &Self) {
        for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
            a.add_assign(b);
        }
    }

    pub(crate) fn reduce(&mut self) {
        for p in self.polys.iter_mut() {
            p.reduce();
        }
    }

    /// Compress every element to `MLKEM_DU` bits into
    /// `MLKEM_POLYVEC_COMPRESSED_BYTES` bytes. Elements must be reduced.
    pub(crate) fn compress(&self, out: &mut [u8]) {
        for (p, chunk) in self
            .polys
            .iter()
            .zip(out.chunks_exact_mut(MLKEM_POLY_COMPRESSED_BYTES_DU))
        {
            compress_poly(p, MLKEM_DU, chunk);
        }
    }

    pub(crate) fn decompress(input: &[u8]) -> Self {
        let mut chunks = input.chunks_exact(MLKEM_POLY_COMPRESSED_BYTES_DU);
        Self::from_fn(|_| {
            chunks
                .next()
                .map(|c| decompress_poly(c, MLKEM_DU))
                .unwrap_or_else(Poly::zero)
        })
    }
}

impl NttPolyVec {
    /// Build a vector element by element
    pub(crate) fn from_fn(f: impl FnMut(usize) -> NttPoly) -> Self {
        Self {
            polys: array::from_fn(f),
        }
    }

    /// Inverse NTT of every element
    pub(crate) fn inv_ntt(&self) -> PolyVec {
        PolyVec::from_fn(|i| self.polys[i].inv_ntt())
    }

    pub(crate) fn add_assign(&mut self, other: &Self) {
        for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
            a.add_assign(b);
        }
    }

    pub(crate) fn reduce(&mut self) {
        for p in self.polys.iter_mut() {
            p.reduce();
        }
    }

    pub(crate) fn to_mont(&mut self) {
        for p in self.polys.iter_mut() {
            p.to_mont();
        }
    }

    /// `Σ self_j ∘ other_j`, reduced
    pub(crate) fn dot(&self, other: &Self) -> NttPoly {
        let mut acc = NttPoly::zero();
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            acc.mul_acc(a, b);
        }
        acc.reduce();
        acc
    }

    /// 12-bit encoding of every element into `MLKEM_POLYVEC_BYTES` bytes.
    /// Elements must satisfy `|x| < Q`.
    pub(crate) fn to_bytes(&self, out: &mut [u8]) {
        for (p, chunk) in self.polys.iter().zip(out.chunks_exact_mut(POLY_BYTES)) {
            p.to_bytes(chunk);
        }
    }

    /// Decode without range checking
    pub(crate) fn from_bytes(input: &[u8]) -> Self {
        let mut chunks = input.chunks_exact(POLY_BYTES);
        Self::from_fn(|_| {
            chunks
                .next()
                .map(NttPoly::from_bytes)
                .unwrap_or_else(NttPoly::zero)
        })
    }
}

/// The `K × K` public matrix, expanded from ρ in the NTT domain
pub(crate) struct Matrix {
    rows: [NttPolyVec; MLKEM_K],
}

impl Matrix {
    /// Expand `A` (or `Aᵀ` when `transposed`) from the public seed.
    ///
    /// Entry `A[i][j]` is sampled from `XOF(ρ ∥ j ∥ i)`.
    pub(crate) fn expand(rho: &[u8; MLKEM_SYM_BYTES], transposed: bool) -> Self {
        let rows = array::from_fn(|i| {
            NttPolyVec::from_fn(|j| {
                let (x, y) = if transposed { (i, j) } else { (j, i) };
                let mut session = xof(rho, x as u8, y as u8);
                sample_uniform(&mut session)
            })
        });
        Self { rows }
    }

    /// `M · v` in the NTT domain, every output element reduced
    pub(crate) fn mul_vec(&self, v: &NttPolyVec) -> NttPolyVec {
        NttPolyVec::from_fn(|i| self.rows[i].dot(v))
    }

    #[cfg(test)]
    pub(crate) fn entry(&self, i: usize, j: usize) -> &NttPoly {
        &self.rows[i].polys[j]
    }
}

// The chunk iterators above yield exactly `K` pieces.
const _: () = assert!(MLKEM_POLYVEC_BYTES == MLKEM_K * POLY_BYTES);
const _: () =
    assert!(MLKEM_POLYVEC_COMPRESSED_BYTES == MLKEM_K * MLKEM_POLY_COMPRESSED_BYTES_DU);
