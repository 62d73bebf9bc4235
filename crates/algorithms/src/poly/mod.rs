//! Polynomial ring engine for `Z_q[X]/(X^256 + 1)`
//!
//! Coefficients are `i16` and may be outside the canonical range between
//! operations; the reduction helpers in [`reduce`] restore it. The engine is
//! generic over an [`NttModulus`](params::NttModulus) so the ring constants
//! live in one place.

pub mod compress;
pub mod ntt;
pub mod params;
pub mod polynomial;
pub mod reduce;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::compress::{compress, compress_poly, decompress, decompress_poly};
    pub use super::ntt::{basemul, inv_ntt, ntt};
    pub use super::params::{MlKemModulus, Modulus, NttModulus, N};
    pub use super::polynomial::{NttPolynomial, Polynomial, MESSAGE_BYTES, POLY_BYTES};
    pub use super::reduce::{barrett_reduce, fqmul, montgomery_reduce, to_unsigned};
    pub use super::sampling::{sample_cbd_eta2, sample_uniform, CBD_ETA2_BYTES};
    pub use super::serialize::{bytes_required, pack_bits, unpack_bits};
}
