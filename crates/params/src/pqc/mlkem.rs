//! Constants for the ML-KEM-768 / Kyber-768 key encapsulation mechanism
//!
//! Only the rank-3 parameter set is provided. Other ranks differ solely in
//! `MLKEM_K`, the noise widths and the derived byte sizes below.

/// Polynomial degree
pub const MLKEM_N: usize = 256;

/// Coefficient modulus
pub const MLKEM_Q: u16 = 3329;

/// Module rank (number of polynomials per vector)
pub const MLKEM_K: usize = 3;

/// Centered binomial parameter for the secret and key-generation error
pub const MLKEM_ETA1: usize = 2;

/// Centered binomial parameter for the encryption error
pub const MLKEM_ETA2: usize = 2;

/// Compression width for the ciphertext vector `u`
pub const MLKEM_DU: u32 = 10;

/// Compression width for the ciphertext scalar `v`
pub const MLKEM_DV: u32 = 4;

/// Size of seeds, hashes, messages and shared secrets
pub const MLKEM_SYM_BYTES: usize = 32;

/// Size of the shared secret in bytes
pub const MLKEM_SS_BYTES: usize = 32;

/// Size of the key generation seed (`d ∥ z`)
pub const MLKEM_KEYGEN_SEED_BYTES: usize = 2 * MLKEM_SYM_BYTES;

/// Size of the encapsulation randomness
pub const MLKEM_ENCAPS_SEED_BYTES: usize = MLKEM_SYM_BYTES;

/// Bytes of one polynomial serialized at 12 bits per coefficient
pub const MLKEM_POLY_BYTES: usize = 384;

/// Bytes of a polynomial vector serialized at 12 bits per coefficient
pub const MLKEM_POLYVEC_BYTES: usize = MLKEM_K * MLKEM_POLY_BYTES;

/// Bytes of one polynomial compressed to `MLKEM_DU` bits
pub const MLKEM_POLY_COMPRESSED_BYTES_DU: usize = MLKEM_N * MLKEM_DU as usize / 8;

/// Bytes of one polynomial compressed to `MLKEM_DV` bits
pub const MLKEM_POLY_COMPRESSED_BYTES_DV: usize = MLKEM_N * MLKEM_DV as usize / 8;

/// Bytes of the compressed ciphertext vector `u`
pub const MLKEM_POLYVEC_COMPRESSED_BYTES: usize = MLKEM_K * MLKEM_POLY_COMPRESSED_BYTES_DU;

/// Size of the IND-CPA secret key
pub const MLKEM_CPA_SECRET_KEY_BYTES: usize = MLKEM_POLYVEC_BYTES;

/// Size of the public key (`t̂ ∥ ρ`)
pub const MLKEM_PUBLIC_KEY_BYTES: usize = MLKEM_POLYVEC_BYTES + MLKEM_SYM_BYTES;

/// Size of the KEM secret key (`ŝ ∥ pk ∥ H(pk) ∥ z`)
pub const MLKEM_SECRET_KEY_BYTES: usize =
    MLKEM_CPA_SECRET_KEY_BYTES + MLKEM_PUBLIC_KEY_BYTES + 2 * MLKEM_SYM_BYTES;

/// Size of the ciphertext (`u ∥ v`)
pub const MLKEM_CIPHERTEXT_BYTES: usize =
    MLKEM_POLYVEC_COMPRESSED_BYTES + MLKEM_POLY_COMPRESSED_BYTES_DV;

/// Output length of the noise PRF for `MLKEM_ETA1`
pub const MLKEM_ETA1_PRF_BYTES: usize = 64 * MLKEM_ETA1;

/// Output length of the noise PRF for `MLKEM_ETA2`
pub const MLKEM_ETA2_PRF_BYTES: usize = 64 * MLKEM_ETA2;

/// Structure containing ML-KEM parameters
pub struct MlKemParams {
    /// Polynomial degree
    pub n: usize,

    /// Modulus
    pub q: u16,

    /// Number of polynomials (dimension)
    pub k: usize,

    /// Error distribution parameter
    pub eta1: usize,

    /// Error distribution parameter
    pub eta2: usize,

    /// Compression width of `u`
    pub du: u32,

    /// Compression width of `v`
    pub dv: u32,

    /// Size of public key in bytes
    pub public_key_size: usize,

    /// Size of secret key in bytes
    pub secret_key_size: usize,

    /// Size of ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of shared secret in bytes
    pub shared_secret_size: usize,
}

/// ML-KEM-768 parameters
pub const MLKEM768: MlKemParams = MlKemParams {
    n: MLKEM_N,
    q: MLKEM_Q,
    k: MLKEM_K,
    eta1: MLKEM_ETA1,
    eta2: MLKEM_ETA2,
    du: MLKEM_DU,
    dv: MLKEM_DV,
    public_key_size: MLKEM_PUBLIC_KEY_BYTES,
    secret_key_size: MLKEM_SECRET_KEY_BYTES,
    ciphertext_size: MLKEM_CIPHERTEXT_BYTES,
    shared_secret_size: MLKEM_SS_BYTES,
};

const _: () = assert!(MLKEM_PUBLIC_KEY_BYTES == 1184);
const _: () = assert!(MLKEM_SECRET_KEY_BYTES == 2400);
const _: () = assert!(MLKEM_CIPHERTEXT_BYTES == 1088);
