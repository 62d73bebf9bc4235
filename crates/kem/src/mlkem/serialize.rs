//! Byte layouts of keys and ciphertexts.
//!
//! ```text
//! public key     t̂ (12-bit, K·384)  ∥ ρ (32)
//! CPA secret     ŝ (12-bit, K·384)
//! KEM secret     ŝ ∥ pk ∥ H(pk) (32) ∥ z (32)
//! ciphertext     u (du-bit, K·32·du) ∥ v (dv-bit, 32·dv)
//! ```

use pqkem_algorithms::poly::compress::{compress_poly, decompress_poly};
use pqkem_params::pqc::mlkem::{
    MLKEM_CIPHERTEXT_BYTES, MLKEM_CPA_SECRET_KEY_BYTES, MLKEM_DV, MLKEM_POLYVEC_BYTES,
    MLKEM_POLYVEC_COMPRESSED_BYTES, MLKEM_PUBLIC_KEY_BYTES, MLKEM_SECRET_KEY_BYTES,
    MLKEM_SYM_BYTES,
};
use zeroize::Zeroizing;

use super::polyvec::{NttPolyVec, Poly, PolyVec};

/// Offset of the embedded public key inside the KEM secret key
pub(crate) const SK_PK_OFFSET: usize = MLKEM_CPA_SECRET_KEY_BYTES;
/// Offset of `H(pk)` inside the KEM secret key
pub(crate) const SK_HASH_OFFSET: usize = SK_PK_OFFSET + MLKEM_PUBLIC_KEY_BYTES;
/// Offset of the rejection seed `z` inside the KEM secret key
pub(crate) const SK_Z_OFFSET: usize = SK_HASH_OFFSET + MLKEM_SYM_BYTES;

const _: () = assert!(SK_Z_OFFSET + MLKEM_SYM_BYTES == MLKEM_SECRET_KEY_BYTES);

fn array_at<const N: usize>(bytes: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[offset..offset + N]);
    out
}

pub(crate) fn pack_pk(t_hat: &NttPolyVec, rho: &[u8; MLKEM_SYM_BYTES]) -> [u8; MLKEM_PUBLIC_KEY_BYTES] {
    let mut pk = [0u8; MLKEM_PUBLIC_KEY_BYTES];
    t_hat.to_bytes(&mut pk[..MLKEM_POLYVEC_BYTES]);
    pk[MLKEM_POLYVEC_BYTES..].copy_from_slice(rho);
    pk
}

pub(crate) fn unpack_pk(pk: &[u8; MLKEM_PUBLIC_KEY_BYTES]) -> (NttPolyVec, [u8; MLKEM_SYM_BYTES]) {
    let t_hat = NttPolyVec::from_bytes(&pk[..MLKEM_POLYVEC_BYTES]);
    (t_hat, array_at(pk, MLKEM_POLYVEC_BYTES))
}

pub(crate) fn pack_cpa_sk(s_hat: &NttPolyVec) -> Zeroizing<[u8; MLKEM_CPA_SECRET_KEY_BYTES]> {
    let mut sk = Zeroizing::new([0u8; MLKEM_CPA_SECRET_KEY_BYTES]);
    s_hat.to_bytes(&mut sk[..]);
    sk
}

pub(crate) fn unpack_cpa_sk(sk: &[u8]) -> NttPolyVec {
    NttPolyVec::from_bytes(&sk[..MLKEM_CPA_SECRET_KEY_BYTES])
}

pub(crate) fn pack_sk(
    cpa_sk: &[u8; MLKEM_CPA_SECRET_KEY_BYTES],
    pk: &[u8; MLKEM_PUBLIC_KEY_BYTES],
    pk_hash: &[u8; MLKEM_SYM_BYTES],
    z: &[u8; MLKEM_SYM_BYTES],
) -> Zeroizing<[u8; MLKEM_SECRET_KEY_BYTES]> {
    let mut sk = Zeroizing::new([0u8; MLKEM_SECRET_KEY_BYTES]);
    sk[..SK_PK_OFFSET].copy_from_slice(cpa_sk);
    sk[SK_PK_OFFSET..SK_HASH_OFFSET].copy_from_slice(pk);
    sk[SK_HASH_OFFSET..SK_Z_OFFSET].copy_from_slice(pk_hash);
    sk[SK_Z_OFFSET..].copy_from_slice(z);
    sk
}

/// The IND-CPA part of a KEM secret key
pub(crate) fn sk_cpa(sk: &[u8; MLKEM_SECRET_KEY_BYTES]) -> &[u8] {
    &sk[..SK_PK_OFFSET]
}

/// The public key embedded in a KEM secret key
pub(crate) fn sk_public_key(sk: &[u8; MLKEM_SECRET_KEY_BYTES]) -> [u8; MLKEM_PUBLIC_KEY_BYTES] {
    array_at(sk, SK_PK_OFFSET)
}

/// The stored `H(pk)`
pub(crate) fn sk_pk_hash(sk: &[u8; MLKEM_SECRET_KEY_BYTES]) -> [u8; MLKEM_SYM_BYTES] {
    array_at(sk, SK_HASH_OFFSET)
}

/// The implicit-rejection seed `z`
pub(crate) fn sk_z(sk: &[u8; MLKEM_SECRET_KEY_BYTES]) -> Zeroizing<[u8; MLKEM_SYM_BYTES]> {
    Zeroizing::new(array_at(sk, SK_Z_OFFSET))
}

/// Compress and pack `u` and `v`; both must be reduced.
pub(crate) fn pack_ciphertext(u: &PolyVec, v: &Poly) -> [u8; MLKEM_CIPHERTEXT_BYTES] {
    let mut ct = [0u8; MLKEM_CIPHERTEXT_BYTES];
    u.compress(&mut ct[..MLKEM_POLYVEC_COMPRESSED_BYTES]);
    compress_poly(v, MLKEM_DV, &mut ct[MLKEM_POLYVEC_COMPRESSED_BYTES..]);
    ct
}

pub(crate) fn unpack_ciphertext(ct: &[u8; MLKEM_CIPHERTEXT_BYTES]) -> (PolyVec, Poly) {
    let u = PolyVec::decompress(&ct[..MLKEM_POLYVEC_COMPRESSED_BYTES]);
    let v = decompress_poly(&ct[MLKEM_POLYVEC_COMPRESSED_BYTES..], MLKEM_DV);
    (u, v)
}
