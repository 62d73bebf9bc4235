//! The IND-CPA public-key encryption scheme underneath the KEM.
//!
//! All three operations are deterministic: randomness enters only through
//! the 32-byte seeds passed in, and every noise polynomial is sampled from
//! `PRF(seed, nonce)` with nonces assigned in a fixed order.

use pqkem_algorithms::poly::sampling::sample_cbd_eta2;
use pqkem_params::pqc::mlkem::{
    MLKEM_CIPHERTEXT_BYTES, MLKEM_CPA_SECRET_KEY_BYTES, MLKEM_K, MLKEM_PUBLIC_KEY_BYTES,
    MLKEM_SYM_BYTES,
};
use zeroize::Zeroizing;

use super::polyvec::{Matrix, Poly, PolyVec};
use super::serialize::{pack_ciphertext, pack_cpa_sk, pack_pk, unpack_ciphertext, unpack_cpa_sk, unpack_pk};
use super::symmetric::prf;

/// Sample `K` noise polynomials with nonces `first..first + K`
fn sample_noise_vec(seed: &[u8; MLKEM_SYM_BYTES], first: usize) -> PolyVec {
    PolyVec::from_fn(|i| sample_cbd_eta2(&prf(seed, (first + i) as u8)))
}

/// Key generation from the public seed ρ and the noise seed σ
pub(crate) fn keypair_cpa(
    rho: &[u8; MLKEM_SYM_BYTES],
    sigma: &[u8; MLKEM_SYM_BYTES],
) -> (
    [u8; MLKEM_PUBLIC_KEY_BYTES],
    Zeroizing<[u8; MLKEM_CPA_SECRET_KEY_BYTES]>,
) {
    let a = Matrix::expand(rho, false);

    let s_hat = sample_noise_vec(sigma, 0).ntt();
    let e_hat = sample_noise_vec(sigma, MLKEM_K).ntt();

    // t̂ = Â ∘ ŝ + ê
    let mut t_hat = a.mul_vec(&s_hat);
    t_hat.to_mont();
    t_hat.add_assign(&e_hat);
    t_hat.reduce();

    (pack_pk(&t_hat, rho), pack_cpa_sk(&s_hat))
}

/// Encrypt a 32-byte message under `pk` with explicit coins
pub(crate) fn encrypt_cpa(
    pk: &[u8; MLKEM_PUBLIC_KEY_BYTES],
    m: &[u8; MLKEM_SYM_BYTES],
    coins: &[u8; MLKEM_SYM_BYTES],
) -> [u8; MLKEM_CIPHERTEXT_BYTES] {
    let (t_hat, rho) = unpack_pk(pk);
    let at = Matrix::expand(&rho, true);

    let r_hat = sample_noise_vec(coins, 0).ntt();
    let e1 = sample_noise_vec(coins, MLKEM_K);
    let e2: Poly = sample_cbd_eta2(&prf(coins, (2 * MLKEM_K) as u8));

    // u = NTT⁻¹(Âᵀ ∘ r̂) + e1
    let mut u = at.mul_vec(&r_hat).inv_ntt();
    u.add_assign(&e1);
    u.reduce();

    // v = NTT⁻¹(t̂ · r̂) + e2 + Decompress_1(m)
    let mut v = t_hat.dot(&r_hat).inv_ntt();
    v.add_assign(&e2);
    v.add_assign(&Poly::from_message(m));
    v.reduce();

    pack_ciphertext(&u, &v)
}

/// Recover the message from a ciphertext. Never fails: any ciphertext
/// decodes to some 32-byte string.
pub(crate) fn decrypt_cpa(
    cpa_sk: &[u8],
    ct: &[u8; MLKEM_CIPHERTEXT_BYTES],
) -> Zeroizing<[u8; MLKEM_SYM_BYTES]> {
    let (u, v) = unpack_ciphertext(ct);
    let s_hat = unpack_cpa_sk(cpa_sk);

    let w = s_hat.dot(&u.ntt()).inv_ntt();
    let mut mp = v.sub(&w);
    mp.reduce();

    Zeroizing::new(mp.to_message())
}
