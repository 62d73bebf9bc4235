//! IND-CCA2 KEM built from the IND-CPA scheme with the Fujisaki-Okamoto
//! transform and implicit rejection.

use pqkem_internal::constant_time::{ct_eq_choice, ct_select_bytes};
use pqkem_params::pqc::mlkem::{
    MLKEM_CIPHERTEXT_BYTES, MLKEM_KEYGEN_SEED_BYTES, MLKEM_PUBLIC_KEY_BYTES,
    MLKEM_SECRET_KEY_BYTES, MLKEM_SS_BYTES, MLKEM_SYM_BYTES,
};
use zeroize::Zeroizing;

use super::cpa_pke::{decrypt_cpa, encrypt_cpa, keypair_cpa};
use super::serialize::{pack_sk, sk_cpa, sk_pk_hash, sk_public_key, sk_z};
use super::symmetric::{hash_g, hash_h};
use super::variant::KdfVariant;

pub(crate) type SharedSecretBytes = Zeroizing<[u8; MLKEM_SS_BYTES]>;

/// Key generation from `d ∥ z`
pub(crate) fn kem_keygen<V: KdfVariant>(
    seed: &[u8; MLKEM_KEYGEN_SEED_BYTES],
) -> (
    [u8; MLKEM_PUBLIC_KEY_BYTES],
    Zeroizing<[u8; MLKEM_SECRET_KEY_BYTES]>,
) {
    let mut d = Zeroizing::new([0u8; MLKEM_SYM_BYTES]);
    let mut z = Zeroizing::new([0u8; MLKEM_SYM_BYTES]);
    d.copy_from_slice(&seed[..MLKEM_SYM_BYTES]);
    z.copy_from_slice(&seed[MLKEM_SYM_BYTES..]);

    let (rho, sigma) = V::keygen_seeds(&d);
    let (pk, cpa_sk) = keypair_cpa(&rho, &sigma);
    let pk_hash = hash_h(&[&pk]);

    let sk = pack_sk(&cpa_sk, &pk, &pk_hash, &z);
    (pk, sk)
}

/// Encapsulation with explicit randomness
pub(crate) fn kem_encaps<V: KdfVariant>(
    pk: &[u8; MLKEM_PUBLIC_KEY_BYTES],
    randomness: &[u8; MLKEM_SYM_BYTES],
) -> ([u8; MLKEM_CIPHERTEXT_BYTES], SharedSecretBytes) {
    let m = V::encaps_message(randomness);
    let pk_hash = hash_h(&[pk]);

    // (K̄, r) = G(m ∥ H(pk))
    let (k_bar, coins) = hash_g(&[&m[..], &pk_hash]);
    let ct = encrypt_cpa(pk, &m, &coins);

    let ss = V::shared_secret(&k_bar, &ct);
    (ct, ss)
}

/// Decapsulation with implicit rejection.
///
/// Both candidate secrets are always computed and the result is chosen with
/// a constant-time select, so neither timing nor the return value reveals
/// whether the re-encryption matched.
pub(crate) fn kem_decaps<V: KdfVariant>(
    sk: &[u8; MLKEM_SECRET_KEY_BYTES],
    ct: &[u8; MLKEM_CIPHERTEXT_BYTES],
) -> SharedSecretBytes {
    let pk = sk_public_key(sk);
    let pk_hash = sk_pk_hash(sk);
    let z = sk_z(sk);

    let m = decrypt_cpa(sk_cpa(sk), ct);
    let (k_bar, coins) = hash_g(&[&m[..], &pk_hash]);
    let ct_cmp = encrypt_cpa(&pk, &m, &coins);

    let accept = ct_eq_choice(&ct[..], &ct_cmp[..]);
    let k_accept = V::shared_secret(&k_bar, ct);
    let k_reject = V::rejection_secret(&z, ct);

    Zeroizing::new(ct_select_bytes(&*k_reject, &*k_accept, accept))
}
