//! Structural checks on keys received from outside.
//!
//! Neither check is needed for keys produced by this crate. They guard
//! against keys that were corrupted or crafted: a public key with an
//! out-of-range coefficient, or a secret key whose embedded public key does
//! not match the stored hash.

use log::debug;
use pqkem_internal::constant_time::ct_eq;
use pqkem_params::pqc::mlkem::{MLKEM_PUBLIC_KEY_BYTES, MLKEM_SECRET_KEY_BYTES};

use super::serialize::{pack_pk, sk_pk_hash, sk_public_key, unpack_pk};
use super::symmetric::hash_h;

/// Check that every encoded coefficient of `t̂` lies in `[0, q)`.
///
/// Decoding and re-encoding canonicalizes each coefficient, so the key is
/// valid exactly when the round trip leaves it unchanged.
pub fn validate_public_key(pk: &[u8; MLKEM_PUBLIC_KEY_BYTES]) -> bool {
    let (mut t_hat, rho) = unpack_pk(pk);
    t_hat.reduce();
    let repacked = pack_pk(&t_hat, &rho);

    let valid = repacked[..] == pk[..];
    if !valid {
        debug!("public key rejected: coefficient outside [0, q)");
    }
    valid
}

/// Check that the public key embedded in `sk` hashes to the stored `H(pk)`.
pub fn validate_private_key(sk: &[u8; MLKEM_SECRET_KEY_BYTES]) -> bool {
    let pk = sk_public_key(sk);
    let valid = ct_eq(hash_h(&[&pk]), sk_pk_hash(sk));
    if !valid {
        debug!("secret key rejected: embedded public key does not match H(pk)");
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mlkem::ind_cca::kem_keygen;
    use crate::mlkem::serialize::{SK_HASH_OFFSET, SK_PK_OFFSET, SK_Z_OFFSET};
    use crate::mlkem::variant::MlKem;

    #[test]
    fn test_generated_keys_are_valid() {
        let (pk, sk) = kem_keygen::<MlKem>(&[9u8; 64]);
        assert!(validate_public_key(&pk));
        assert!(validate_private_key(&sk));
    }

    #[test]
    fn test_out_of_range_coefficient_rejected() {
        let (mut pk, _) = kem_keygen::<MlKem>(&[9u8; 64]);
        // First coefficient := 0xFFF (4095 >= q)
        pk[0] = 0xff;
        pk[1] |= 0x0f;
        assert!(!validate_public_key(&pk));
    }

    #[test]
    fn test_coefficient_equal_to_q_rejected() {
        let (mut pk, _) = kem_keygen::<MlKem>(&[1u8; 64]);
        // Second coefficient := 3329 = 0xD01, stored in the high 12 bits of bytes 1..3
        pk[1] = (pk[1] & 0x0f) | 0x10;
        pk[2] = 0xd0;
        assert!(!validate_public_key(&pk));
    }

    #[test]
    fn test_seed_bytes_are_not_checked() {
        let (mut pk, _) = kem_keygen::<MlKem>(&[2u8; 64]);
        let last = pk.len() - 1;
        pk[last] ^= 0xff;
        assert!(validate_public_key(&pk));
    }

    #[test]
    fn test_corrupted_hash_rejected() {
        let (_, mut sk) = kem_keygen::<MlKem>(&[3u8; 64]);
        sk[SK_HASH_OFFSET] ^= 1;
        assert!(!validate_private_key(&sk));
    }

    #[test]
    fn test_corrupted_embedded_public_key_rejected() {
        let (_, mut sk) = kem_keygen::<MlKem>(&[4u8; 64]);
        sk[SK_PK_OFFSET + 10] ^= 0x80;
        assert!(!validate_private_key(&sk));
    }

    #[test]
    fn test_secret_part_and_z_not_covered() {
        let (_, mut sk) = kem_keygen::<MlKem>(&[5u8; 64]);
        sk[0] ^= 1;
        sk[SK_Z_OFFSET] ^= 1;
        assert!(validate_private_key(&sk));
    }
}
