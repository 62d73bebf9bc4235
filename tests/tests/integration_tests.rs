//! Integration tests for the pqkem facade

use pqkem::algorithms::hash::{HashFunction, Sha3_256};
use pqkem::algorithms::xof::{ExtendableOutputFunction, ShakeXof256};
use pqkem::prelude::*;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

#[test]
fn test_mlkem768_kem() {
    let mut rng = OsRng;

    // Generate keypair
    let keypair = MlKem768::keypair(&mut rng).unwrap();
    let public_key = MlKem768::public_key(&keypair);
    let secret_key = MlKem768::secret_key(&keypair);

    // Encapsulate
    let (ciphertext, shared_secret_sender) =
        MlKem768::encapsulate(&mut rng, &public_key).unwrap();

    // Decapsulate
    let shared_secret_recipient = MlKem768::decapsulate(&secret_key, &ciphertext).unwrap();

    // Verify shared secrets match
    assert_eq!(
        shared_secret_sender.as_ref(),
        shared_secret_recipient.as_ref()
    );
}

#[test]
fn test_kyber768_kem() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    let keypair = Kyber768::keypair(&mut rng).unwrap();
    let (ciphertext, shared_secret_sender) =
        Kyber768::encapsulate(&mut rng, keypair.public_key()).unwrap();
    let shared_secret_recipient =
        Kyber768::decapsulate(keypair.secret_key(), &ciphertext).unwrap();

    assert_eq!(shared_secret_sender, shared_secret_recipient);
}

#[test]
fn test_wire_exchange_through_bytes() {
    let mut rng = ChaChaRng::seed_from_u64(3);

    // Recipient publishes its key as bytes
    let keypair = MlKem768::keypair(&mut rng).unwrap();
    let pk_wire = keypair.public_key().to_bytes();
    assert_eq!(pk_wire.len(), pqkem::params::pqc::mlkem::MLKEM_PUBLIC_KEY_BYTES);

    // Sender parses it, encapsulates, and sends the ciphertext bytes back
    let pk = <MlKemPublicKey as Serialize>::from_bytes(&pk_wire).unwrap();
    let (ct, ss_sender) = MlKem768::encapsulate(&mut rng, &pk).unwrap();
    let ct_wire = ct.to_bytes();

    let ct = <MlKemCiphertext as Serialize>::from_bytes(&ct_wire).unwrap();
    let ss_recipient = MlKem768::decapsulate(keypair.secret_key(), &ct).unwrap();
    assert_eq!(ss_sender.to_bytes_zeroizing(), ss_recipient.to_bytes_zeroizing());
}

#[test]
fn test_truncated_ciphertext_is_a_length_error() {
    let mut rng = ChaChaRng::seed_from_u64(4);
    let keypair = MlKem768::keypair(&mut rng).unwrap();
    let (ct, _) = MlKem768::encapsulate(&mut rng, keypair.public_key()).unwrap();

    let wire = ct.to_bytes();
    let err = <MlKemCiphertext as Serialize>::from_bytes(&wire[..wire.len() - 1]).unwrap_err();
    assert!(matches!(err, Error::InvalidLength { expected: 1088, .. }));
}

#[test]
fn test_shared_secret_feeds_a_kdf() {
    let mut rng = ChaChaRng::seed_from_u64(5);
    let keypair = MlKem768::keypair(&mut rng).unwrap();
    let (ct, ss) = MlKem768::encapsulate(&mut rng, keypair.public_key()).unwrap();
    let ss2 = MlKem768::decapsulate(keypair.secret_key(), &ct).unwrap();

    // Both sides derive the same session keys from the shared secret
    let derive = |secret: &MlKemSharedSecret| {
        let mut xof = ShakeXof256::new();
        xof.update(secret.as_ref()).unwrap();
        xof.update(b"session").unwrap();
        let mut okm = [0u8; 64];
        xof.squeeze(&mut okm).unwrap();
        okm
    };
    assert_eq!(derive(&ss), derive(&ss2));

    let transcript = Sha3_256::digest(&ct.to_bytes()).unwrap();
    assert_eq!(transcript.as_ref().len(), 32);
}

#[test]
fn test_facade_reexports_secret_tooling() {
    use pqkem::subtle::ConstantTimeEq;
    use pqkem::zeroize::Zeroize;

    let mut rng = ChaChaRng::seed_from_u64(6);
    let keypair = MlKem768::keypair(&mut rng).unwrap();
    let (ct, ss) = MlKem768::encapsulate(&mut rng, keypair.public_key()).unwrap();
    let ss2 = MlKem768::decapsulate(keypair.secret_key(), &ct).unwrap();
    assert!(bool::from(ss.ct_eq(&ss2)));

    let mut wire = ss.to_bytes_zeroizing();
    assert_eq!(wire.len(), 32);
    wire.zeroize();
    assert!(wire.is_empty());
}
