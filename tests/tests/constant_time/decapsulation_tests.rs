// Decapsulation must take the same time whether the ciphertext is accepted
// or implicitly rejected.

use super::{assert_constant_time, TestConfig, TimingTester};
use pqkem_kem::mlkem::{KdfVariant, MlKemCiphertext, MlKemKem};
use pqkem_kem::{Kyber, MlKem};

fn valid_vs_tampered<V: KdfVariant>() {
    let config = TestConfig::for_decapsulation();
    let kp = MlKemKem::<V>::keypair_derand(&[0x42u8; 64]);
    let (ct, ss) = MlKemKem::<V>::encapsulate_derand(kp.public_key(), &[0x17u8; 32]);

    let mut tampered = *ct.as_bytes();
    tampered[tampered.len() / 2] ^= 0x01;
    let tampered = MlKemCiphertext::from_array(tampered);

    // Both classes really take their own path
    assert_eq!(MlKemKem::<V>::decapsulate_implicit(kp.secret_key(), &ct), ss);
    assert_ne!(MlKemKem::<V>::decapsulate_implicit(kp.secret_key(), &tampered), ss);

    for _ in 0..config.num_warmup {
        let _ = MlKemKem::<V>::decapsulate_implicit(kp.secret_key(), &ct);
        let _ = MlKemKem::<V>::decapsulate_implicit(kp.secret_key(), &tampered);
    }

    let tester = TimingTester::from_config(&config);
    let (t_valid, t_tampered) = tester.measure_pair(
        || MlKemKem::<V>::decapsulate_implicit(kp.secret_key(), &ct),
        || MlKemKem::<V>::decapsulate_implicit(kp.secret_key(), &tampered),
    );

    let analysis = tester
        .analyze(&t_valid, &t_tampered, &config)
        .unwrap_or_else(|e| panic!("analysis error: {}", e));
    assert_constant_time(&analysis, &config, &format!("{} decapsulation", V::NAME));
}

#[test]
fn test_mlkem768_decapsulation_constant_time() {
    valid_vs_tampered::<MlKem>();
}

#[test]
fn test_kyber768_decapsulation_constant_time() {
    valid_vs_tampered::<Kyber>();
}
