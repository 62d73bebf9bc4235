// Timing of the constant-time slice comparison used on ciphertexts

use super::{assert_constant_time, TestConfig, TimingTester};
use pqkem_internal::constant_time::ct_eq;
use pqkem_params::pqc::mlkem::MLKEM_CIPHERTEXT_BYTES;

#[test]
fn test_ct_eq_first_byte_vs_equal() {
    let config = TestConfig::for_compare();
    let a = [0x5au8; MLKEM_CIPHERTEXT_BYTES];
    let same = a;
    let mut differ_first = a;
    differ_first[0] ^= 1;

    for _ in 0..config.num_warmup {
        let _ = ct_eq(&a, &same);
        let _ = ct_eq(&a, &differ_first);
    }

    let tester = TimingTester::from_config(&config);
    let (t_equal, t_differ) =
        tester.measure_pair(|| ct_eq(&a, &same), || ct_eq(&a, &differ_first));

    let analysis = tester
        .analyze(&t_equal, &t_differ, &config)
        .unwrap_or_else(|e| panic!("analysis error: {}", e));
    assert_constant_time(&analysis, &config, "ct_eq (1088 bytes)");
}
