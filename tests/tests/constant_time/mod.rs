pub mod compare_tests;
pub mod decapsulation_tests;

pub use pqkem_tests::constant_time::{TestConfig, TimingAnalysis, TimingTester};

/// Fail with the full report when the analysis does not pass
pub fn assert_constant_time(analysis: &TimingAnalysis, config: &TestConfig, name: &str) {
    let report = analysis.report(name);
    println!("{}", report);
    assert!(
        analysis.is_constant_time,
        "{} is not constant-time: combined_score={:.3} (threshold {:.3}), mean_ratio={:.3} (max {:.3})\n{}",
        name,
        analysis.combined_score,
        config.combined_score_threshold,
        analysis.mean_ratio,
        config.mean_ratio_max,
        report
    );
}
