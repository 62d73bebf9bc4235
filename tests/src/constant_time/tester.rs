//! Timing measurement and Welch t-test analysis

use std::hint::black_box;
use std::time::Instant;

use statrs::distribution::{ContinuousCDF, StudentsT};

use super::config::TestConfig;

/// Summary of two timing sample sets
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    /// max(mean) / min(mean), always >= 1
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub cohens_d: f64,
    pub combined_score: f64,
    pub is_constant_time: bool,
}

impl TimingAnalysis {
    /// Multi-line report printed by the tests
    pub fn report(&self, name: &str) -> String {
        format!(
            "{name} timing analysis:\n  \
             mean times: {:.2} ns vs {:.2} ns\n  \
             mean ratio: {:.3}\n  \
             t-statistic: {:.3} (df {:.1}, p {:.4})\n  \
             Cohen's d: {:.3}\n  \
             relative std dev: {:.3} / {:.3}\n  \
             combined score: {:.3} -> {}",
            self.mean_a,
            self.mean_b,
            self.mean_ratio,
            self.t_statistic,
            self.degrees_of_freedom,
            self.p_value,
            self.cohens_d,
            self.std_dev_a / self.mean_a,
            self.std_dev_b / self.mean_b,
            self.combined_score,
            if self.is_constant_time { "PASS" } else { "FAIL" },
        )
    }
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Mean nanoseconds per call, one entry per sample
    pub fn measure<R, F: FnMut() -> R>(&self, mut f: F) -> Vec<u128> {
        (0..self.num_samples).map(|_| self.sample(&mut f)).collect()
    }

    /// Measure two operations with their samples interleaved, so drift in
    /// clock speed or load hits both classes alike.
    pub fn measure_pair<RA, RB, FA, FB>(&self, mut a: FA, mut b: FB) -> (Vec<u128>, Vec<u128>)
    where
        FA: FnMut() -> RA,
        FB: FnMut() -> RB,
    {
        let mut times_a = Vec::with_capacity(self.num_samples);
        let mut times_b = Vec::with_capacity(self.num_samples);
        for round in 0..self.num_samples {
            // alternate which class goes first
            if round % 2 == 0 {
                times_a.push(self.sample(&mut a));
                times_b.push(self.sample(&mut b));
            } else {
                times_b.push(self.sample(&mut b));
                times_a.push(self.sample(&mut a));
            }
        }
        (times_a, times_b)
    }

    fn sample<R, F: FnMut() -> R>(&self, f: &mut F) -> u128 {
        let start = Instant::now();
        for _ in 0..self.num_iterations {
            black_box(f());
        }
        start.elapsed().as_nanos() / self.num_iterations.max(1) as u128
    }

    pub fn mean(times: &[u128]) -> f64 {
        times.iter().sum::<u128>() as f64 / times.len() as f64
    }

    /// Unbiased sample variance
    pub fn variance(times: &[u128], mean: f64) -> f64 {
        let ss: f64 = times.iter().map(|&t| (t as f64 - mean).powi(2)).sum();
        ss / (times.len() as f64 - 1.0)
    }

    /// Drop samples outside 1.5 IQR of the quartiles
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }
        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let (lo, hi) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);
        times
            .iter()
            .copied()
            .filter(|&t| (lo..=hi).contains(&(t as f64)))
            .collect()
    }

    /// Two-tailed p-value of a t-statistic
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) if df.is_finite() => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            _ => {
                if t_stat.abs() < 2.0 {
                    0.1
                } else {
                    0.0
                }
            }
        }
    }

    /// 1 + weighted drift of the mean ratio, the t-statistic and the spread
    pub fn combined_score(mean_ratio: f64, t_stat: f64, max_rel_std_dev: f64) -> f64 {
        let score = 1.0 + 0.5 * (mean_ratio - 1.0) + 0.2 * (t_stat / 10.0) + 0.3 * max_rel_std_dev;
        if score.is_finite() && score >= 1.0 {
            score
        } else {
            mean_ratio
        }
    }

    pub fn analyze(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        config: &TestConfig,
    ) -> Result<TimingAnalysis, String> {
        let a = Self::remove_outliers(times_a);
        let b = Self::remove_outliers(times_b);
        if a.len() < 2 || b.len() < 2 {
            return Err("not enough samples left after outlier removal".to_string());
        }

        let (n_a, n_b) = (a.len() as f64, b.len() as f64);
        let mean_a = Self::mean(&a);
        let mean_b = Self::mean(&b);
        let var_a = Self::variance(&a, mean_a);
        let var_b = Self::variance(&b, mean_b);
        if mean_a == 0.0 || mean_b == 0.0 {
            return Err("timer resolution too coarse for this operation".to_string());
        }

        let mean_ratio = mean_a.max(mean_b) / mean_a.min(mean_b);

        // Welch's t-test with Welch-Satterthwaite degrees of freedom
        let (se_a, se_b) = (var_a / n_a, var_b / n_b);
        let t_statistic = if se_a + se_b > 0.0 {
            (mean_a - mean_b).abs() / (se_a + se_b).sqrt()
        } else {
            0.0
        };
        let degrees_of_freedom =
            (se_a + se_b).powi(2) / (se_a.powi(2) / (n_a - 1.0) + se_b.powi(2) / (n_b - 1.0));
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);

        let pooled =
            ((var_a * (n_a - 1.0) + var_b * (n_b - 1.0)) / (n_a + n_b - 2.0)).sqrt();
        let cohens_d = if pooled > 0.0 {
            (mean_a - mean_b).abs() / pooled
        } else {
            0.0
        };

        let (std_dev_a, std_dev_b) = (var_a.sqrt(), var_b.sqrt());
        let max_rel_std_dev = (std_dev_a / mean_a).max(std_dev_b / mean_b);
        let combined_score = Self::combined_score(mean_ratio, t_statistic, max_rel_std_dev);

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            std_dev_a,
            std_dev_b,
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            cohens_d,
            combined_score,
            is_constant_time: combined_score <= config.combined_score_threshold
                && mean_ratio <= config.mean_ratio_max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outliers_are_dropped() {
        let times = [100, 101, 99, 100, 102, 98, 100, 5000];
        let kept = TimingTester::remove_outliers(&times);
        assert!(!kept.contains(&5000));
        assert_eq!(kept.len(), 7);
    }

    #[test]
    fn test_identical_samples_pass() {
        let tester = TimingTester::new(8, 1);
        let times = [100, 102, 98, 101, 99, 100, 103, 97];
        let analysis = tester.analyze(&times, &times, &TestConfig::default()).unwrap();
        assert_eq!(analysis.mean_ratio, 1.0);
        assert_eq!(analysis.t_statistic, 0.0);
        assert!(analysis.is_constant_time);
    }

    #[test]
    fn test_separated_samples_fail() {
        let tester = TimingTester::new(8, 1);
        let fast = [100, 102, 98, 101, 99, 100, 103, 97];
        let slow = [200, 204, 196, 202, 198, 200, 206, 194];
        let analysis = tester.analyze(&fast, &slow, &TestConfig::default()).unwrap();
        assert!(analysis.mean_ratio > 1.9);
        assert!(analysis.p_value < 0.001);
        assert!(!analysis.is_constant_time);
    }
}
