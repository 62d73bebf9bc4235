//! Thresholds for the timing comparisons

/// Sampling plan and pass thresholds for one timing comparison
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Largest accepted ratio between the two mean timings
    pub mean_ratio_max: f64,
    /// Welch t-statistic above which the difference is reported as significant
    pub t_stat_threshold: f64,
    /// Pass/fail threshold on the combined score
    pub combined_score_threshold: f64,
    pub num_warmup: usize,
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            mean_ratio_max: 1.25,
            t_stat_threshold: 1.7,
            combined_score_threshold: 1.8,
            num_warmup: 1000,
            num_samples: 25,
            num_iterations: 1000,
        }
    }
}

impl TestConfig {
    pub fn with_mean_ratio_max(mut self, max: f64) -> Self {
        self.mean_ratio_max = max;
        self
    }

    pub fn with_t_stat_threshold(mut self, threshold: f64) -> Self {
        self.t_stat_threshold = threshold;
        self
    }

    pub fn with_combined_score_threshold(mut self, threshold: f64) -> Self {
        self.combined_score_threshold = threshold;
        self
    }

    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.num_warmup = warmup;
        self
    }

    pub fn with_samples_and_iterations(mut self, samples: usize, iterations: usize) -> Self {
        self.num_samples = samples;
        self.num_iterations = iterations;
        self
    }
}

// Presets per operation
impl TestConfig {
    /// Slice comparison: cheap, so many iterations per sample
    pub fn for_compare() -> Self {
        Self::default()
            .with_mean_ratio_max(1.3)
            .with_t_stat_threshold(3.5)
            .with_combined_score_threshold(1.9)
    }

    /// Decapsulation: a full re-encryption per call, so few iterations
    pub fn for_decapsulation() -> Self {
        Self::default()
            .with_mean_ratio_max(1.2)
            .with_t_stat_threshold(3.0)
            .with_combined_score_threshold(1.8)
            .with_warmup(20)
            .with_samples_and_iterations(30, 10)
    }
}
