use crate::error::SummaryError;
use crate::percentile::{nearest_rank_index, Percentile};
use tracing::trace;

/// Descriptive statistics of a sample set.
///
/// Built once by [Summary::compute] and never modified afterward.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    count: usize,
    mean: f64,
    std_dev: f64,
    /// Sample variance (Bessel's correction)
    variance: f64,
    minimum: f64,
    maximum: f64,
    percentile_25: f64,
    percentile_50: f64,
    percentile_75: f64,
    percentile_95: f64,
    percentile_99: f64,
}

impl Summary {
    /// Compute the summary of `samples`. The slice is only read, its order is left untouched.
    ///
    /// Variance and standard deviation are only computed with at least two values, they are
    /// 0 otherwise. Percentiles use the nearest rank at `floor(count * p / 100)` in the sorted
    /// values, without interpolation.
    ///
    /// Non-finite values are accepted but what they do to the results is unspecified.
    pub fn compute(samples: &[f64]) -> Result<Self, SummaryError> {
        let count = samples.len();
        if count == 0 {
            trace!("refusing to summarize an empty sample set");
            return Err(SummaryError::EmptyInput);
        }

        let entries = count as f64;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for &v in samples {
            sum += v;
            sum_sq += v * v;
        }

        let (variance, std_dev) = if count > 1 {
            let variance = (1.0 / (entries - 1.0)) * (sum_sq - (1.0 / entries) * sum * sum);
            // Rounding can push it slightly below 0 when all values are equal
            let variance = if variance < 0.0 { 0.0 } else { variance };
            (variance, variance.sqrt())
        } else {
            (0.0, 0.0)
        };

        let mut sorted = samples.to_vec();
        sorted.sort_unstable_by(|a, b| a.total_cmp(b));
        let at = |p: Percentile| sorted[nearest_rank_index(count, p)];

        let summary = Self {
            count,
            mean: sum / entries,
            std_dev,
            variance,
            minimum: sorted[0],
            maximum: sorted[count - 1],
            percentile_25: at(Percentile::P25),
            percentile_50: at(Percentile::P50),
            percentile_75: at(Percentile::P75),
            percentile_95: at(Percentile::P95),
            percentile_99: at(Percentile::P99),
        };
        trace!(count, mean = summary.mean, variance, "computed summary");
        Ok(summary)
    }

    /// Number of samples
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn percentile(&self, p: Percentile) -> f64 {
        match p {
            Percentile::P25 => self.percentile_25,
            Percentile::P50 => self.percentile_50,
            Percentile::P75 => self.percentile_75,
            Percentile::P95 => self.percentile_95,
            Percentile::P99 => self.percentile_99,
        }
    }

    pub fn percentile_25(&self) -> f64 {
        self.percentile_25
    }

    pub fn percentile_50(&self) -> f64 {
        self.percentile_50
    }

    pub fn percentile_75(&self) -> f64 {
        self.percentile_75
    }

    pub fn percentile_95(&self) -> f64 {
        self.percentile_95
    }

    pub fn percentile_99(&self) -> f64 {
        self.percentile_99
    }
}

/// Shorthand for [Summary::compute].
pub fn compute_summary(samples: &[f64]) -> Result<Summary, SummaryError> {
    Summary::compute(samples)
}

/// Summarize a sample set in place of calling [Summary::compute].
///
/// ```
/// use stats_summary::Summarize;
/// let latencies = vec![12.0, 9.5, 14.25];
/// let summary = latencies.summarize().unwrap();
/// assert_eq!(summary.maximum(), 14.25);
/// ```
pub trait Summarize {
    fn summarize(&self) -> Result<Summary, SummaryError>;
}

impl Summarize for [f64] {
    fn summarize(&self) -> Result<Summary, SummaryError> {
        Summary::compute(self)
    }
}
