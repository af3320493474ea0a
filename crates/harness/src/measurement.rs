//! Per-repetition timings

use std::time::Duration;

/// Wall-clock durations of the timed runs, in run order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Measurement {
    pub samples: Vec<Duration>,
}

impl Measurement {
    pub fn new(samples: Vec<Duration>) -> Self {
        Measurement { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn total(&self) -> Duration {
        self.samples.iter().sum()
    }

    pub fn min(&self) -> Duration {
        self.samples.iter().min().copied().unwrap_or_default()
    }

    pub fn max(&self) -> Duration {
        self.samples.iter().max().copied().unwrap_or_default()
    }

    pub fn mean(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        let nanos = self.total().as_nanos() / self.samples.len() as u128;
        duration_from_nanos(nanos)
    }

    /// Median; for an even count, the mean of the two middle samples
    pub fn median(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        let mut sorted = self.samples.clone();
        sorted.sort();
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            sorted[mid]
        } else {
            let nanos = (sorted[mid - 1].as_nanos() + sorted[mid].as_nanos()) / 2;
            duration_from_nanos(nanos)
        }
    }
}

fn duration_from_nanos(nanos: u128) -> Duration {
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: &[u64]) -> Measurement {
        Measurement::new(v.iter().map(|&m| Duration::from_millis(m)).collect())
    }

    #[test]
    fn test_summary_odd_count() {
        let m = ms(&[30, 10, 20]);
        assert_eq!(m.len(), 3);
        assert_eq!(m.min(), Duration::from_millis(10));
        assert_eq!(m.max(), Duration::from_millis(30));
        assert_eq!(m.total(), Duration::from_millis(60));
        assert_eq!(m.mean(), Duration::from_millis(20));
        assert_eq!(m.median(), Duration::from_millis(20));
    }

    #[test]
    fn test_median_even_count() {
        let m = ms(&[40, 10, 20, 30]);
        assert_eq!(m.median(), Duration::from_millis(25));
        assert_eq!(m.mean(), Duration::from_millis(25));
    }

    #[test]
    fn test_empty_is_zero() {
        let m = Measurement::default();
        assert!(m.is_empty());
        assert_eq!(m.min(), Duration::ZERO);
        assert_eq!(m.max(), Duration::ZERO);
        assert_eq!(m.mean(), Duration::ZERO);
        assert_eq!(m.median(), Duration::ZERO);
    }

    #[test]
    fn test_samples_keep_run_order() {
        let m = ms(&[3, 1, 2]);
        assert_eq!(m.samples[0], Duration::from_millis(3));
        assert_eq!(m.samples[2], Duration::from_millis(2));
    }
}
