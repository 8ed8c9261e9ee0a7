mod read;

pub use read::SampleError;

use crate::statistics::Statistic;

/// An ordered sequence of observations.
///
/// Used both for input datasets and for the distributions of bootstrap
/// estimates returned by [`Bootstrapper`](crate::Bootstrapper).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample<T> {
    /// Observations in order.
    pub data: Vec<T>,
}

impl<T> Sample<T> {
    /// Create a new sample from raw data
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Get the number of observations in the sample
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the sample contains no observations
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Evaluate a whole-sample statistic over the observations
    pub fn estimate<O>(&self, statistic: impl Statistic<[T], O>) -> O {
        statistic.compute(self.data.as_slice())
    }
}

impl<T> From<Vec<T>> for Sample<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T> FromIterator<T> for Sample<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sample::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sample<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T> AsRef<[T]> for Sample<T> {
    fn as_ref(&self) -> &[T] { &self.data }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mean;

    use approx::assert_abs_diff_eq;

    #[test]
    fn collects_and_estimates() {
        let sample: Sample<f64> = (1..=4).map(f64::from).collect();
        assert_eq!(sample.len(), 4);
        assert!(!sample.is_empty());
        assert_abs_diff_eq!(sample.estimate(Mean), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn estimate_accepts_plain_functions() {
        fn max(xs: &[f64]) -> f64 {
            xs.iter().copied().fold(f64::NEG_INFINITY, f64::max)
        }

        let sample = Sample::new(vec![3.0, -1.0, 7.5]);
        assert_abs_diff_eq!(sample.estimate(max), 7.5);
    }
}
