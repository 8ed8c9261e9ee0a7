use num_traits::{Float, FromPrimitive, Zero};
use rand::Rng;

use super::ResampleError;
use super::indexes::{IndexGenerator, IndexStrategy};
use crate::Sample;
use crate::statistics::{OnlineStatistic, Statistic, from_usize};

/// Nonparametric bootstrap over a caller-seeded random source.
///
/// Every resample has the size of the input and is drawn with replacement.
/// The `Bootstrapper` owns its source and advances it on every resample, so
/// two instances seeded identically give bit-identical results for the same
/// sequence of calls.
///
/// The source is not synchronized. Give each thread its own `Bootstrapper`
/// (seeded independently) or wrap a shared one in a lock; interleaved use
/// makes the draw order, and therefore the results, unpredictable.
#[derive(Debug, Clone)]
pub struct Bootstrapper<R: Rng> {
    rng: R,
    strategy: IndexStrategy,
}

impl<R: Rng> Bootstrapper<R> {
    /// Bind a bootstrapper to `rng`, drawing indexes with
    /// [`IndexStrategy::Modulo`].
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            strategy: IndexStrategy::default(),
        }
    }

    /// Switch the index drawing scheme.
    #[must_use]
    pub fn with_index_strategy(mut self, strategy: IndexStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The index drawing scheme in use.
    pub fn index_strategy(&self) -> IndexStrategy {
        self.strategy
    }

    /// Borrow the random source, e.g. to reseed it.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Give back the random source in its current state.
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Draw one set of `n` resample indexes in `[0, n)`.
    ///
    /// # Panics
    ///
    /// When `n == 0`.
    pub fn resample_indexes(&mut self, n: usize) -> Vec<usize> {
        assert!(n > 0, "cannot draw resample indexes for an empty sample");
        IndexGenerator::new(self.strategy)
            .draw(&mut self.rng, n, n)
            .to_vec()
    }

    /// Endless stream of resamples of `data`, each in draw order.
    ///
    /// Yields nothing when `data` is empty.
    pub fn resamples<'a, T: Copy>(&'a mut self, data: &'a [T]) -> Resamples<'a, T, R> {
        Resamples {
            data,
            indexes: IndexGenerator::new(self.strategy),
            rng: &mut self.rng,
        }
    }

    /// Bootstrapped distribution of the mean.
    ///
    /// Each resample is folded into a running mean without being stored.
    ///
    /// # Errors
    ///
    /// [`ResampleError::EmptySample`] when `data` is empty.
    pub fn mean<T>(&mut self, data: &[T], samples: usize) -> Result<Sample<T>, ResampleError>
    where
        T: Float + FromPrimitive,
    {
        self.fold_resamples(data, samples, |j, mean, x| {
            (mean * from_usize::<T>(j) + x) / from_usize::<T>(j + 1)
        })
    }

    /// Bootstrapped distribution of an arbitrary whole-sample statistic.
    ///
    /// Every resample is materialized in draw order before `statistic` sees
    /// it, so order-sensitive statistics observe the draws as made. Panics
    /// inside `statistic` propagate to the caller.
    ///
    /// # Errors
    ///
    /// [`ResampleError::EmptySample`] when `data` is empty.
    pub fn bootstrap<T, S>(
        &mut self,
        data: &[T],
        samples: usize,
        statistic: S,
    ) -> Result<Sample<T>, ResampleError>
    where
        T: Copy,
        S: Statistic<[T], T>,
    {
        if data.is_empty() {
            return Err(ResampleError::EmptySample);
        }

        Ok(self
            .resamples(data)
            .take(samples)
            .map(|resample| statistic.compute(resample.as_ref()))
            .collect())
    }

    /// Bootstrapped distribution of an online statistic.
    ///
    /// Draws are fed to `statistic` one at a time, starting from a zero
    /// accumulator, so no resample is stored. Cheaper in memory than
    /// [`bootstrap`](Self::bootstrap), but limited to statistics that can be
    /// updated incrementally.
    ///
    /// # Errors
    ///
    /// [`ResampleError::EmptySample`] when `data` is empty.
    pub fn streaming_bootstrap<T, S>(
        &mut self,
        data: &[T],
        samples: usize,
        statistic: S,
    ) -> Result<Sample<T>, ResampleError>
    where
        T: Copy + Zero,
        S: OnlineStatistic<T>,
    {
        self.fold_resamples(data, samples, |j, acc, x| statistic.update(j, acc, x))
    }

    fn fold_resamples<T, F>(
        &mut self,
        data: &[T],
        samples: usize,
        step: F,
    ) -> Result<Sample<T>, ResampleError>
    where
        T: Copy + Zero,
        F: Fn(usize, T, T) -> T,
    {
        if data.is_empty() {
            return Err(ResampleError::EmptySample);
        }

        let n = data.len();
        let mut indexes = IndexGenerator::new(self.strategy);
        let mut estimates = Vec::with_capacity(samples);

        for _ in 0..samples {
            let estimate = indexes
                .draw(&mut self.rng, n, n)
                .iter()
                .enumerate()
                .fold(T::zero(), |acc, (j, &idx)| {
                    // SAFETY: every drawn index lies in [0, n)
                    step(j, acc, unsafe { *data.get_unchecked(idx) })
                });
            estimates.push(estimate);
        }

        Ok(Sample::new(estimates))
    }
}

/// Iterator over resamples, see [`Bootstrapper::resamples`].
#[derive(Debug)]
pub struct Resamples<'a, T, R: Rng> {
    data: &'a [T],
    indexes: IndexGenerator,
    rng: &'a mut R,
}

impl<T: Copy, R: Rng> Iterator for Resamples<'_, T, R> {
    type Item = Sample<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.data.len();
        if n == 0 {
            return None;
        }

        let data = self.data;
        Some(
            self.indexes
                .draw(&mut *self.rng, n, n)
                .iter()
                .map(|&idx| {
                    // SAFETY: every drawn index lies in [0, n)
                    unsafe { *data.get_unchecked(idx) }
                })
                .collect(),
        )
    }
}
