use num_traits::{Float, FromPrimitive};

use super::{OnlineStatistic, Statistic, from_usize};

/// Arithmetic mean using **Kahan summation** to keep rounding error from
/// accumulating over long samples.
///
/// Empty input yields NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl<D, T> Statistic<D, T> for Mean
where
    D: AsRef<[T]> + ?Sized,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice: &[T] = data.as_ref();

        let mut sum = T::zero();
        let mut c = T::zero();

        for &x in slice {
            let y = x - c;
            let t = sum + y;
            c = (t - sum) - y;
            sum = t;
        }

        sum * from_usize::<T>(slice.len()).recip()
    }
}

/// Running mean, `mean' = (mean * i + value) / (i + 1)`.
///
/// The built-in [`OnlineStatistic`] for
/// [`Bootstrapper::streaming_bootstrap`](crate::Bootstrapper::streaming_bootstrap);
/// [`Bootstrapper::mean`](crate::Bootstrapper::mean) applies the same update.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamingMean;

impl<T> OnlineStatistic<T> for StreamingMean
where
    T: Float + FromPrimitive,
{
    #[inline(always)]
    fn update(&self, i: usize, prev: T, value: T) -> T {
        (prev * from_usize::<T>(i) + value) / from_usize::<T>(i + 1)
    }
}
