//! Function shapes accepted by the resampling strategies.
//!
//! [`Statistic`] reduces a whole sample to a value; [`OnlineStatistic`]
//! folds one value at a time. Closures and plain functions implement both,
//! so callers rarely need a named type.

use num_traits::FromPrimitive;

mod mean;
mod variance;

pub use mean::{Mean, StreamingMean};
pub use variance::Variance;

/// A statistic evaluated over a complete sample.
///
/// Implemented for every `Fn(&D) -> T`.
pub trait Statistic<D: ?Sized, T> {
    /// Evaluate the statistic over `data`.
    fn compute(&self, data: &D) -> T;
}

impl<D, T, F> Statistic<D, T> for F
where
    D: ?Sized,
    F: Fn(&D) -> T,
{
    #[inline]
    fn compute(&self, data: &D) -> T {
        self(data)
    }
}

/// A statistic computed incrementally, one observation at a time.
///
/// `update(i, prev, value)` receives the 0-based position `i` of `value`
/// within the sequence, the value returned for position `i - 1` (zero for
/// the first call) and the new observation. After the last call the
/// accumulator must equal the whole-sample statistic over everything seen;
/// nothing checks this.
///
/// Implemented for every `Fn(usize, T, T) -> T`.
pub trait OnlineStatistic<T> {
    /// Fold `value` into the accumulator `prev`.
    fn update(&self, i: usize, prev: T, value: T) -> T;
}

impl<T, F> OnlineStatistic<T> for F
where
    F: Fn(usize, T, T) -> T,
{
    #[inline]
    fn update(&self, i: usize, prev: T, value: T) -> T {
        self(i, prev, value)
    }
}

/// Convert a count to the scalar type.
///
/// # Panics
///
/// When `T` cannot represent `u`.
#[inline(always)]
pub(crate) fn from_usize<T: FromPrimitive>(u: usize) -> T {
    T::from_usize(u).expect("count not representable in the scalar type")
}
