use num_traits::{Float, FromPrimitive};

use super::{Mean, Statistic, from_usize};

/// Variance with a degrees-of-freedom adjustment.
#[derive(Debug, Clone, Copy)]
pub struct Variance {
    /// Subtracted from the sample size in the denominator.
    pub ddof: usize,
}

impl Variance {
    /// Creates a new `Variance` estimator with the given degrees of freedom adjustment.
    ///
    /// - `ddof = 0`: population variance (biased)
    /// - `ddof = 1`: sample variance (Bessel's correction), the default
    pub fn new(ddof: usize) -> Self {
        Variance { ddof }
    }
}

impl Default for Variance {
    fn default() -> Self {
        Variance { ddof: 1 }
    }
}

impl<D, T> Statistic<D, T> for Variance
where
    D: AsRef<[T]> + ?Sized,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice = data.as_ref();

        if slice.len() <= self.ddof {
            return T::nan();
        }

        let mean: T = Mean.compute(slice);

        // Kahan summation for squared deviations
        let mut sq_sum = T::zero();
        let mut c = T::zero();
        for &x in slice {
            let dev = x - mean;
            let y = dev * dev - c;
            let t = sq_sum + y;
            c = (t - sq_sum) - y;
            sq_sum = t;
        }

        sq_sum / from_usize::<T>(slice.len() - self.ddof)
    }
}
