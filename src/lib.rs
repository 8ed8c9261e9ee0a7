//! Nonparametric bootstrap resampling over numeric samples.
//!
//! A [`Bootstrapper`] owns a seeded random source and draws resamples with
//! replacement, each the size of the input. Three strategies evaluate a
//! statistic over every resample:
//!
//! - [`Bootstrapper::mean`]: running mean, no resample buffer.
//! - [`Bootstrapper::bootstrap`]: any whole-sample [`Statistic`] over a
//!   materialized resample.
//! - [`Bootstrapper::streaming_bootstrap`]: any [`OnlineStatistic`] folded
//!   value by value.
//!
//! ```
//! use bootstraps::{Bootstrapper, StreamingMean};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let data: Vec<f64> = (0..100).map(f64::from).collect();
//! let mut bs = Bootstrapper::new(StdRng::seed_from_u64(7));
//!
//! let means = bs.streaming_bootstrap(&data, 500, StreamingMean).unwrap();
//! assert_eq!(means.len(), 500);
//! ```

mod resample;
mod sample;
mod statistics;

pub use crate::resample::*;
pub use crate::sample::{Sample, SampleError};
pub use crate::statistics::*;
pub use rand;
