use std::error::Error as StdError;
use std::fmt;

mod bootstrap;
mod indexes;

pub use bootstrap::{Bootstrapper, Resamples};
pub use indexes::IndexStrategy;

/// Failure of a resampling call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResampleError {
    /// The input has no observations to draw from.
    EmptySample,
}

impl fmt::Display for ResampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResampleError::EmptySample => write!(f, "cannot resample an empty sample"),
        }
    }
}

impl StdError for ResampleError {}
