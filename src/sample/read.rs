use std::error::Error as StdError;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;

use super::Sample;

/// Failure while loading a [`Sample`].
#[derive(Debug)]
pub enum SampleError {
    /// The input file could not be opened.
    Open {
        /// File that was asked for.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },
    /// A record could not be read or did not parse into the observation type.
    Record(csv::Error),
    /// The input has a header but no records.
    NoRecords,
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::Open { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            SampleError::Record(e) => write!(f, "bad record: {e}"),
            SampleError::NoRecords => write!(f, "no observations after the header"),
        }
    }
}

impl StdError for SampleError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            SampleError::Open { source, .. } => Some(source),
            SampleError::Record(e) => Some(e),
            SampleError::NoRecords => None,
        }
    }
}

impl From<csv::Error> for SampleError {
    fn from(e: csv::Error) -> Self {
        SampleError::Record(e)
    }
}

impl<T: DeserializeOwned> Sample<T> {
    /// Read observations from a headered CSV file, one record per observation.
    ///
    /// A single-column file deserializes straight into scalars, so
    /// `Sample::<f64>::read("latency.csv")` works on a file with one
    /// `value` column.
    ///
    /// # Errors
    ///
    /// [`SampleError::Open`] when the file cannot be opened, otherwise as
    /// [`Sample::from_reader`].
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, SampleError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SampleError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(file)
    }

    /// Read observations from headered CSV text.
    ///
    /// # Errors
    ///
    /// [`SampleError::NoRecords`] when there are no records,
    /// [`SampleError::Record`] when one cannot be parsed.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, SampleError> {
        let data = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader)
            .deserialize()
            .collect::<Result<Vec<T>, _>>()?;

        if data.is_empty() {
            return Err(SampleError::NoRecords);
        }

        Ok(Self { data })
    }
}
