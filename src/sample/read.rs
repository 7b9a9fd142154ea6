use std::path::Path;

use csv::ReaderBuilder;
use num_traits::Float;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::WeightedSample;

/// Failure while loading observations from disk.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The file could not be opened, read or parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// The file has a header but no records.
    #[error("CSV file contains no data records")]
    EmptyFile,
}

/// One CSV record: a `value` column and an optional `weight` column.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Float + Deserialize<'de>"))]
pub struct Observation<T> {
    /// Observed value.
    pub value: T,
    /// Weight; one when the column is absent.
    #[serde(default = "unit_weight")]
    pub weight: T,
}

fn unit_weight<T: Float>() -> T {
    T::one()
}

impl<T> WeightedSample<T> {
    /// Read observations from a headed CSV file.
    ///
    /// Records are matched by column name, so extra columns are ignored and
    /// a missing `weight` column means every observation has weight one.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, SampleError>
    where
        T: Float + DeserializeOwned,
    {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let records = rdr
            .deserialize::<Observation<T>>()
            .collect::<Result<Vec<_>, _>>()?;

        if records.is_empty() {
            return Err(SampleError::EmptyFile);
        }

        Ok(records.into_iter().collect())
    }
}
