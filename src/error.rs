use num_traits::Float;
use thiserror::Error;

use crate::math::to_f64;

/// Failure of an ingestion call or a statistic query.
///
/// Every error is raised synchronously by the offending call. A failed
/// ingestion leaves the accumulator exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// A weight was negative, NaN or infinite.
    #[error("invalid weight {0}: weights must be non-negative")]
    InvalidWeight(f64),

    /// Bulk ingestion got value and weight sequences of different lengths.
    #[error("length mismatch: {values} values but {weights} weights")]
    LengthMismatch {
        /// Number of values supplied.
        values: usize,
        /// Number of weights supplied.
        weights: usize,
    },

    /// A query needing at least one observation was issued on an empty accumulator.
    #[error("empty accumulator")]
    EmptyAccumulator,

    /// A query needing `required` observations was issued with fewer available.
    #[error("insufficient samples: {required} required, {available} available")]
    InsufficientSamples {
        /// Minimum number of observations the query needs.
        required: usize,
        /// Number of observations currently held.
        available: usize,
    },

    /// A value was NaN or infinite.
    #[error("non-finite value {0}")]
    NonFiniteValue(f64),

    /// Every accepted observation carried weight zero, so the mean is undefined.
    #[error("sum of weights is zero")]
    ZeroWeightSum,

    /// Standardized moments are undefined when all values coincide.
    #[error("null variance")]
    ZeroVariance,

    /// Confidence level outside the open interval (0, 1).
    #[error("confidence level {0} outside (0, 1)")]
    InvalidConfidence(f64),

    /// A reference distribution could not be constructed.
    #[error("distribution error: {0}")]
    Distribution(String),
}

/// Shorthand for results carrying a [`StatsError`].
pub type Result<T, E = StatsError> = std::result::Result<T, E>;

/// Fails with the appropriate error unless `available >= required`.
pub(crate) fn require_samples(required: usize, available: usize) -> Result<()> {
    if available == 0 {
        Err(StatsError::EmptyAccumulator)
    } else if available < required {
        Err(StatsError::InsufficientSamples { required, available })
    } else {
        Ok(())
    }
}

/// Checks one observation before it is allowed to touch any running state.
pub(crate) fn validate<T: Float>(value: T, weight: T) -> Result<()> {
    if !(weight.is_finite() && weight >= T::zero()) {
        return Err(StatsError::InvalidWeight(to_f64(weight)));
    }
    if !value.is_finite() {
        return Err(StatsError::NonFiniteValue(to_f64(value)));
    }
    Ok(())
}
