//! Batch estimators over a [`WeightedSample`].
//!
//! Each estimator computes the weighted central moments in two passes and
//! applies the same bias corrections as the streaming accumulator, so both
//! routes agree to rounding. Tuples of estimators are themselves estimators:
//!
//! ```
//! use wstat::{Mean, Statistic, Variance, WeightedSample};
//!
//! let sample = WeightedSample::unweighted(vec![1.0_f64, 2.0, 4.0]);
//! let (mean, var) = (Mean, Variance::default()).compute(&sample);
//! assert!((mean.unwrap() - 7.0 / 3.0).abs() < 1e-12);
//! assert!(var.is_ok());
//! ```

mod basic;
mod mean;
mod se;

pub use basic::{Kurtosis, Skewness, Variance};
pub use mean::Mean;
pub use se::StandardError;

use num_traits::{Float, FromPrimitive};

use crate::error::{Result, StatsError, require_samples, validate};
use crate::moments::CentralMoments;
use crate::sample::WeightedSample;

/// A quantity computed from a whole data set.
pub trait Statistic<D, T> {
    /// Evaluate on `data`.
    fn compute(&self, data: &D) -> T;
}

macro_rules! tuple_statistic {
    ($(($s:ident, $t:ident, $idx:tt)),+) => {
        impl<D, $($t,)+ $($s,)+> Statistic<D, ($($t,)+)> for ($($s,)+)
        where
            $($s: Statistic<D, $t>,)+
        {
            #[inline]
            fn compute(&self, data: &D) -> ($($t,)+) {
                ($(self.$idx.compute(data),)+)
            }
        }
    };
}

tuple_statistic!((S1, T1, 0));
tuple_statistic!((S1, T1, 0), (S2, T2, 1));
tuple_statistic!((S1, T1, 0), (S2, T2, 1), (S3, T3, 2));
tuple_statistic!((S1, T1, 0), (S2, T2, 1), (S3, T3, 2), (S4, T4, 3));

/// Validated two-pass moments of `sample`, which must hold `required` observations.
pub(crate) fn batch_moments<T>(sample: &WeightedSample<T>, required: usize) -> Result<CentralMoments<T>>
where
    T: Float + FromPrimitive,
{
    for (&x, &w) in sample.values().iter().zip(sample.weights()) {
        validate(x, w)?;
    }
    require_samples(required, sample.len())?;

    let moments = CentralMoments::from_weighted(sample.values(), sample.weights());
    if moments.weight().is_zero() {
        return Err(StatsError::ZeroWeightSum);
    }
    Ok(moments)
}

/// Fails when a standardized moment would divide by a zero spread.
pub(crate) fn require_spread<T: Float + FromPrimitive>(moments: &CentralMoments<T>) -> Result<()> {
    if moments.m2().is_zero() {
        return Err(StatsError::ZeroVariance);
    }
    Ok(())
}
