use num_traits::{Float, FromPrimitive};

use crate::error::Result;
use crate::sample::WeightedSample;
use crate::statistics::{Statistic, batch_moments, require_spread};

/// Weighted sample excess kurtosis (fourth standardized moment minus 3).
///
/// g₂ = n²(n+1)/((n-1)(n-2)(n-3)) · (M₄/W) / s⁴ - 3(n-1)²/((n-2)(n-3))
///
/// A normal population scores zero. Both forms fail with
/// [`StatsError::ZeroVariance`](crate::StatsError::ZeroVariance) on constant data.
#[derive(Debug, Clone, Copy)]
pub struct Kurtosis {
    /// Apply the small-sample correction, which needs four observations.
    pub unbiased: bool,
}

impl Kurtosis {
    /// Corrected excess kurtosis when `unbiased`, plug-in `(M₄/W)/(M₂/W)² - 3` otherwise.
    pub fn new(unbiased: bool) -> Self {
        Self { unbiased }
    }

    /// Plug-in excess kurtosis; accepts two observations.
    pub fn population() -> Self {
        Self::new(false)
    }
}

impl Default for Kurtosis {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<T> Statistic<WeightedSample<T>, Result<T>> for Kurtosis
where
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &WeightedSample<T>) -> Result<T> {
        let required = if self.unbiased { 4 } else { 2 };
        let moments = batch_moments(data, required)?;
        require_spread(&moments)?;

        if self.unbiased {
            Ok(moments.kurtosis(data.len()))
        } else {
            Ok(moments.population_kurtosis())
        }
    }
}
