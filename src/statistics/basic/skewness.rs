use num_traits::{Float, FromPrimitive};

use crate::error::Result;
use crate::sample::WeightedSample;
use crate::statistics::{Statistic, batch_moments, require_spread};

/// Weighted sample skewness (third standardized moment).
///
/// g₁ = n²/((n-1)(n-2)) · (M₃/W) / s³
///
/// The plug-in form `(M₃/W) / (M₂/W)^{3/2}` is available through
/// [`Skewness::population`]. The corrected form needs three observations.
#[derive(Debug, Clone, Copy)]
pub struct Skewness {
    /// Apply the `n²/((n-1)(n-2))` small-sample factor.
    pub unbiased: bool,
}

impl Skewness {
    /// Corrected estimator when `unbiased`, plug-in shape otherwise.
    pub fn new(unbiased: bool) -> Self {
        Self { unbiased }
    }

    /// Plug-in skewness; accepts two observations.
    pub fn population() -> Self {
        Self::new(false)
    }
}

impl Default for Skewness {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<T> Statistic<WeightedSample<T>, Result<T>> for Skewness
where
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &WeightedSample<T>) -> Result<T> {
        let required = if self.unbiased { 3 } else { 2 };
        let moments = batch_moments(data, required)?;
        require_spread(&moments)?;

        if self.unbiased {
            Ok(moments.skewness(data.len()))
        } else {
            Ok(moments.population_skewness())
        }
    }
}
