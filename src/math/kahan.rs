use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Compensated (Kahan) running sum.
///
/// Tracks the low-order bits lost by each addition so that long streams of
/// values with a wide dynamic range sum to within a few ulps of the exact result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KahanSum<T> {
    sum: T,
    compensation: T,
}

impl<T: Float> Default for KahanSum<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> KahanSum<T> {
    /// Empty sum.
    pub fn new() -> Self {
        Self {
            sum: T::zero(),
            compensation: T::zero(),
        }
    }

    /// Add one term.
    #[inline]
    pub fn add(&mut self, x: T) {
        let y = x - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    /// Fold another compensated sum into this one.
    pub fn merge(&mut self, other: &Self) {
        self.add(other.sum);
        self.add(-other.compensation);
    }

    /// Current value of the sum.
    #[inline]
    pub fn sum(&self) -> T {
        self.sum
    }
}

impl<T: Float> FromIterator<T> for KahanSum<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut acc = Self::new();
        for x in iter {
            acc.add(x);
        }
        acc
    }
}
