//! Numeric helpers shared by the streaming and batch estimators.

mod kahan;

pub use kahan::KahanSum;

use num_traits::{Float, FromPrimitive};

/// Convert a sample count to the scalar type.
///
/// Exact for every count that fits in memory when `T` is `f32` or `f64`.
#[inline]
pub(crate) fn from_usize<T: FromPrimitive>(n: usize) -> T {
    T::from_usize(n).expect("usize fits in float")
}

/// Lossy view of a scalar as `f64`, used for error payloads and `statrs` calls.
#[inline]
pub(crate) fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
