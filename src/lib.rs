//! Weighted online statistics.
//!
//! [`WeightedStatistics`] accumulates `(value, weight)` observations in O(1)
//! space and reports count, weight sum, extrema, mean, variance, standard
//! deviation, skewness, excess kurtosis and the standard error of the mean.
//! The same bias-corrected estimators are available as batch [`Statistic`]s
//! over an owned [`WeightedSample`].
//!
//! ```
//! use wstat::WeightedStatistics;
//!
//! let data = [3.0, 4.0, 5.0, 2.0, 3.0, 4.0, 5.0, 6.0, 4.0, 7.0];
//! let mut stats = WeightedStatistics::<f64>::new();
//! stats.add_weighted_sequence(&data, &[1.0; 10]).unwrap();
//!
//! assert!((stats.variance().unwrap() - 2.233_333_333_33).abs() < 1e-9);
//! assert!((stats.skewness().unwrap() - 0.359_543_071_407).abs() < 1e-9);
//! assert!((stats.kurtosis().unwrap() + 0.151_799_637_209).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon`: parallel bulk ingestion via
//!   `WeightedStatistics::par_from_weighted_sequence`

mod accumulator;
mod display;
mod error;
mod interval;
mod math;
mod moments;
mod sample;
mod statistics;

pub use accumulator::WeightedStatistics;
pub use error::{Result, StatsError};
pub use interval::Interval;
pub use math::KahanSum;
pub use moments::CentralMoments;
pub use sample::{Observation, SampleError, WeightedSample};
pub use statistics::*;
