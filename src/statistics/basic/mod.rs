mod variance;
mod skewness;
mod kurtosis;

pub use variance::Variance;
pub use skewness::Skewness;
pub use kurtosis::Kurtosis;
