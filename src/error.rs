//! Error types.

use thiserror::Error;

/// A configuration that cannot be computed. Detected before any work starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("real axis range is empty: min {min} must be less than max {max}")]
    EmptyRealRange { min: f64, max: f64 },

    #[error("imaginary axis range is empty: min {min} must be less than max {max}")]
    EmptyImaginaryRange { min: f64, max: f64 },

    #[error("resolution must be at least 1 pixel per unit")]
    ZeroResolution,

    #[error("pixel count on the real axis must be at least 1")]
    ZeroPixels,

    #[error("window is too flat: {re_pixels} real pixels give 0 imaginary pixels")]
    ZeroDerivedPixels { re_pixels: u32 },

    #[error("grid of {width}x{height} pixels is too large")]
    GridTooLarge { width: f64, height: f64 },

    #[error("maximum iteration count must be at least 1")]
    ZeroIterations,

    #[error(
        "maximum iteration count {0} does not fit the escape grid (at most {max})",
        max = crate::escape::MAX_ITERATIONS
    )]
    TooManyIterations(u32),

    #[error("colour table needs at least 2 iterations, got {0}")]
    DegenerateColourTable(u32),

    #[error("colour maximum must be positive, got {0}")]
    NonPositiveColourMax(f64),

    #[error("thread count must be at least 1")]
    ZeroThreads,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
