use thiserror::Error;

/// Invalid simulation parameters, rejected at construction time before the
/// run loop starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {height}x{width}")]
    Dimensions { height: usize, width: usize },

    #[error("initial live-cell rate must be within 0.0..=1.0, got {0}")]
    Rate(f64),

    #[error("step interval must be a finite, non-negative number of seconds, got {0}")]
    Interval(f64),
}
