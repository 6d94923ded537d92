// Domain layer - the cellular automaton itself
pub mod domain;

// Application layer - simulation driver and termination detection
pub mod application;

// Infrastructure layer - console presentation
pub mod rendering;

pub mod error;

// Re-exports for convenience
pub use application::{Simulation, Status};
pub use domain::{Cell, Grid, Pattern, presets};
pub use error::ConfigError;
pub use rendering::{ConsolePresenter, FramePresenter};
