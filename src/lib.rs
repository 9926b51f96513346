//! Escape-time evaluation of the Mandelbrot set over a pixel grid.

pub mod error;
pub mod escape;
pub mod grid;
pub mod histogram;
pub mod pixel;
pub mod screen;

pub use error::{Error, Result};
pub use num::Complex;
pub use escape::{get_iterations, iterations_for, iterations_for_parts, MAX_ITERATIONS};
pub use pixel::{IterationResult, PixelCoordinate};
pub use screen::scale;
