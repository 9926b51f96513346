use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    #[error("pixel ({x}, {y}) lies outside a {width}x{height} image")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("bounds ({x0}, {y0})..({x1}, {y1}) do not describe a non-empty region of a {width}x{height} image")]
    InvalidBounds {
        x0: u32,
        y0: u32,
        x1: u32,
        y1: u32,
        width: u32,
        height: u32,
    },

    #[error("failed to build thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
