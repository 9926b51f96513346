#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelCoordinate {
    pub x: u32,
    pub y: u32,
}

impl PixelCoordinate {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Escape iteration count for a single pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IterationResult {
    pub pixel: PixelCoordinate,
    pub iteration_count: u32,
}
