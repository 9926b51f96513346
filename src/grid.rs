//! Bulk evaluation of a pixel rectangle.

use std::io::Write;

use log::{debug, trace};
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::{
    error::{Error, Result},
    escape,
    pixel::{IterationResult, PixelCoordinate},
    screen,
};

/// A pixel rectangle: `upper_left` inclusive, `lower_right` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub upper_left: PixelCoordinate,
    pub lower_right: PixelCoordinate,
}

impl Bounds {
    pub fn new(upper_left: PixelCoordinate, lower_right: PixelCoordinate) -> Self {
        Self {
            upper_left,
            lower_right,
        }
    }

    pub fn full(screen_size: screen::Size) -> Self {
        Self {
            upper_left: PixelCoordinate::new(0, 0),
            lower_right: PixelCoordinate::new(screen_size.width(), screen_size.height()),
        }
    }

    pub fn width(&self) -> u32 {
        self.lower_right.x.saturating_sub(self.upper_left.x)
    }

    pub fn height(&self) -> u32 {
        self.lower_right.y.saturating_sub(self.upper_left.y)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn contains(&self, pixel: PixelCoordinate) -> bool {
        (self.upper_left.x..self.lower_right.x).contains(&pixel.x)
            && (self.upper_left.y..self.lower_right.y).contains(&pixel.y)
    }

    fn check(&self, screen_size: screen::Size) -> Result<()> {
        if self.is_empty()
            || self.lower_right.x > screen_size.width()
            || self.lower_right.y > screen_size.height()
        {
            return Err(Error::InvalidBounds {
                x0: self.upper_left.x,
                y0: self.upper_left.y,
                x1: self.lower_right.x,
                y1: self.lower_right.y,
                width: screen_size.width(),
                height: screen_size.height(),
            });
        }
        Ok(())
    }
}

/// Iteration counts for every pixel of a [`Bounds`], stored row-major in a
/// single buffer.
#[derive(Clone, Debug)]
pub struct IterationGrid {
    bounds: Bounds,
    max_iterations: u32,
    iteration_counts: Vec<u32>,
}

impl IterationGrid {
    /// Row-major counts; the entry for `(x, y)` is at
    /// `(y - y0) * bounds.width() + (x - x0)`.
    pub fn counts(&self) -> &[u32] {
        &self.iteration_counts
    }

    /// Count for an absolute pixel, or `None` outside the bounds.
    pub fn get(&self, pixel: PixelCoordinate) -> Option<u32> {
        if !self.bounds.contains(pixel) {
            return None;
        }
        let x = (pixel.x - self.bounds.upper_left.x) as usize;
        let y = (pixel.y - self.bounds.upper_left.y) as usize;
        Some(self.iteration_counts[y * self.bounds.width() as usize + x])
    }

    pub fn results(&self) -> impl Iterator<Item = IterationResult> + '_ {
        let width = self.bounds.width() as usize;
        let Bounds { upper_left, .. } = self.bounds;
        self.iteration_counts
            .iter()
            .enumerate()
            .map(move |(index, &iteration_count)| IterationResult {
                pixel: PixelCoordinate::new(
                    upper_left.x + (index % width) as u32,
                    upper_left.y + (index / width) as u32,
                ),
                iteration_count,
            })
    }

    /// Pixels that hit the iteration cap.
    pub fn in_set_count(&self) -> usize {
        self.iteration_counts
            .iter()
            .filter(|&&count| count == self.max_iterations)
            .count()
    }

    /// Write [`counts`](Self::counts) as raw native-endian `u32`s.
    pub fn write_raw(&self, mut writer: impl Write) -> Result<()> {
        writer.write_all(bytemuck::cast_slice(self.iteration_counts.as_slice()))?;
        writer.flush()?;
        Ok(())
    }
}

/// Evaluate every pixel of `bounds`, where pixels are mapped onto the complex
/// plane relative to the full `screen_size`.
///
/// Rows are rendered in parallel on the current rayon pool; each row owns its
/// slice of the output buffer.
pub fn render(
    screen_size: screen::Size,
    bounds: Bounds,
    max_iterations: u32,
) -> Result<IterationGrid> {
    trace!("begin render");
    bounds.check(screen_size)?;
    debug!(
        "rendering {:?} of {}x{} with max_iterations={}",
        bounds,
        screen_size.width(),
        screen_size.height(),
        max_iterations
    );

    let width = bounds.width() as usize;
    let mut iteration_counts = vec![0; width * bounds.height() as usize];

    iteration_counts
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, counts)| {
            let y = bounds.upper_left.y + row as u32;
            for (column, count) in counts.iter_mut().enumerate() {
                let pixel = PixelCoordinate::new(bounds.upper_left.x + column as u32, y);
                *count = escape::iterations_for(screen_size.to_complex(pixel), max_iterations);
            }
        });

    trace!("end render");
    Ok(IterationGrid {
        bounds,
        max_iterations,
        iteration_counts,
    })
}
