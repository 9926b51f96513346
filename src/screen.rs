//! Image dimensions and the mapping from pixels onto the complex plane.
//!
//! The view window is fixed: pixel `size / 2` sits on the origin and
//! `size / 4` pixels span one unit, so a square image covers roughly
//! `[-2, 2]` on both axes.

use std::num::NonZeroU32;

use num::Complex;

use crate::{
    error::{Error, Result},
    pixel::PixelCoordinate,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(Error::InvalidDimension { width, height }),
        }
    }

    pub fn width(&self) -> u32 {
        self.width.get()
    }

    pub fn height(&self) -> u32 {
        self.height.get()
    }

    pub fn contains(&self, pixel: PixelCoordinate) -> bool {
        pixel.x < self.width() && pixel.y < self.height()
    }

    /// Map `pixel` to its point on the complex plane. `x` becomes the real
    /// part and `y` the imaginary part, each scaled along its own axis.
    pub fn to_complex(&self, pixel: PixelCoordinate) -> Complex<f64> {
        Complex::new(scale(pixel.x, self.width), scale(pixel.y, self.height))
    }
}

/// `(coordinate - axis_size / 2) / (axis_size / 4)`.
///
/// `axis_size / 2` is integer division (truncating), the rest is `f64`.
/// Odd sizes therefore put the origin half a pixel left of the true centre,
/// which keeps results reproducible against other integer-based renderers.
/// `coordinate` may equal `axis_size`; that yields the window's upper edge.
pub fn scale(coordinate: u32, axis_size: NonZeroU32) -> f64 {
    let axis_size = axis_size.get();
    (f64::from(coordinate) - f64::from(axis_size / 2)) / (f64::from(axis_size) / 4.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn centre_maps_to_origin() {
        for axis_size in [1, 2, 3, 7, 100, 801, 3000] {
            assert_eq!(scale(axis_size / 2, nz(axis_size)), 0.0, "axis {}", axis_size);
        }
    }

    #[test]
    fn square_window_spans_minus_two_to_two() {
        assert_eq!(scale(0, nz(4)), -2.0);
        assert_eq!(scale(4, nz(4)), 2.0);
        assert_eq!(scale(0, nz(3000)), -2.0);
        assert_eq!(scale(3000, nz(3000)), 2.0);
    }

    #[test]
    fn odd_sizes_truncate_the_half() {
        // 5 / 2 == 2, so pixel 0 sits 2 pixels left of the origin at 1.25 pixels per unit.
        assert_eq!(scale(0, nz(5)), -1.6);
        assert_eq!(scale(5, nz(5)), 2.4);
    }

    #[test]
    fn scale_is_strictly_increasing() {
        for axis_size in [1, 2, 9, 640] {
            let values: Vec<f64> = (0..=axis_size).map(|c| scale(c, nz(axis_size))).collect();
            assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            Size::new(0, 10),
            Err(Error::InvalidDimension {
                width: 0,
                height: 10
            })
        ));
        assert!(Size::new(10, 0).is_err());
        assert!(Size::new(1, 1).is_ok());
    }

    #[test]
    fn to_complex_scales_each_axis_independently() {
        let size = Size::new(400, 200).unwrap();
        let c = size.to_complex(PixelCoordinate::new(300, 50));
        assert_eq!(c, Complex::new(1.0, -1.0));
        assert!(size.contains(PixelCoordinate::new(399, 199)));
        assert!(!size.contains(PixelCoordinate::new(400, 0)));
    }
}
