//! Escape-time evaluation of the Mandelbrot recurrence `z ← z² + c`.

use num::Complex;

use crate::{
    error::{Error, Result},
    pixel::PixelCoordinate,
    screen::Size,
};

/// Default iteration cap.
pub const MAX_ITERATIONS: u32 = 1000;

/// Orbits with a modulus above this radius never return.
pub const ESCAPE_RADIUS: f64 = 2.0;

const ESCAPE_RADIUS_SQR: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/**
Count how many updates of `z ← z² + c`, starting from `z = 0`, happen before
`|z|` exceeds [`ESCAPE_RADIUS`], up to `max_iterations`.

The radius check runs before every update, including the first, so any
`max_iterations > 0` performs at least one update. A result equal to
`max_iterations` means the orbit did not escape within the cap; the point is
*probably* in the set.

`|z| <= 2` is tested as `|z|² <= 4`, which makes the same decision without a
square root. A NaN or infinite `z` fails the comparison and counts as escaped.

An orbit that lands exactly on an earlier value is periodic and can never
escape, so it returns `max_iterations` straight away. Earlier values are
sampled at power-of-two intervals, which finds every exact cycle without
remembering the whole orbit.

Points close to the boundary of the set are sensitive to floating point
precision; other precisions may disagree on them.
*/
pub fn iterations_for(c: Complex<f64>, max_iterations: u32) -> u32 {
    let mut z = Complex::new(0.0, 0.0);
    let mut iterations = 0;

    let mut saved = z;
    let mut since_saved: u64 = 0;
    let mut save_interval: u64 = 1;

    while z.norm_sqr() <= ESCAPE_RADIUS_SQR && iterations < max_iterations {
        z = z * z + c;
        iterations += 1;

        if z == saved {
            return max_iterations;
        }
        since_saved += 1;
        if since_saved == save_interval {
            saved = z;
            since_saved = 0;
            save_interval *= 2;
        }
    }

    iterations
}

pub fn iterations_for_parts(real: f64, imaginary: f64, max_iterations: u32) -> u32 {
    iterations_for(Complex::new(real, imaginary), max_iterations)
}

/// Scale pixel `(x, y)` of a `width` × `height` image onto the complex plane
/// and evaluate it.
pub fn get_iterations(x: u32, y: u32, width: u32, height: u32, max_iterations: u32) -> Result<u32> {
    let size = Size::new(width, height)?;
    let pixel = PixelCoordinate::new(x, y);
    if !size.contains(pixel) {
        return Err(Error::PixelOutOfBounds {
            x,
            y,
            width,
            height,
        });
    }

    Ok(iterations_for(size.to_complex(pixel), max_iterations))
}
