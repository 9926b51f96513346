use std::path::PathBuf;

use clap::Parser;
use escape_time::{grid::Bounds, PixelCoordinate, MAX_ITERATIONS};

#[derive(Debug, Parser)]
#[command(
    name = "escape-time",
    about = "Count Mandelbrot escape iterations over a pixel grid",
    version
)]
pub struct Cli {
    /// Image width in pixels
    #[arg(short = 'W', long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value_t = 800)]
    pub height: u32,

    /// Square image size; overrides --width and --height
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Iteration cap per pixel
    #[arg(short, long = "max-iterations", default_value_t = MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Only evaluate the pixels X0,Y0 (inclusive) to X1,Y1 (exclusive)
    #[arg(long, value_name = "X0,Y0,X1,Y1", value_parser = parse_bounds)]
    pub region: Option<Bounds>,

    /// Write the iteration histogram here instead of stdout
    #[arg(long, value_name = "FILE")]
    pub histogram: Option<PathBuf>,

    /// Write the raw row-major u32 iteration buffer (native endian)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn dimensions(&self) -> (u32, u32) {
        match self.size {
            Some(size) => (size, size),
            None => (self.width, self.height),
        }
    }
}

fn parse_bounds(value: &str) -> Result<Bounds, String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<u32>().map_err(|e| format!("{:?}: {}", part, e)))
        .collect::<Result<Vec<_>, _>>()?;

    match parts[..] {
        [x0, y0, x1, y1] => Ok(Bounds::new(
            PixelCoordinate::new(x0, y0),
            PixelCoordinate::new(x1, y1),
        )),
        _ => Err(format!("expected four comma separated values, got {}", parts.len())),
    }
}
