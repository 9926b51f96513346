mod cli;

use std::{fs, io};

use anyhow::Context;
use clap::Parser;
use escape_time::{
    grid::{self, Bounds},
    histogram::Histogram,
    screen,
};
use log::info;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let (width, height) = cli.dimensions();
    let screen_size = screen::Size::new(width, height)?;
    let bounds = cli.region.unwrap_or_else(|| Bounds::full(screen_size));
    let threads = cli.threads.unwrap_or_else(num_cpus::get);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(escape_time::Error::from)?;

    info!(
        "rendering {}x{} ({:?}) with max_iterations={} on {} threads",
        width, height, bounds, cli.max_iterations, threads
    );
    let iteration_grid = pool.install(|| grid::render(screen_size, bounds, cli.max_iterations))?;
    info!(
        "{} of {} pixels reached the iteration cap",
        iteration_grid.in_set_count(),
        iteration_grid.counts().len()
    );

    if let Some(path) = &cli.output {
        let file =
            fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
        iteration_grid
            .write_raw(io::BufWriter::new(file))
            .with_context(|| format!("writing {}", path.display()))?;
    }

    let histogram = Histogram::from_grid(&iteration_grid);
    match &cli.histogram {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            histogram
                .write_to(io::BufWriter::new(file))
                .with_context(|| format!("writing {}", path.display()))?;
        }
        None => histogram.write_to(io::stdout().lock())?,
    }

    Ok(())
}
