//! Distribution of iteration counts over a rendered grid.

use std::io::Write;

use fnv::FnvHashMap;
use log::trace;

use crate::{error::Result, grid::IterationGrid};

#[derive(Clone, Debug, Default)]
pub struct Histogram {
    total_samples: usize,
    bucket_labels: Vec<u32>,
    histogram: FnvHashMap<u32, usize>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_grid(grid: &IterationGrid) -> Self {
        let mut histogram = Self::new();
        histogram.add(grid.counts());
        histogram
    }

    pub fn add(&mut self, iteration_counts: &[u32]) {
        trace!("begin histogram add");

        for &iteration_count in iteration_counts {
            let value = self.histogram.entry(iteration_count).or_insert_with(|| {
                self.bucket_labels.push(iteration_count);
                0
            });
            *value += 1;
            self.total_samples += 1;
        }
        self.bucket_labels.sort_unstable();

        debug_assert_eq!(self.total_samples, self.histogram.values().sum::<usize>());

        trace!("end histogram add");
    }

    pub fn total_samples(&self) -> usize {
        self.total_samples
    }

    /// `(iteration_count, samples)` pairs in ascending iteration order.
    pub fn buckets(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.bucket_labels
            .iter()
            .map(move |label| (*label, self.histogram[label]))
    }

    /// One `iterations : samples` line per bucket.
    pub fn write_to(&self, mut writer: impl Write) -> Result<()> {
        for (iteration_count, samples) in self.buckets() {
            writeln!(writer, "{} : {}", iteration_count, samples)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io};

    use super::*;
    use crate::{grid, screen};

    #[test]
    fn buckets_are_sorted_and_counted() {
        let mut histogram = Histogram::new();
        histogram.add(&[5, 1, 5, 1000, 1, 5]);
        histogram.add(&[2]);

        assert_eq!(histogram.total_samples(), 7);
        assert_eq!(
            histogram.buckets().collect::<Vec<_>>(),
            vec![(1, 2), (2, 1), (5, 3), (1000, 1)]
        );
    }

    #[test]
    fn write_to_emits_one_line_per_bucket() {
        let mut histogram = Histogram::new();
        histogram.add(&[3, 1, 3]);

        let mut output = Vec::new();
        histogram.write_to(&mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "1 : 1\n3 : 2\n");
    }

    #[test]
    fn from_grid_covers_every_pixel() {
        let size = screen::Size::new(30, 20).unwrap();
        let grid = grid::render(size, grid::Bounds::full(size), 50).unwrap();
        let histogram = Histogram::from_grid(&grid);

        assert_eq!(histogram.total_samples(), 600);
        assert_eq!(histogram.buckets().last(), Some((50, grid.in_set_count())));
    }

    #[test]
    fn histogram_file_lists_every_bucket() {
        let size = screen::Size::new(16, 16).unwrap();
        let grid = grid::render(size, grid::Bounds::full(size), 20).unwrap();
        let histogram = Histogram::from_grid(&grid);

        let file = tempfile::NamedTempFile::new().unwrap();
        histogram
            .write_to(io::BufWriter::new(file.reopen().unwrap()))
            .unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        let parsed: Vec<(u32, usize)> = contents
            .lines()
            .map(|line| {
                let (iterations, samples) = line.split_once(" : ").unwrap();
                (iterations.parse().unwrap(), samples.parse().unwrap())
            })
            .collect();

        assert_eq!(parsed, histogram.buckets().collect::<Vec<_>>());
        assert_eq!(parsed.iter().map(|(_, samples)| samples).sum::<usize>(), 256);
    }
}
