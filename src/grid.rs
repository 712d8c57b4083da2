//! Escape result grid.

use fnv::FnvHashMap;
use log::{debug, trace};
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::{
    escape::{escape_iteration, IN_SET},
    mapper::RegionMapper,
    screen::Size,
};

/// One escape value per pixel, row-major, top row first. Immutable once computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EscapeGrid {
    size: Size,
    cells: Vec<i32>,
}

impl EscapeGrid {
    /// Evaluate every pixel of `mapper`'s grid.
    ///
    /// Rows are evaluated in parallel on the current [`rayon`] pool; each task owns a
    /// disjoint row of the output.
    pub fn compute(mapper: &dyn RegionMapper, max_iterations: u32) -> Self {
        let size = mapper.size();
        trace!("begin compute {}x{}", size.width, size.height);

        let mut cells = vec![IN_SET; size.pixel_count()];
        if size.width > 0 {
            cells
                .par_chunks_mut(size.width as usize)
                .enumerate()
                .for_each(|(row, cells)| {
                    for (column, cell) in cells.iter_mut().enumerate() {
                        *cell = escape_iteration(
                            mapper.point(column as u32, row as u32),
                            max_iterations,
                        );
                    }
                });
        }

        trace!("end compute");
        Self { size, cells }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn get(&self, column: u32, row: u32) -> Option<i32> {
        if column >= self.size.width || row >= self.size.height {
            return None;
        }
        self.cells
            .get(row as usize * self.size.width as usize + column as usize)
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        // `max(1)` keeps `chunks` happy for a zero-width grid, which has no cells anyway.
        self.cells.chunks(self.size.width.max(1) as usize)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.cells
    }

    /// Native-endian `i32` cells, for handing to a renderer as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    pub fn stats(&self) -> EscapeStats {
        EscapeStats::gather(&self.cells)
    }
}

/// Summary of an [`EscapeGrid`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EscapeStats {
    pub in_set: usize,
    pub escaped: usize,
    pub min_escape: Option<i32>,
    pub max_escape: Option<i32>,
    /// Number of pixels per escape iteration.
    pub histogram: FnvHashMap<i32, usize>,
}

impl EscapeStats {
    fn gather(cells: &[i32]) -> Self {
        let mut stats = Self::default();
        for &cell in cells {
            if cell == IN_SET {
                stats.in_set += 1;
                continue;
            }
            stats.escaped += 1;
            *stats.histogram.entry(cell).or_insert(0) += 1;
            stats.min_escape = Some(stats.min_escape.map_or(cell, |min| min.min(cell)));
            stats.max_escape = Some(stats.max_escape.map_or(cell, |max| max.max(cell)));
        }

        debug_assert_eq!(stats.escaped, stats.histogram.values().sum::<usize>());
        debug!(
            "{} in set, {} escaped over {} distinct iterations",
            stats.in_set,
            stats.escaped,
            stats.histogram.len()
        );
        stats
    }

    pub fn total(&self) -> usize {
        self.in_set + self.escaped
    }
}
