//! Row partitioning for band-parallel 3×3 filtering.
//!
//! The image is cut into `worker_count` horizontal bands. Band `i` nominally
//! covers `base` rows (`base = height / worker_count`) and the last band also
//! takes the `height % worker_count` leftover rows. Every band after the first
//! is pulled up to start two rows before the previous band's end, so each
//! band reads one context row on each side and writes only its interior
//! `[start_row + 1, end_row - 1)`. With that overlap the written ranges tile
//! `[1, height - 1)` exactly once.
use crate::error::SobelError;
use std::ops::Range;

/// Smallest band that still has one writable row between its context rows.
pub const MIN_BAND_ROWS: usize = 3;

/// Half-open row range `[start_row, end_row)` read by one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partition {
    pub id: usize,
    pub start_row: usize,
    pub end_row: usize,
}

impl Partition {
    /// Rows this partition writes: everything but its first and last row.
    pub fn write_rows(&self) -> Range<usize> {
        (self.start_row + 1)..self.end_row.saturating_sub(1).max(self.start_row + 1)
    }
}

/// Split `height` rows among `worker_count` workers.
///
/// Fails with [`SobelError::InvalidConfiguration`] when `worker_count == 0`
/// or when `height < worker_count * 3`.
pub fn partition_rows(height: usize, worker_count: usize) -> Result<Vec<Partition>, SobelError> {
    if worker_count == 0 {
        return Err(SobelError::invalid_configuration(
            "worker count must be at least 1",
        ));
    }
    let min_height = worker_count.saturating_mul(MIN_BAND_ROWS);
    if height < min_height {
        return Err(SobelError::invalid_configuration(format!(
            "image height {height} is too small for {worker_count} workers \
             (need at least {min_height} rows)"
        )));
    }

    let base = height / worker_count;
    let remainder = height % worker_count;

    let mut partitions: Vec<Partition> = Vec::with_capacity(worker_count);
    for id in 0..worker_count {
        let nominal_end = (id + 1) * base;
        let end_row = if id + 1 == worker_count {
            nominal_end + remainder
        } else {
            nominal_end
        };
        let start_row = match partitions.last() {
            Some(prev) => prev.end_row - 2,
            None => 0,
        };
        partitions.push(Partition {
            id,
            start_row,
            end_row,
        });
    }
    Ok(partitions)
}
