//! Parameters for a filter run.
use crate::partition::MIN_BAND_ROWS;
use log::warn;
use serde::Deserialize;

/// Filter-wide parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SobelParams {
    /// Number of bands, and therefore worker threads (>= 1).
    pub workers: usize,
    /// Lower `workers` to what the image height can support instead of
    /// failing with `InvalidConfiguration`.
    pub clamp_workers: bool,
}

impl Default for SobelParams {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism().map_or(1, |n| n.get()),
            clamp_workers: false,
        }
    }
}

impl SobelParams {
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            clamp_workers: false,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_clamp_workers(mut self, clamp: bool) -> Self {
        self.clamp_workers = clamp;
        self
    }

    /// Worker count to partition with for an image of `height` rows.
    ///
    /// Without clamping this is `workers` unchanged, and the partitioner
    /// rejects counts the height cannot support. With clamping the count is
    /// reduced to `max(1, height / 3)`; a zero count is still passed through
    /// so it is reported as a configuration error.
    pub fn effective_workers(&self, height: usize) -> usize {
        if !self.clamp_workers || self.workers == 0 {
            return self.workers;
        }
        let supported = (height / MIN_BAND_ROWS).max(1);
        if self.workers > supported {
            warn!(
                "SobelParams: clamping workers {} -> {} for height {}",
                self.workers, supported, height
            );
            supported
        } else {
            self.workers
        }
    }
}
