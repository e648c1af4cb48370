//! Band-parallel Sobel filter.
//!
//! Overview
//! - Partitions the image rows into one band per worker (see
//!   [`partition`](crate::partition)).
//! - Allocates the output once, zero-filled, which also fixes the border
//!   pixels: rows `0` and `height - 1` and columns `0` and `width - 1` have no
//!   full 3×3 neighbourhood and always read 0.
//! - Splits the output into disjoint mutable bands and runs one worker per
//!   band on a dedicated thread pool. The input is shared read-only.
//! - Returns the output only after the pool scope has joined every worker.
//!
//! Because the bands never overlap, workers write without locks or atomics.
//! Results are byte-identical for every worker count.
//!
//! Failure modes, all fatal and all reported before the output escapes:
//! an input view whose rows do not fit its data, invalid worker count or too
//! small an image, output allocation failure, and thread pool construction
//! failure.

pub mod params;

pub use params::SobelParams;

use crate::diagnostics::{elapsed_ms, FilterReport, InputDescriptor, TimingBreakdown};
use crate::error::SobelError;
use crate::image::{GrayImageU8, ImageU8};
use crate::partition::{partition_rows, Partition};
use crate::worker::run_band;
use log::debug;
use std::ops::Range;
use std::time::Instant;

/// Value stored in pixels the kernel cannot be evaluated at.
pub const BORDER_VALUE: u8 = 0;

/// Apply the Sobel operator to `input` using `worker_count` parallel workers.
pub fn apply_sobel(input: ImageU8<'_>, worker_count: usize) -> Result<GrayImageU8, SobelError> {
    SobelFilter::new(SobelParams::new(worker_count)).run(input)
}

/// Reusable filter configured by [`SobelParams`].
#[derive(Clone, Debug)]
pub struct SobelFilter {
    params: SobelParams,
}

impl Default for SobelFilter {
    fn default() -> Self {
        Self::new(SobelParams::default())
    }
}

impl SobelFilter {
    pub fn new(params: SobelParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SobelParams {
        &self.params
    }

    /// Filter `input`, returning a freshly allocated gradient magnitude image.
    pub fn run(&self, input: ImageU8<'_>) -> Result<GrayImageU8, SobelError> {
        self.run_with_report(input).map(|(output, _)| output)
    }

    /// Filter `input` and describe the band layout and stage timings used.
    pub fn run_with_report(
        &self,
        input: ImageU8<'_>,
    ) -> Result<(GrayImageU8, FilterReport), SobelError> {
        input.check_layout()?;
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let stage_start = Instant::now();
        let workers = self.params.effective_workers(input.h);
        let partitions = partition_rows(input.h, workers)?;
        timings.push("partition", elapsed_ms(stage_start));
        debug!(
            "SobelFilter::run {}x{} workers={} partitions={:?}",
            input.w,
            input.h,
            workers,
            partitions
                .iter()
                .map(|p| (p.start_row, p.end_row))
                .collect::<Vec<_>>()
        );

        let stage_start = Instant::now();
        let mut output = GrayImageU8::try_filled(input.w, input.h, BORDER_VALUE)?;
        timings.push("allocate", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        dispatch(input, &mut output, &partitions)?;
        timings.push("convolve", elapsed_ms(stage_start));

        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "SobelFilter::run done total_ms={:.3} convolve_ms={:.3}",
            timings.total_ms,
            timings.stage_ms("convolve").unwrap_or_default()
        );

        let report = FilterReport {
            input: InputDescriptor {
                width: input.w,
                height: input.h,
            },
            requested_workers: self.params.workers,
            workers,
            partitions: partitions.iter().map(Into::into).collect(),
            timings,
        };
        Ok((output, report))
    }
}

/// Run one worker per partition and join them all.
///
/// On error nothing has been spawned yet; on success every band has been
/// written when this returns.
fn dispatch(
    input: ImageU8<'_>,
    output: &mut GrayImageU8,
    partitions: &[Partition],
) -> Result<(), SobelError> {
    if input.w < 3 {
        debug!("SobelFilter::run width {} has no interior columns", input.w);
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(partitions.len())
        .thread_name(|i| format!("sobel-band-{i}"))
        .build()?;

    let ranges: Vec<Range<usize>> = partitions.iter().map(Partition::write_rows).collect();
    let bands = output.bands_mut(&ranges);
    pool.scope(|scope| {
        for (mut band, partition) in bands.into_iter().zip(partitions) {
            scope.spawn(move |_| run_band(&input, &mut band, partition));
        }
    });
    Ok(())
}
