//! Run diagnostics returned by [`SobelFilter::run_with_report`](crate::SobelFilter::run_with_report).
//!
//! `FilterReport` records the input size, the band layout the run used, and a
//! stage-by-stage timing breakdown. All types serialize to camelCase JSON.

pub mod report;
pub mod timing;

pub use report::{FilterReport, InputDescriptor, PartitionReport};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
