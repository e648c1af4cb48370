use super::timing::TimingBreakdown;
use crate::partition::Partition;
use serde::Serialize;

/// Size of the image a run was given.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Everything a filter run did, for tooling and JSON dumps.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterReport {
    pub input: InputDescriptor,
    /// Workers requested by the caller.
    pub requested_workers: usize,
    /// Workers actually dispatched (differs when clamping is enabled).
    pub workers: usize,
    pub partitions: Vec<PartitionReport>,
    pub timings: TimingBreakdown,
}

/// Read and write row ranges of one band.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionReport {
    pub id: usize,
    pub start_row: usize,
    pub end_row: usize,
    pub write_start: usize,
    pub write_end: usize,
}

impl From<&Partition> for PartitionReport {
    fn from(p: &Partition) -> Self {
        let write = p.write_rows();
        Self {
            id: p.id,
            start_row: p.start_row,
            end_row: p.end_row,
            write_start: write.start,
            write_end: write.end,
        }
    }
}
