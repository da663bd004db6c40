use crate::{ComponentSnapshotRow, OutputResult, StepSummaryRow};

/// A sink for per-step summaries and periodic component snapshots.
///
/// Errors surface to the caller of these methods; [`SimOutputObserver`]
/// stores the first one for retrieval after the run.
///
/// [`SimOutputObserver`]: crate::SimOutputObserver
pub trait OutputWriter {
    /// Write one row per component.
    fn write_snapshots(&mut self, rows: &[ComponentSnapshotRow]) -> OutputResult<()>;

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
