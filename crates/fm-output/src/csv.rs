//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `step_summaries.csv`
//! - `component_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ComponentSnapshotRow, OutputResult, StepSummaryRow};

pub const SUMMARY_HEADER: [&str; 8] = [
    "step",
    "critical",
    "warning",
    "normal",
    "total_replacement_options",
    "status_messages",
    "replacement_requests",
    "rejected_requests",
];

pub const SNAPSHOT_HEADER: [&str; 10] = [
    "agent_id",
    "step",
    "part_id",
    "serial_id",
    "urgency",
    "utilization_ratio",
    "available_replacements",
    "best_replacement",
    "replacement_priority",
    "pending_requests",
];

pub struct CsvWriter {
    summaries: Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files, and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("component_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        Ok(Self { summaries, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[ComponentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.step.to_string(),
                row.part_id.to_string(),
                row.serial_id.to_string(),
                row.urgency.to_string(),
                format!("{:.4}", row.utilization_ratio),
                row.available_replacements.to_string(),
                row.best_replacement.to_string(),
                row.replacement_priority.to_string(),
                row.pending_requests.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.critical.to_string(),
            row.warning.to_string(),
            row.normal.to_string(),
            row.total_replacement_options.to_string(),
            row.status_messages.to_string(),
            row.replacement_requests.to_string(),
            row.rejected_requests.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
