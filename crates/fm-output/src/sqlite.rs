//! SQLite output backend (feature `sqlite`).
//!
//! Creates `output.db` in the output directory with two tables,
//! `step_summaries` and `component_snapshots`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{ComponentSnapshotRow, OutputResult, StepSummaryRow};

pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS step_summaries (
                 step                      INTEGER PRIMARY KEY,
                 critical                  INTEGER NOT NULL,
                 warning                   INTEGER NOT NULL,
                 normal                    INTEGER NOT NULL,
                 total_replacement_options INTEGER NOT NULL,
                 status_messages           INTEGER NOT NULL,
                 replacement_requests      INTEGER NOT NULL,
                 rejected_requests         INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS component_snapshots (
                 agent_id               INTEGER NOT NULL,
                 step                   INTEGER NOT NULL,
                 part_id                INTEGER NOT NULL,
                 serial_id              INTEGER NOT NULL,
                 urgency                INTEGER NOT NULL,
                 utilization_ratio      REAL    NOT NULL,
                 available_replacements INTEGER NOT NULL,
                 best_replacement       INTEGER NOT NULL,
                 replacement_priority   INTEGER NOT NULL,
                 pending_requests       INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[ComponentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO component_snapshots \
                 (agent_id, step, part_id, serial_id, urgency, utilization_ratio, \
                  available_replacements, best_replacement, replacement_priority, pending_requests) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent_id,
                    row.step as i64,
                    row.part_id,
                    row.serial_id,
                    row.urgency,
                    row.utilization_ratio as f64,
                    row.available_replacements,
                    row.best_replacement,
                    row.replacement_priority,
                    row.pending_requests,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO step_summaries \
             (step, critical, warning, normal, total_replacement_options, \
              status_messages, replacement_requests, rejected_requests) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                row.step as i64,
                row.critical,
                row.warning,
                row.normal,
                row.total_replacement_options as i64,
                row.status_messages as i64,
                row.replacement_requests as i64,
                row.rejected_requests as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
