//! Integration tests for fm-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_HEADER, SUMMARY_HEADER};
    use crate::row::{ComponentSnapshotRow, StepSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, step: u64) -> ComponentSnapshotRow {
        ComponentSnapshotRow {
            agent_id,
            step,
            part_id:                7,
            serial_id:              agent_id * 10,
            urgency:                4,
            utilization_ratio:      0.5,
            available_replacements: 2,
            best_replacement:       9,
            replacement_priority:   0,
            pending_requests:       0,
        }
    }

    fn summary_row(step: u64) -> StepSummaryRow {
        StepSummaryRow {
            step,
            critical:                  3,
            warning:                   5,
            normal:                    92,
            total_replacement_options: 11,
            status_messages:           40,
            replacement_requests:      3,
            rejected_requests:         0,
        }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created_in_missing_dir() {
        let dir = tmp();
        let out = dir.path().join("nested/out");
        let _w = CsvWriter::new(&out).unwrap();
        assert!(out.join("step_summaries.csv").exists());
        assert!(out.join("component_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(dir.path().join("step_summaries.csv")), SUMMARY_HEADER);
        assert_eq!(headers(dir.path().join("component_snapshots.csv")), SNAPSHOT_HEADER);
    }

    #[test]
    fn csv_snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("component_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][1], "5");       // step
        assert_eq!(&rows[1][3], "10");      // serial_id
        assert_eq!(&rows[2][5], "0.5000");  // utilization_ratio
        assert_eq!(&rows[2][7], "9");       // best_replacement
    }

    #[test]
    fn csv_step_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_step_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][3], "92");
        assert_eq!(&rows[0][4], "11");
    }

    #[test]
    fn csv_finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use fm_agent::generate_fleet;
    use fm_core::SimConfig;
    use fm_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::{CsvWriter, SimOutputObserver};

    fn run(dir: &TempDir, steps: u64, interval: u64, count: usize) {
        let mut config = SimConfig::new(steps, 3);
        config.output_interval_steps = interval;
        let mut sim = SimBuilder::new(config, generate_fleet(count, 3)).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
    }

    fn row_count(path: std::path::PathBuf) -> usize {
        csv::Reader::from_path(path).unwrap().records().count()
    }

    #[test]
    fn one_summary_per_step() {
        let dir = tempfile::tempdir().unwrap();
        run(&dir, 4, 0, 20);
        assert_eq!(row_count(dir.path().join("step_summaries.csv")), 4);
        assert_eq!(row_count(dir.path().join("component_snapshots.csv")), 0);
    }

    #[test]
    fn snapshots_at_interval() {
        let dir = tempfile::tempdir().unwrap();
        // Snapshot steps 0 and 2.
        run(&dir, 4, 2, 20);
        assert_eq!(row_count(dir.path().join("component_snapshots.csv")), 40);
    }

    #[test]
    fn summary_counts_cover_population() {
        let dir = tempfile::tempdir().unwrap();
        run(&dir, 2, 0, 30);
        let mut rdr = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        for rec in rdr.records() {
            let rec = rec.unwrap();
            let total: u32 = (1..=3).map(|i| rec[i].parse::<u32>().unwrap()).sum();
            assert_eq!(total, 30);
        }
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use rusqlite::Connection;

    use crate::row::{ComponentSnapshotRow, StepSummaryRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    #[test]
    fn sqlite_rows_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_step_summary(&StepSummaryRow {
            step:                      0,
            critical:                  1,
            warning:                   2,
            normal:                    3,
            total_replacement_options: 4,
            status_messages:           5,
            replacement_requests:      6,
            rejected_requests:         0,
        })
        .unwrap();
        let rows: Vec<_> = (0..3)
            .map(|i| ComponentSnapshotRow {
                agent_id:               i,
                step:                   0,
                part_id:                1,
                serial_id:              i,
                urgency:                1,
                utilization_ratio:      0.25,
                available_replacements: 0,
                best_replacement:       0,
                replacement_priority:   0,
                pending_requests:       0,
            })
            .collect();
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let conn = Connection::open(dir.path().join("output.db")).unwrap();
        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM component_snapshots", [], |r| r.get(0))
            .unwrap();
        assert_eq!(n, 3);
        let normal: i64 = conn
            .query_row("SELECT normal FROM step_summaries WHERE step = 0", [], |r| r.get(0))
            .unwrap();
        assert_eq!(normal, 3);
    }
}
