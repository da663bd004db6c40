//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use fm_agent::ComponentStore;
use fm_core::Step;
use fm_sim::{SimObserver, StepSnapshot};
use tracing::error;

use crate::row::{ComponentSnapshotRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes a summary row every step and component
/// snapshots at the configured interval to any [`OutputWriter`].
///
/// `SimObserver` methods return nothing, so writer errors are stored.  After
/// `sim.run()` returns, check with [`take_error`][Self::take_error].  Only
/// the first error is kept; later writes are still attempted.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                error!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, _step: Step, snapshot: &StepSnapshot) {
        let result = self.writer.write_step_summary(&StepSummaryRow::from(snapshot));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, step: Step, agents: &ComponentStore) {
        let rows: Vec<ComponentSnapshotRow> = agents
            .agent_ids()
            .zip(agents.iter())
            .map(|(agent, c)| ComponentSnapshotRow::new(agent, step, &c))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_step: Step) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
