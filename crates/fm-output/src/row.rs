//! Flat row types written by output backends.
//!
//! Identifiers and urgency levels are stored as their raw integer codes so
//! every backend writes the same columns.

use fm_agent::Component;
use fm_core::{AgentId, Step};
use fm_sim::StepSnapshot;

/// One component's derived state at a snapshot step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentSnapshotRow {
    pub agent_id:               u32,
    pub step:                   u64,
    pub part_id:                u16,
    pub serial_id:              u32,
    pub urgency:                u8,
    pub utilization_ratio:      f32,
    pub available_replacements: u16,
    /// 0 when the last search found nothing.
    pub best_replacement:       u16,
    pub replacement_priority:   u8,
    pub pending_requests:       u16,
}

impl ComponentSnapshotRow {
    pub fn new(agent: AgentId, step: Step, c: &Component) -> Self {
        Self {
            agent_id:               agent.0,
            step:                   step.0,
            part_id:                c.record.part_id.0,
            serial_id:              c.record.serial_id.0,
            urgency:                c.urgency.code(),
            utilization_ratio:      c.utilization_ratio,
            available_replacements: c.available_replacements,
            best_replacement:       c.best_replacement.0,
            replacement_priority:   c.replacement_priority.code(),
            pending_requests:       c.pending_requests,
        }
    }
}

/// Aggregated counters for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub step:                      u64,
    pub critical:                  u32,
    pub warning:                   u32,
    pub normal:                    u32,
    pub total_replacement_options: u64,
    pub status_messages:           u64,
    pub replacement_requests:      u64,
    pub rejected_requests:         u64,
}

impl From<&StepSnapshot> for StepSummaryRow {
    fn from(s: &StepSnapshot) -> Self {
        Self {
            step:                      s.step.0,
            critical:                  s.stats.critical,
            warning:                   s.stats.warning,
            normal:                    s.stats.normal,
            total_replacement_options: s.stats.total_replacement_options,
            status_messages:           s.status_messages as u64,
            replacement_requests:      s.replacement_requests as u64,
            rejected_requests:         s.rejected_requests as u64,
        }
    }
}
