//! Fleet-wide statistics computed once per step.

use fm_agent::ComponentStore;
use fm_core::{Step, Urgency};

/// Counters over the whole population after the last layer of a step.
///
/// `critical + warning + normal` always equals the population size; `normal`
/// counts every component that is neither critical nor warning.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct StepStats {
    pub critical:                  u32,
    pub warning:                   u32,
    pub normal:                    u32,
    /// Sum of `available_replacements` over every component.
    pub total_replacement_options: u64,
}

impl StepStats {
    pub fn total(&self) -> u64 {
        self.critical as u64 + self.warning as u64 + self.normal as u64
    }
}

/// Compute [`StepStats`] from the current store.
pub fn aggregate(store: &ComponentStore) -> StepStats {
    let mut stats = StepStats::default();
    for (urgency, &options) in store.urgency.iter().zip(&store.available_replacements) {
        match urgency {
            Urgency::Critical => stats.critical += 1,
            Urgency::Warning  => stats.warning += 1,
            _                 => stats.normal += 1,
        }
        stats.total_replacement_options += options as u64;
    }
    stats
}

/// Everything the scheduler reports about one completed step.
///
/// A new snapshot replaces the previous one each step; nothing accumulates.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct StepSnapshot {
    /// The step this snapshot describes.
    pub step:                 Step,
    /// Steps completed when the snapshot was taken (`step + 1`); 0 before
    /// the first step.
    pub version:              u64,
    pub stats:                StepStats,
    /// StatusMessages broadcast by `monitor`.
    pub status_messages:      usize,
    /// ReplacementRequests accepted by the spatial channel.
    pub replacement_requests: usize,
    /// Requests dropped because their location fell outside the domain.
    pub rejected_requests:    usize,
}
