//! Per-component state patches and transition outcomes.

use fm_agent::ComponentStore;
use fm_core::{AgentId, PartId, Urgency};

/// A write to one component's derived fields, produced by a transition and
/// applied after the whole layer has been evaluated.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Patch {
    Monitor {
        urgency:           Urgency,
        utilization_ratio: f32,
    },
    Replacements {
        available: u16,
        best:      PartId,
    },
    Schedule {
        priority: Urgency,
        pending:  u16,
    },
}

impl Patch {
    /// Write the patch into `agent`'s row.
    ///
    /// # Panics
    /// Panics if `agent` is out of range.
    pub fn apply(self, store: &mut ComponentStore, agent: AgentId) {
        let i = agent.index();
        match self {
            Patch::Monitor { urgency, utilization_ratio } => {
                store.urgency[i] = urgency;
                store.utilization_ratio[i] = utilization_ratio;
            }
            Patch::Replacements { available, best } => {
                store.available_replacements[i] = available;
                store.best_replacement[i] = best;
            }
            Patch::Schedule { priority, pending } => {
                store.replacement_priority[i] = priority;
                store.pending_requests[i] = pending;
            }
        }
    }
}

/// What one component's transition produced in one layer.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Outcome<M> {
    /// `None` leaves every derived field at its previous value.
    pub patch:   Option<Patch>,
    /// Outbound message for the next layer.
    pub message: Option<M>,
}

impl<M> Outcome<M> {
    /// Nothing to write, nothing to send.
    pub fn skip() -> Self {
        Self { patch: None, message: None }
    }

    pub fn is_skip(&self) -> bool {
        self.patch.is_none() && self.message.is_none()
    }
}
