//! Core component storage: `ComponentStore` (SoA data).
//!
//! The layer pipeline reads the store through `&ComponentStore` while every
//! agent's transition runs, and only writes it afterwards, one patch per
//! agent, in the sequential apply phase:
//!
//! ```ignore
//! // fm-sim layer (simplified):
//! let store: &ComponentStore = &sim.agents;
//! let outcomes = (0..store.count)
//!     .into_par_iter()
//!     .map(|i| monitor(&store.record(AgentId(i as u32)), &ctx))
//!     .collect::<Vec<_>>();
//! for (i, outcome) in outcomes.into_iter().enumerate() {
//!     if let Some(patch) = outcome.patch {
//!         patch.apply(&mut sim.agents, AgentId(i as u32));
//!     }
//! }
//! ```

use fm_core::{AcTypeSet, AgentId, Condition, GroupId, LocationId, PartId, SerialId, Urgency};

use crate::{Component, ComponentRecord};

/// Structure-of-Arrays storage for all component state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let urgency = store.urgency[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Persistent fields come from the population loader and are never written
/// by the kernel.  Derived fields are rewritten by the layer pipeline each
/// step; some transitions deliberately leave them untouched, so a derived
/// value may be carried over from an earlier step.
pub struct ComponentStore {
    /// Number of components.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Persistent state ──────────────────────────────────────────────────
    pub part_id:           Vec<PartId>,
    pub serial_id:         Vec<SerialId>,
    /// Aircraft types each part fits.
    pub ac_types:          Vec<AcTypeSet>,
    pub location:          Vec<LocationId>,
    pub operating_minutes: Vec<u32>,
    /// Maintenance interval in minutes.
    pub threshold_minutes: Vec<u32>,
    pub condition:         Vec<Condition>,
    pub group:             Vec<GroupId>,

    // ── Derived, step-scoped state ────────────────────────────────────────
    pub urgency:                Vec<Urgency>,
    /// Fraction of the interval used, in `[0, 1]`.
    pub utilization_ratio:      Vec<f32>,
    /// Viable candidates found by the last replacement search.
    pub available_replacements: Vec<u16>,
    /// `PartId::NONE` when the last search found nothing.
    pub best_replacement:       Vec<PartId>,
    /// Highest urgency among requests naming this part.
    pub replacement_priority:   Vec<Urgency>,
    /// Requests naming this part in the last step that had any.
    pub pending_requests:       Vec<u16>,
}

impl ComponentStore {
    /// `true` if there are no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// The persistent fields of one component.
    ///
    /// # Panics
    /// Panics if `agent` is out of range.
    pub fn record(&self, agent: AgentId) -> ComponentRecord {
        let i = agent.index();
        ComponentRecord {
            part_id:           self.part_id[i],
            serial_id:         self.serial_id[i],
            ac_types:          self.ac_types[i],
            location:          self.location[i],
            operating_minutes: self.operating_minutes[i],
            threshold_minutes: self.threshold_minutes[i],
            condition:         self.condition[i],
            group:             self.group[i],
        }
    }

    /// A full copy of one component, or `None` if `agent` is out of range.
    pub fn get(&self, agent: AgentId) -> Option<Component> {
        let i = agent.index();
        if i >= self.count {
            return None;
        }
        Some(Component {
            record:                 self.record(agent),
            urgency:                self.urgency[i],
            utilization_ratio:      self.utilization_ratio[i],
            available_replacements: self.available_replacements[i],
            best_replacement:       self.best_replacement[i],
            replacement_priority:   self.replacement_priority[i],
            pending_requests:       self.pending_requests[i],
        })
    }

    /// Iterator over full copies of every component, in `AgentId` order.
    pub fn iter(&self) -> impl Iterator<Item = Component> + '_ {
        self.agent_ids().filter_map(|a| self.get(a))
    }

    /// Reset every derived field to its pre-run default.
    pub fn reset_derived(&mut self) {
        self.urgency.fill(Urgency::Normal);
        self.utilization_ratio.fill(0.0);
        self.available_replacements.fill(0);
        self.best_replacement.fill(PartId::NONE);
        self.replacement_priority.fill(Urgency::Unset);
        self.pending_requests.fill(0);
    }

    // ── Package-private constructor used by ComponentStoreBuilder ─────────

    pub(crate) fn from_records(records: &[ComponentRecord]) -> Self {
        let count = records.len();
        Self {
            count,
            part_id:           records.iter().map(|r| r.part_id).collect(),
            serial_id:         records.iter().map(|r| r.serial_id).collect(),
            ac_types:          records.iter().map(|r| r.ac_types).collect(),
            location:          records.iter().map(|r| r.location).collect(),
            operating_minutes: records.iter().map(|r| r.operating_minutes).collect(),
            threshold_minutes: records.iter().map(|r| r.threshold_minutes).collect(),
            condition:         records.iter().map(|r| r.condition).collect(),
            group:             records.iter().map(|r| r.group).collect(),

            urgency:                vec![Urgency::Normal; count],
            utilization_ratio:      vec![0.0; count],
            available_replacements: vec![0; count],
            best_replacement:       vec![PartId::NONE; count],
            replacement_priority:   vec![Urgency::Unset; count],
            pending_requests:       vec![0; count],
        }
    }
}
