//! Row-shaped views of one component.

use fm_core::{AcTypeSet, Condition, GroupId, LocationId, PartId, SerialId, Urgency};

/// The eight persistent fields supplied by a population loader.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentRecord {
    pub part_id:           PartId,
    pub serial_id:         SerialId,
    pub ac_types:          AcTypeSet,
    pub location:          LocationId,
    pub operating_minutes: u32,
    pub threshold_minutes: u32,
    pub condition:         Condition,
    pub group:             GroupId,
}

/// A full copy of one component: persistent fields plus the step-scoped
/// fields derived by the layer pipeline.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    pub record:                 ComponentRecord,
    pub urgency:                Urgency,
    pub utilization_ratio:      f32,
    pub available_replacements: u16,
    pub best_replacement:       PartId,
    pub replacement_priority:   Urgency,
    pub pending_requests:       u16,
}
