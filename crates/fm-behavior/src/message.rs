//! Message records exchanged between layers.

use fm_core::{AcTypeSet, GridPoint, GroupId, LocationId, PartId, SerialId, Urgency};

/// Snapshot of a component that needs attention, broadcast by `monitor`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct StatusMessage {
    pub part_id:         PartId,
    pub serial_id:       SerialId,
    pub ac_types:        AcTypeSet,
    pub location:        LocationId,
    /// Remaining life in whole hours (rounded down).
    pub remaining_hours: u32,
    pub urgency:         Urgency,
    pub group:           GroupId,
    pub operational:     bool,
}

/// A replacement search result, published at the requester's location by
/// `find_replacements`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ReplacementRequest {
    pub requester:            PartId,
    pub requester_serial:     SerialId,
    /// Where the request is published.
    pub requester_location:   LocationId,
    pub best_replacement:     PartId,
    /// Remaining hours of the chosen replacement.
    pub replacement_hours:    u32,
    pub replacement_location: LocationId,
    /// Viable candidates found, the chosen one included.
    pub total_options:        u16,
    pub urgency:              Urgency,
}

impl ReplacementRequest {
    /// Grid position the request is published at.
    #[inline]
    pub fn position(&self) -> GridPoint {
        self.requester_location.grid_point()
    }
}
