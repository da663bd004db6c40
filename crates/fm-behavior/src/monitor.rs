//! Layer 1: wear evaluation.

use fm_agent::ComponentRecord;
use fm_core::Urgency;
use fm_core::wear::{MINUTES_PER_HOUR, remaining_minutes, utilization_ratio};

use crate::{LayerContext, Outcome, Patch, StatusMessage};

/// Classify a component's wear and decide whether to broadcast its status.
///
/// Always patches `urgency` and `utilization_ratio`.  Publishes a
/// [`StatusMessage`] iff the component is at least in warning or flagged as
/// needing maintenance.  Overdue components (usage past the interval) have
/// zero remaining life and are critical.
pub fn monitor(own: &ComponentRecord, ctx: &LayerContext) -> Outcome<StatusMessage> {
    let remaining = remaining_minutes(own.operating_minutes, own.threshold_minutes);
    let urgency = Urgency::classify(remaining, &ctx.thresholds);
    let utilization = utilization_ratio(own.operating_minutes, own.threshold_minutes);

    let status = (urgency.is_urgent() || own.condition.needs_maintenance).then(|| StatusMessage {
        part_id:         own.part_id,
        serial_id:       own.serial_id,
        ac_types:        own.ac_types,
        location:        own.location,
        remaining_hours: remaining / MINUTES_PER_HOUR,
        urgency,
        group:           own.group,
        operational:     own.condition.operational,
    });

    Outcome {
        patch:   Some(Patch::Monitor { urgency, utilization_ratio: utilization }),
        message: status,
    }
}
