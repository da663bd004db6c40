//! Layer 2: replacement search over the broadcast statuses.

use fm_agent::ComponentRecord;
use fm_core::{PartId, Urgency, WearThresholds};

use crate::{LayerContext, Outcome, Patch, ReplacementRequest, StatusMessage};

/// `true` if `candidate` can replace `own`.
///
/// All four must hold: a shared aircraft type, a compatible group (equal, or
/// the candidate is in the universal group), the candidate is operational,
/// and it has strictly more than `min_candidate_hours` left.
pub fn is_viable(
    own:        &ComponentRecord,
    candidate:  &StatusMessage,
    thresholds: &WearThresholds,
) -> bool {
    own.ac_types.intersects(candidate.ac_types)
        && own.group.accepts(candidate.group)
        && candidate.operational
        && candidate.remaining_hours > thresholds.min_candidate_hours
}

/// `true` if `a` beats `b`: more remaining hours, then the lower part id,
/// then the lower serial.  The result does not depend on scan order.
#[inline]
fn better(a: &StatusMessage, b: &StatusMessage) -> bool {
    (a.remaining_hours, std::cmp::Reverse((a.part_id, a.serial_id)))
        > (b.remaining_hours, std::cmp::Reverse((b.part_id, b.serial_id)))
}

/// Search the broadcast statuses for replacements of `own`.
///
/// `urgency` is the component's post-monitor urgency.  Components below
/// warning skip the search and keep their previous replacement fields.
/// Otherwise `available_replacements` and `best_replacement` are always
/// patched (`PartId::NONE` when nothing fits), and a request is published iff
/// at least one viable candidate was found.  Every status is tested with
/// [`is_viable`] alone, so a component's own broadcast counts when it passes.
pub fn find_replacements<'m, I>(
    own:      &ComponentRecord,
    urgency:  Urgency,
    statuses: I,
    ctx:      &LayerContext,
) -> Outcome<ReplacementRequest>
where
    I: IntoIterator<Item = &'m StatusMessage>,
{
    if !urgency.is_urgent() {
        return Outcome::skip();
    }

    let mut best: Option<&StatusMessage> = None;
    let mut found: u16 = 0;

    for candidate in statuses {
        if !is_viable(own, candidate, &ctx.thresholds) {
            continue;
        }
        found = found.saturating_add(1);
        if best.is_none_or(|b| better(candidate, b)) {
            best = Some(candidate);
        }
    }

    let request = best.map(|b| ReplacementRequest {
        requester:            own.part_id,
        requester_serial:     own.serial_id,
        requester_location:   own.location,
        best_replacement:     b.part_id,
        replacement_hours:    b.remaining_hours,
        replacement_location: b.location,
        total_options:        found,
        urgency,
    });

    Outcome {
        patch: Some(Patch::Replacements {
            available: found,
            best:      best.map_or(PartId::NONE, |b| b.part_id),
        }),
        message: request,
    }
}
