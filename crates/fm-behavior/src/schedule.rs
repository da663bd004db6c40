//! Layer 3: intake of replacement requests naming this part.

use fm_agent::ComponentRecord;
use fm_core::Urgency;

use crate::{LayerContext, Outcome, Patch, ReplacementRequest};

/// Count the requests that chose `own`'s part number and track their highest
/// urgency.
///
/// `requests` are the sealed requests within the query radius of `own`.
/// Non-operational components cannot serve as replacements and skip.  When
/// no request names this part the previous `replacement_priority` and
/// `pending_requests` are kept, not zeroed.
pub fn schedule_maintenance<'m, I>(
    own:      &ComponentRecord,
    requests: I,
    _ctx:     &LayerContext,
) -> Outcome<()>
where
    I: IntoIterator<Item = &'m ReplacementRequest>,
{
    if !own.condition.operational {
        return Outcome::skip();
    }

    let mut pending: u16 = 0;
    let mut highest = Urgency::Unset;
    for request in requests {
        if request.best_replacement == own.part_id {
            pending = pending.saturating_add(1);
            highest = highest.max(request.urgency);
        }
    }

    if pending == 0 {
        return Outcome::skip();
    }
    Outcome {
        patch:   Some(Patch::Schedule { priority: highest, pending }),
        message: None,
    }
}
