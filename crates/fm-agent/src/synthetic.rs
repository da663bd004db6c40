//! Deterministic synthetic fleet generator.
//!
//! Produces a plausible helicopter-component population for demos and scale
//! runs when no exported register is at hand.  The same `(count, seed)` pair
//! always yields the same store.

use fm_core::{AcType, AcTypeSet, Condition, GroupId, LocationId, PartId, SerialId, SimRng};

use crate::{ComponentRecord, ComponentStore, ComponentStoreBuilder};

/// Maintenance intervals drawn from, in minutes (500 h … 6000 h).
const INTERVALS: [u32; 5] = [30_000, 60_000, 120_000, 180_000, 360_000];

/// Condition mix: (condition, probability weight in percent).
const CONDITIONS: [(Condition, u32); 4] = [
    (Condition::SERVICEABLE,   80),
    (Condition::NOT_INSTALLED, 10),
    (Condition::BROKEN,         5),
    (Condition::DONOR,          5),
];

/// Interchangeability groups in use; group 0 (universal) is drawn separately.
const GROUP_COUNT: u16 = 8;

/// Generate `count` components from `seed`.
pub fn generate_fleet(count: usize, seed: u64) -> ComponentStore {
    let mut root = SimRng::new(seed);
    let mut rng = root.child(0);

    // Roughly eight physical parts per part number, at least one number.
    let part_numbers = (count / 8).clamp(1, u16::MAX as usize - 1) as u16;

    let records = (0..count).map(|i| {
        let interval = *rng.choose(&INTERVALS).unwrap_or(&INTERVALS[0]);
        // Up to 105 % of the interval, so a few parts start overdue.
        let used = (interval as f64 * rng.gen_range(0.0..1.05)) as u32;

        let mut ac_types: AcTypeSet = rng.choose(&AcType::ALL).copied().into_iter().collect();
        if rng.gen_bool(0.3) {
            if let Some(extra) = rng.choose(&AcType::ALL) {
                ac_types.insert(*extra);
            }
        }

        let x = rng.gen_range(0..1_000u32);
        let y = rng.gen_range(0..1_000u32);

        let group = if rng.gen_bool(0.2) {
            GroupId::ANY
        } else {
            GroupId(rng.gen_range(1..=GROUP_COUNT))
        };

        ComponentRecord {
            part_id:           PartId(rng.gen_range(1..=part_numbers)),
            serial_id:         SerialId(100_000 + i as u32),
            ac_types,
            location:          LocationId::from_grid(x, y).unwrap_or_default(),
            operating_minutes: used,
            threshold_minutes: interval,
            condition:         pick_condition(&mut rng),
            group,
        }
    });

    ComponentStoreBuilder::with_capacity(count).extend(records).build()
}

fn pick_condition(rng: &mut SimRng) -> Condition {
    let mut roll = rng.gen_range(0..100u32);
    for (condition, weight) in CONDITIONS {
        if roll < weight {
            return condition;
        }
        roll -= weight;
    }
    Condition::SERVICEABLE
}
