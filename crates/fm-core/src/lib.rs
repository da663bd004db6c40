//! `fm-core`: foundational types for the fleet-maintenance simulation kernel.
//!
//! This crate is a dependency of every other `fm-*` crate.  It has no `fm-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `PartId`, `SerialId`, `LocationId`, `GroupId`  |
//! | [`aircraft`]    | `AcType`, `AcTypeSet`                                     |
//! | [`condition`]   | `Condition` flags and named presets                       |
//! | [`wear`]        | `Urgency`, `WearThresholds`, remaining-life arithmetic    |
//! | [`grid`]        | `GridPoint`, `location_id` → grid decoding                |
//! | [`time`]        | `Step`, `StepClock`, `SimConfig`, `SpatialConfig`         |
//! | [`rng`]         | `SimRng` (seeded population generation)                   |
//! | [`error`]       | `FmError`, `FmResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod aircraft;
pub mod condition;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;
pub mod wear;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use aircraft::{AcType, AcTypeSet};
pub use condition::Condition;
pub use error::{FmError, FmResult};
pub use grid::GridPoint;
pub use ids::{AgentId, GroupId, LocationId, PartId, SerialId};
pub use rng::SimRng;
pub use time::{SimConfig, SpatialConfig, Step, StepClock};
pub use wear::{Urgency, WearThresholds};
