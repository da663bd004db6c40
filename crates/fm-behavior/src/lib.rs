//! `fm-behavior`: the per-component transition functions.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`message`]     | `StatusMessage`, `ReplacementRequest`                       |
//! | [`context`]     | `LayerContext`: read-only step parameters shared by agents |
//! | [`patch`]       | `Patch`, `Outcome<M>`                                       |
//! | [`layer`]       | `Layer`: the fixed pipeline order                          |
//! | [`monitor`]     | `monitor`: wear evaluation, status broadcast               |
//! | [`replacement`] | `find_replacements`: candidate search                      |
//! | [`schedule`]    | `schedule_maintenance`: request intake                     |
//!
//! # Design notes
//!
//! Every transition is a pure function of one component's record (plus its
//! inbound messages) that returns an [`Outcome`]: an optional [`Patch`] to
//! its own derived fields and an optional outbound message.  Nothing here
//! touches the store mutably, so fm-sim can evaluate all components of a
//! layer in any order, or in parallel, and apply the patches afterwards.

pub mod context;
pub mod layer;
pub mod message;
pub mod monitor;
pub mod patch;
pub mod replacement;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use context::LayerContext;
pub use layer::Layer;
pub use message::{ReplacementRequest, StatusMessage};
pub use monitor::monitor;
pub use patch::{Outcome, Patch};
pub use replacement::{find_replacements, is_viable};
pub use schedule::schedule_maintenance;
