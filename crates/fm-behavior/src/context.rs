//! Read-only parameters passed to every transition.

use fm_core::{SimConfig, Step, WearThresholds};

/// Step-wide parameters shared (immutably) by all components of a layer.
#[derive(Copy, Clone, Debug)]
pub struct LayerContext {
    /// Step being executed.
    pub step:       Step,
    pub thresholds: WearThresholds,
    /// Spatial query radius used by `schedule_maintenance`.
    pub radius:     f32,
}

impl LayerContext {
    /// Build a new context for a single step.
    #[inline]
    pub fn new(step: Step, config: &SimConfig) -> Self {
        Self {
            step,
            thresholds: config.thresholds,
            radius:     config.spatial.radius,
        }
    }
}
