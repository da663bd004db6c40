//! Simulation time model and run configuration.
//!
//! Time is a monotonically increasing `Step` counter.  One step is one full
//! pass of the layer pipeline plus aggregation; it carries no wall-clock
//! meaning inside the kernel.

use std::fmt;

use crate::{FmError, FmResult, WearThresholds};

// ── Step ──────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── StepClock ─────────────────────────────────────────────────────────────────

/// Tracks the next step to execute.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepClock {
    pub current_step: Step,
}

impl StepClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_step = Step(self.current_step.0 + 1);
    }

    /// Number of steps completed so far.
    #[inline]
    pub fn completed(&self) -> u64 {
        self.current_step.0
    }
}

// ── SpatialConfig ─────────────────────────────────────────────────────────────

/// Coordinate domain and range-query radius of a spatial message channel.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpatialConfig {
    /// Inclusive lower corner of the domain.
    pub min: [f32; 2],
    /// Exclusive upper corner of the domain.
    pub max: [f32; 2],
    /// Query radius in grid units.
    pub radius: f32,
    /// Bucket edge length.  `None` uses `radius`.  Must be `>= radius`.
    pub cell_size: Option<f32>,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            min:       [0.0, 0.0],
            max:       [1_000.0, 1_000.0],
            radius:    50.0,
            cell_size: None,
        }
    }
}

/// Largest grid a spatial channel will allocate buckets for.
pub const MAX_GRID_CELLS: usize = 1 << 24;

impl SpatialConfig {
    /// The bucket edge length actually used.
    #[inline]
    pub fn effective_cell_size(&self) -> f32 {
        self.cell_size.unwrap_or(self.radius)
    }

    /// Reject a domain or radius that cannot be bucketed.
    pub fn validate(&self) -> FmResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(FmError::Config(format!(
                "spatial radius must be positive and finite, got {}",
                self.radius
            )));
        }
        for axis in 0..2 {
            let (lo, hi) = (self.min[axis], self.max[axis]);
            if !(lo.is_finite() && hi.is_finite() && hi > lo) {
                return Err(FmError::Config(format!(
                    "spatial domain axis {axis} is empty or unbounded: [{lo}, {hi})"
                )));
            }
        }
        let cell = self.effective_cell_size();
        if !(cell.is_finite() && cell >= self.radius) {
            return Err(FmError::Config(format!(
                "cell size {cell} must be finite and at least the radius {}",
                self.radius
            )));
        }
        self.grid_dims().map(|_| ())
    }

    /// Grid dimensions as `(cols, rows)` for the effective cell size.
    ///
    /// Fails when the grid would exceed [`MAX_GRID_CELLS`] buckets.
    pub fn grid_dims(&self) -> FmResult<(usize, usize)> {
        let cell = self.effective_cell_size();
        let axis = |a: usize| -> FmResult<usize> {
            let n = ((self.max[a] - self.min[a]) / cell).ceil();
            if !(n.is_finite() && n <= MAX_GRID_CELLS as f32) {
                return Err(too_many_cells(cell));
            }
            Ok((n as usize).max(1))
        };
        let (cols, rows) = (axis(0)?, axis(1)?);
        match cols.checked_mul(rows) {
            Some(cells) if cells <= MAX_GRID_CELLS => Ok((cols, rows)),
            _ => Err(too_many_cells(cell)),
        }
    }
}

fn too_many_cells(cell: f32) -> FmError {
    FmError::Config(format!(
        "cell size {cell} cuts the domain into more than {MAX_GRID_CELLS} cells"
    ))
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total steps executed by `Sim::run`.
    pub total_steps: u64,

    /// Seed for synthetic population generation.  The kernel itself is
    /// deterministic and does not consume it.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses the global pool.
    #[cfg_attr(feature = "serde", serde(default))]
    pub num_threads: Option<usize>,

    /// Emit component snapshots every N steps.  0 disables snapshots.
    #[cfg_attr(feature = "serde", serde(default = "default_output_interval"))]
    pub output_interval_steps: u64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub thresholds: WearThresholds,

    #[cfg_attr(feature = "serde", serde(default))]
    pub spatial: SpatialConfig,
}

#[cfg(feature = "serde")]
fn default_output_interval() -> u64 {
    1
}

impl SimConfig {
    /// A configuration with default thresholds and domain.
    pub fn new(total_steps: u64, seed: u64) -> Self {
        Self {
            total_steps,
            seed,
            num_threads:           None,
            output_interval_steps: 1,
            thresholds:            WearThresholds::default(),
            spatial:               SpatialConfig::default(),
        }
    }

    /// The step at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> Step {
        Step(self.total_steps)
    }

    /// Check thresholds and the spatial domain.
    pub fn validate(&self) -> FmResult<()> {
        let t = &self.thresholds;
        if t.critical_minutes > t.warning_minutes {
            return Err(FmError::Config(format!(
                "critical cutoff {} exceeds warning cutoff {}",
                t.critical_minutes, t.warning_minutes
            )));
        }
        if self.num_threads == Some(0) {
            return Err(FmError::Config("num_threads must be at least 1".into()));
        }
        self.spatial.validate()
    }
}
