//! Simulation observer trait for progress reporting and data collection.

use fm_agent::ComponentStore;
use fm_behavior::Layer;
use fm_core::Step;

use crate::StepSnapshot;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step pipeline.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: critical-count printer
///
/// ```rust,ignore
/// struct CriticalPrinter;
///
/// impl SimObserver for CriticalPrinter {
///     fn on_step_end(&mut self, step: Step, snapshot: &StepSnapshot) {
///         println!("{step}: {} critical", snapshot.stats.critical);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any layer runs.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called after each layer's patches are applied.
    ///
    /// `published` is the number of messages the layer sealed for the next
    /// one (0 for the last layer).
    fn on_layer_end(&mut self, _step: Step, _layer: Layer, _published: usize) {}

    /// Called after aggregation with the step's snapshot.
    fn on_step_end(&mut self, _step: Step, _snapshot: &StepSnapshot) {}

    /// Called at snapshot intervals (every `config.output_interval_steps`
    /// steps) with read-only access to every component.
    fn on_snapshot(&mut self, _step: Step, _agents: &ComponentStore) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_step: Step) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
