//! The `Sim` struct and its step loop.

use fm_agent::ComponentStore;
use fm_behavior::{
    Layer, LayerContext, Outcome, ReplacementRequest, StatusMessage, find_replacements, monitor,
    schedule_maintenance,
};
use fm_core::{AgentId, SimConfig, StepClock};
use fm_message::{BroadcastChannel, SpatialChannel};
use tracing::{debug, info, info_span, warn};

use crate::{NoopObserver, SimObserver, SimResult, StepSnapshot, aggregate};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` owns the component store and both message channels and drives the
/// three-layer step:
///
/// 1. **monitor**: every component classifies its own wear.  Only those in
///    warning or critical, or flagged as needing maintenance, broadcast a
///    [`StatusMessage`].
/// 2. **find_replacements**: urgent components scan all statuses for a viable
///    candidate and publish a [`ReplacementRequest`] at their own location.
/// 3. **schedule_maintenance**: operational components count the requests
///    within the query radius that name them as best replacement.
///
/// Each layer is evaluated against a frozen store (optionally in parallel
/// with the `parallel` feature); patches and messages are then applied
/// sequentially in ascending `AgentId` order, so results never depend on
/// thread scheduling.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total steps, seed, thresholds, spatial domain).
    pub config: SimConfig,

    pub clock: StepClock,

    /// Component state (SoA arrays).
    pub(crate) agents: ComponentStore,

    /// `monitor` → `find_replacements`.
    pub(crate) status: BroadcastChannel<StatusMessage>,

    /// `find_replacements` → `schedule_maintenance`.
    pub(crate) requests: SpatialChannel<ReplacementRequest>,

    pub(crate) last: StepSnapshot,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current step to `config.end_step()`.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_step < self.config.end_step() {
            self.process_step(observer)?;
        }
        observer.on_sim_end(self.clock.current_step);
        Ok(())
    }

    /// Run exactly `n` steps from the current position (ignores `end_step`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.process_step(observer)?;
        }
        Ok(())
    }

    /// Run one full step and return its snapshot.
    pub fn step(&mut self) -> SimResult<StepSnapshot> {
        self.process_step(&mut NoopObserver)
    }

    /// Read access to every component.
    pub fn agents(&self) -> &ComponentStore {
        &self.agents
    }

    /// Snapshot of the most recent step (all zero before the first).
    pub fn last_snapshot(&self) -> &StepSnapshot {
        &self.last
    }

    /// The sealed status broadcast of the current step.
    pub fn status_channel(&self) -> &BroadcastChannel<StatusMessage> {
        &self.status
    }

    /// The sealed replacement requests of the current step.
    pub fn request_channel(&self) -> &SpatialChannel<ReplacementRequest> {
        &self.requests
    }

    /// Run a single layer at the current step without advancing the clock.
    ///
    /// Returns the number of messages the layer sealed.  Channels are not
    /// cleared first, so layers must be driven in [`Layer::ORDER`] for the
    /// result to match a full step.
    pub fn run_layer(&mut self, layer: Layer) -> usize {
        let ctx = LayerContext::new(self.clock.current_step, &self.config);
        match layer {
            Layer::Monitor             => self.run_monitor(&ctx),
            Layer::FindReplacements    => self.run_find_replacements(&ctx).0,
            Layer::ScheduleMaintenance => {
                self.run_schedule_maintenance(&ctx);
                0
            }
        }
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn process_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<StepSnapshot> {
        let now = self.clock.current_step;
        let span = info_span!("step", step = now.0);
        let _guard = span.enter();

        observer.on_step_start(now);
        let ctx = LayerContext::new(now, &self.config);

        // ── Phase 0: nothing survives from the previous step ──────────────
        self.status.clear();
        self.requests.clear();

        // ── Phase 1–3: layers ─────────────────────────────────────────────
        let status_messages = self.run_monitor(&ctx);
        observer.on_layer_end(now, Layer::Monitor, status_messages);

        let (replacement_requests, rejected_requests) = self.run_find_replacements(&ctx);
        observer.on_layer_end(now, Layer::FindReplacements, replacement_requests);

        self.run_schedule_maintenance(&ctx);
        observer.on_layer_end(now, Layer::ScheduleMaintenance, 0);

        // ── Phase 4: aggregate ────────────────────────────────────────────
        let stats = aggregate(&self.agents);
        info!(
            critical = stats.critical,
            warning = stats.warning,
            normal = stats.normal,
            total_replacement_options = stats.total_replacement_options,
            "step aggregated"
        );

        let snapshot = StepSnapshot {
            step: now,
            version: now.0 + 1,
            stats,
            status_messages,
            replacement_requests,
            rejected_requests,
        };
        self.last = snapshot;

        observer.on_step_end(now, &snapshot);
        if self.config.output_interval_steps > 0
            && now.0.is_multiple_of(self.config.output_interval_steps)
        {
            observer.on_snapshot(now, &self.agents);
        }

        self.clock.advance();
        Ok(snapshot)
    }

    fn run_monitor(&mut self, ctx: &LayerContext) -> usize {
        let agents = &self.agents;
        let outcomes = self.evaluate(|agent| monitor(&agents.record(agent), ctx));

        for (agent, outcome) in with_ids(outcomes) {
            if let Some(patch) = outcome.patch {
                patch.apply(&mut self.agents, agent);
            }
            if let Some(msg) = outcome.message {
                self.status.publish(msg);
            }
        }

        let sealed = self.status.seal();
        debug!(layer = %Layer::Monitor, sealed, "layer complete");
        sealed
    }

    /// Returns `(sealed, rejected)` request counts.
    fn run_find_replacements(&mut self, ctx: &LayerContext) -> (usize, usize) {
        let agents = &self.agents;
        let statuses = &self.status;
        let outcomes = self.evaluate(|agent| {
            find_replacements(
                &agents.record(agent),
                agents.urgency[agent.index()],
                statuses.all(),
                ctx,
            )
        });

        let mut rejected = 0;
        for (agent, outcome) in with_ids(outcomes) {
            if let Some(patch) = outcome.patch {
                patch.apply(&mut self.agents, agent);
            }
            if let Some(req) = outcome.message {
                let at = req.position();
                if let Err(e) = self.requests.publish(req, at.x, at.y) {
                    rejected += 1;
                    warn!(part = %req.requester, error = %e, "replacement request dropped");
                }
            }
        }

        let sealed = self.requests.seal();
        debug!(layer = %Layer::FindReplacements, sealed, rejected, "layer complete");
        (sealed, rejected)
    }

    fn run_schedule_maintenance(&mut self, ctx: &LayerContext) {
        let agents = &self.agents;
        let requests = &self.requests;
        let outcomes = self.evaluate(|agent| {
            let own = agents.record(agent);
            let at = own.location.grid_point();
            schedule_maintenance(&own, requests.query(at.x, at.y, ctx.radius), ctx)
        });

        let mut patched = 0usize;
        for (agent, outcome) in with_ids(outcomes) {
            if let Some(patch) = outcome.patch {
                patch.apply(&mut self.agents, agent);
                patched += 1;
            }
        }
        debug!(layer = %Layer::ScheduleMaintenance, patched, "layer complete");
    }

    /// Evaluate `f` for every component, returning results in `AgentId`
    /// order.
    ///
    /// With the `parallel` Cargo feature the calls run on Rayon's thread pool
    /// (the configured one if `num_threads` was set).
    fn evaluate<T, F>(&self, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(AgentId) -> T + Send + Sync,
    {
        let ids = 0..self.agents.count as u32;

        #[cfg(not(feature = "parallel"))]
        {
            ids.map(AgentId).map(f).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let run = || ids.into_par_iter().map(AgentId).map(&f).collect::<Vec<T>>();
            match &self.pool {
                Some(pool) => pool.install(run),
                None       => run(),
            }
        }
    }
}

/// Pair each outcome with the component that produced it.
fn with_ids<M>(outcomes: Vec<Outcome<M>>) -> impl Iterator<Item = (AgentId, Outcome<M>)> {
    outcomes
        .into_iter()
        .enumerate()
        .map(|(i, outcome)| (AgentId(i as u32), outcome))
}

impl std::fmt::Debug for Sim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sim")
            .field("components", &self.agents.count)
            .field("step", &self.clock.current_step)
            .field("end_step", &self.config.end_step())
            .finish()
    }
}

