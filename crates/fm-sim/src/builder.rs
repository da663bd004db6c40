//! Fluent builder for constructing a [`Sim`].

use fm_agent::ComponentStore;
use fm_core::{SimConfig, StepClock};
use fm_message::{BroadcastChannel, SpatialChannel};
use tracing::{info, warn};

use crate::{Sim, SimResult, StepSnapshot};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total steps, seed, thresholds, spatial domain, …
/// - [`ComponentStore`]: from [`fm_agent::ComponentStoreBuilder`], the CSV
///   loader or [`fm_agent::generate_fleet`]
///
/// # Optional inputs
///
/// | Method                 | Default                                     |
/// |------------------------|---------------------------------------------|
/// | `.reset_derived(true)` | `false`: derived fields are used as loaded  |
///
/// # Example
///
/// ```rust,ignore
/// let store = generate_fleet(1_000, 42);
/// let mut sim = SimBuilder::new(SimConfig::new(10, 42), store).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:        SimConfig,
    agents:        ComponentStore,
    reset_derived: bool,
}

impl SimBuilder {
    pub fn new(config: SimConfig, agents: ComponentStore) -> Self {
        Self { config, agents, reset_derived: false }
    }

    /// Reset every derived field to its initial value before the first step.
    ///
    /// Useful when the store was captured mid-run and should be replayed from
    /// a clean slate.
    pub fn reset_derived(mut self, reset: bool) -> Self {
        self.reset_derived = reset;
        self
    }

    /// Validate the configuration, allocate both channels, and return a
    /// ready-to-run [`Sim`].
    pub fn build(mut self) -> SimResult<Sim> {
        self.config.validate()?;

        let requests = SpatialChannel::new(self.config.spatial)?;
        let status = BroadcastChannel::with_capacity(self.agents.count);

        let outside = self
            .agents
            .location
            .iter()
            .filter(|loc| {
                let p = loc.grid_point();
                !requests.in_domain(p.x, p.y)
            })
            .count();
        if outside > 0 {
            warn!(
                outside,
                "components located outside the spatial domain; their replacement requests will be rejected"
            );
        }

        if self.reset_derived {
            self.agents.reset_derived();
        }

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            None => None,
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| crate::SimError::ThreadPool(e.to_string()))?,
            ),
        };

        let (cols, rows) = requests.grid_dims();
        info!(
            components = self.agents.count,
            total_steps = self.config.total_steps,
            grid_cols = cols,
            grid_rows = rows,
            "simulation built"
        );

        Ok(Sim {
            config:   self.config,
            clock:    StepClock::new(),
            agents:   self.agents,
            status,
            requests,
            last:     StepSnapshot::default(),
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
