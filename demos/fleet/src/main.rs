//! fleet: helicopter component fleet run on the maintenance kernel.
//!
//! Loads a component register (or generates a synthetic one), runs the
//! three-layer maintenance pipeline for a handful of steps, writes CSV output
//! under `output/fleet`, and prints the most urgent components.
//!
//! Environment:
//!
//! | Variable           | Meaning                                           |
//! |--------------------|---------------------------------------------------|
//! | `FLEET_CONFIG`     | JSON `SimConfig`; defaults below when unset       |
//! | `FLEET_POPULATION` | component CSV; synthetic fleet when unset         |
//! | `RUST_LOG`         | tracing filter, default `info`                    |

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fm_agent::{ComponentStore, generate_fleet, load_components_csv};
use fm_behavior::Layer;
use fm_core::{AgentId, SimConfig, Step, Urgency};
use fm_output::{CsvWriter, OutputWriter, SimOutputObserver};
use fm_sim::{SimBuilder, SimObserver, StepSnapshot};

// ── Constants ─────────────────────────────────────────────────────────────────

const COMPONENT_COUNT: usize = 10_000;
const SEED:            u64   = 42;
const TOTAL_STEPS:     u64   = 10;
const OUTPUT_DIR:      &str  = "output/fleet";
const SHOW_TOP:        usize = 10;

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    summary_rows:  usize,
    snapshot_rows: usize,
    published:     [usize; 2],
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, summary_rows: 0, snapshot_rows: 0, published: [0; 2] }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_layer_end(&mut self, _step: Step, layer: Layer, published: usize) {
        match layer {
            Layer::Monitor          => self.published[0] += published,
            Layer::FindReplacements => self.published[1] += published,
            Layer::ScheduleMaintenance => {}
        }
    }

    fn on_step_end(&mut self, step: Step, snapshot: &StepSnapshot) {
        self.summary_rows += 1;
        self.inner.on_step_end(step, snapshot);
    }

    fn on_snapshot(&mut self, step: Step, agents: &ComponentStore) {
        self.snapshot_rows += agents.count;
        self.inner.on_snapshot(step, agents);
    }

    fn on_sim_end(&mut self, final_step: Step) {
        self.inner.on_sim_end(final_step);
    }
}

// ── Inputs ────────────────────────────────────────────────────────────────────

fn load_config() -> Result<SimConfig> {
    match std::env::var("FLEET_CONFIG") {
        Ok(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))
        }
        Err(_) => {
            let mut config = SimConfig::new(TOTAL_STEPS, SEED);
            config.output_interval_steps = TOTAL_STEPS - 1;
            Ok(config)
        }
    }
}

fn load_population(seed: u64) -> Result<ComponentStore> {
    match std::env::var("FLEET_POPULATION") {
        Ok(path) => load_components_csv(Path::new(&path))
            .with_context(|| format!("loading population {path}")),
        Err(_) => Ok(generate_fleet(COMPONENT_COUNT, seed)),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    let store = load_population(config.seed)?;

    println!("=== fleet: helicopter component maintenance ===");
    println!(
        "Components: {}  |  Steps: {}  |  Radius: {}",
        store.count, config.total_steps, config.spatial.radius
    );
    println!();

    let mut sim = SimBuilder::new(config, store).build()?;

    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }
    info!(elapsed_ms = elapsed.as_millis() as u64, "run complete");

    // ── Summary ───────────────────────────────────────────────────────────
    let last = sim.last_snapshot();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  step_summaries.csv      : {} rows", obs.summary_rows);
    println!("  component_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  status messages         : {}", obs.published[0]);
    println!("  replacement requests    : {}", obs.published[1]);
    println!();
    println!(
        "Last step {}: critical {}  warning {}  normal {}  options {}  rejected {}",
        last.step.0,
        last.stats.critical,
        last.stats.warning,
        last.stats.normal,
        last.stats.total_replacement_options,
        last.rejected_requests,
    );
    println!();

    // ── Most urgent components ────────────────────────────────────────────
    let agents = sim.agents();
    let mut urgent: Vec<AgentId> = agents
        .agent_ids()
        .filter(|a| agents.urgency[a.index()] == Urgency::Critical)
        .collect();
    urgent.sort_by(|a, b| {
        agents.utilization_ratio[b.index()].total_cmp(&agents.utilization_ratio[a.index()])
    });

    println!(
        "{:<8} {:<8} {:<10} {:<9} {:<8} {:<6}",
        "Part", "Serial", "Urgency", "Used", "Options", "Best"
    );
    println!("{}", "-".repeat(52));
    for agent in urgent.into_iter().take(SHOW_TOP) {
        let Some(c) = agents.get(agent) else { continue };
        println!(
            "{:<8} {:<8} {:<10} {:<9} {:<8} {:<6}",
            c.record.part_id.0,
            c.record.serial_id.0,
            c.urgency.to_string(),
            format!("{:.1}%", c.utilization_ratio * 100.0),
            c.available_replacements,
            if c.best_replacement.is_none() { "-".to_string() } else { c.best_replacement.0.to_string() },
        );
    }

    Ok(())
}
