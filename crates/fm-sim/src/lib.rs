//! `fm-sim`: step orchestrator for the fleet-maintenance kernel.
//!
//! # Step pipeline
//!
//! ```text
//! for step in 0..config.total_steps:
//!   0. clear                 drop every message left from the previous step
//!   1. monitor               all components; broadcast statuses; seal
//!   2. find_replacements     urgent components read every status and
//!                            publish requests at their own location; seal
//!   3. schedule_maintenance  operational components range-query requests
//!                            within the radius of their location
//!   4. aggregate             count urgency classes and replacement options
//!                            into a fresh StepSnapshot
//! ```
//!
//! Within a layer every component is evaluated against the same read-only
//! store and sealed channel (optionally in parallel); patches and outbound
//! messages are then applied sequentially in ascending `AgentId` order.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaluates every layer on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fm_agent::generate_fleet;
//! use fm_core::SimConfig;
//! use fm_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::new(10, 42);
//! let store = generate_fleet(10_000, config.seed);
//! let mut sim = SimBuilder::new(config, store).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{:?}", sim.last_snapshot().stats);
//! ```

pub mod aggregate;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use aggregate::{StepSnapshot, StepStats, aggregate};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
