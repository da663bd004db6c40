//! `fm-agent`: Structure-of-Arrays component storage.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`record`]      | `ComponentRecord` (persistent fields), `Component` (full view) |
//! | [`store`]       | `ComponentStore` (SoA arrays)                             |
//! | [`builder`]     | `ComponentStoreBuilder` (fluent construction)             |
//! | [`loader`]      | CSV population loader                                     |
//! | [`synthetic`]   | Deterministic synthetic fleet generator                   |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                            |

pub mod builder;
pub mod error;
pub mod loader;
pub mod record;
pub mod store;
pub mod synthetic;

#[cfg(test)]
mod tests;

pub use builder::ComponentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use loader::{load_components_csv, load_components_reader};
pub use record::{Component, ComponentRecord};
pub use store::ComponentStore;
pub use synthetic::generate_fleet;
