//! Fluent builder for constructing a `ComponentStore`.
//!
//! # Usage
//!
//! ```rust
//! use fm_agent::{ComponentRecord, ComponentStoreBuilder};
//! use fm_core::{PartId, SerialId};
//!
//! let store = ComponentStoreBuilder::with_capacity(2)
//!     .push(ComponentRecord { part_id: PartId(1), serial_id: SerialId(10), ..Default::default() })
//!     .push(ComponentRecord { part_id: PartId(2), serial_id: SerialId(11), ..Default::default() })
//!     .build();
//!
//! assert_eq!(store.count, 2);
//! ```

use tracing::{info, warn};

use crate::{ComponentRecord, ComponentStore};

/// Fluent builder for [`ComponentStore`].
///
/// Records are buffered row-wise and transposed into SoA arrays once, in
/// [`build`](Self::build).  Derived fields start at their documented
/// defaults (`urgency = Normal`, everything else zero).
#[derive(Default)]
pub struct ComponentStoreBuilder {
    records: Vec<ComponentRecord>,
}

impl ComponentStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `count` records (typically the row count of the
    /// population source).
    pub fn with_capacity(count: usize) -> Self {
        Self { records: Vec::with_capacity(count) }
    }

    /// Append one component.
    pub fn push(mut self, record: ComponentRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Append many components.
    pub fn extend<I: IntoIterator<Item = ComponentRecord>>(mut self, records: I) -> Self {
        self.records.extend(records);
        self
    }

    /// Number of records buffered so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Construct the `ComponentStore`.
    ///
    /// Zero intervals and overdue parts are legal input; they are reported
    /// here once so per-step evaluation does not have to.
    pub fn build(self) -> ComponentStore {
        let zero_interval = self.records.iter().filter(|r| r.threshold_minutes == 0).count();
        let overdue = self
            .records
            .iter()
            .filter(|r| r.operating_minutes > r.threshold_minutes)
            .count();

        if zero_interval > 0 {
            warn!(zero_interval, "components with a zero maintenance interval; utilization reported as 0");
        }
        if overdue > 0 {
            warn!(overdue, "components past their maintenance interval; remaining life clamped to 0");
        }
        info!(components = self.records.len(), "component store built");

        ComponentStore::from_records(&self.records)
    }
}
