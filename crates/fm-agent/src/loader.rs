//! CSV population loader.
//!
//! # CSV format
//!
//! One row per component, the eight persistent fields in raw form:
//!
//! ```csv
//! part_id,serial_id,ac_type_mask,location_id,operating_minutes,threshold_minutes,condition_mask,interchangeable_group_id
//! 12,100234,96,10010,29000,30000,7,3
//! 12,100235,64,59010,1200,60000,7,0
//! ```
//!
//! Every field is required.  A missing column or an empty cell is a
//! structural error and aborts the load; the kernel never guesses persistent
//! state.  Aircraft-type bits that name no known type are dropped (and
//! counted in a warning).
//!
//! Exports from fleet registers often carry type designations instead of a
//! mask.  An optional `ac_types` column lists them separated by `;`
//! (`Mi-8T;R44`) and is used when `ac_type_mask` is empty.  An unrecognised
//! designation aborts the load.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use fm_core::{AcType, AcTypeSet, Condition, GroupId, LocationId, PartId, SerialId};

use crate::{AgentError, AgentResult, ComponentRecord, ComponentStore, ComponentStoreBuilder};

// ── CSV record ────────────────────────────────────────────────────────────────

/// Raw row.  Fields are optional so an absent value is reported by name
/// rather than as an opaque deserialization error.
#[derive(Deserialize)]
struct ComponentRow {
    part_id:                  Option<u16>,
    serial_id:                Option<u32>,
    ac_type_mask:             Option<u8>,
    #[serde(default)]
    ac_types:                 Option<String>,
    location_id:              Option<u32>,
    operating_minutes:        Option<u32>,
    threshold_minutes:        Option<u32>,
    condition_mask:           Option<u8>,
    interchangeable_group_id: Option<u16>,
}

impl ComponentRow {
    fn into_record(self, row: usize) -> AgentResult<ComponentRecord> {
        fn req<T>(v: Option<T>, row: usize, field: &'static str) -> AgentResult<T> {
            v.ok_or(AgentError::MissingField { row, field })
        }

        let ac_types = match (self.ac_type_mask, self.ac_types.as_deref()) {
            (Some(mask), _) => AcTypeSet::from_bits(mask),
            (None, Some(names)) if !names.trim().is_empty() => parse_designations(names)?,
            (None, _) => return Err(AgentError::MissingField { row, field: "ac_type_mask" }),
        };

        Ok(ComponentRecord {
            part_id:           PartId(req(self.part_id, row, "part_id")?),
            serial_id:         SerialId(req(self.serial_id, row, "serial_id")?),
            ac_types,
            location:          LocationId(req(self.location_id, row, "location_id")?),
            operating_minutes: req(self.operating_minutes, row, "operating_minutes")?,
            threshold_minutes: req(self.threshold_minutes, row, "threshold_minutes")?,
            condition:         Condition::from_bits(req(self.condition_mask, row, "condition_mask")?),
            group:             GroupId(req(self.interchangeable_group_id, row, "interchangeable_group_id")?),
        })
    }
}

/// `"Mi-8T;R44"` -> `{Mi8T, R44}`.  Empty items are skipped.
fn parse_designations(names: &str) -> AgentResult<AcTypeSet> {
    names
        .split(';')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(|n| n.parse::<AcType>().map_err(AgentError::from))
        .collect()
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a population from a CSV file.
pub fn load_components_csv(path: &Path) -> AgentResult<ComponentStore> {
    let file = std::fs::File::open(path).map_err(AgentError::Io)?;
    load_components_reader(file)
}

/// Like [`load_components_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from an export
/// stream.
pub fn load_components_reader<R: Read>(reader: R) -> AgentResult<ComponentStore> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = ComponentStoreBuilder::new();
    let mut unknown_types = 0usize;

    for (i, result) in csv_reader.deserialize::<ComponentRow>().enumerate() {
        let row = result.map_err(|e| AgentError::Parse(e.to_string()))?;
        // 1-based data row, header excluded.
        let row_no = i + 1;
        if row.ac_type_mask.is_some_and(AcTypeSet::has_unknown_bits) {
            unknown_types += 1;
        }
        builder = builder.push(row.into_record(row_no)?);
    }

    if unknown_types > 0 {
        warn!(rows = unknown_types, "ac_type_mask bits outside the known aircraft types were dropped");
    }
    info!(rows = builder.len(), "population loaded");

    Ok(builder.build())
}
