//! Unit tests for fm-agent.

#[cfg(test)]
mod store {
    use fm_core::{AgentId, Condition, LocationId, PartId, SerialId, Urgency};

    use crate::{ComponentRecord, ComponentStoreBuilder};

    fn record(part: u16, serial: u32) -> ComponentRecord {
        ComponentRecord {
            part_id:           PartId(part),
            serial_id:         SerialId(serial),
            location:          LocationId(10_010),
            operating_minutes: 1_000,
            threshold_minutes: 60_000,
            condition:         Condition::SERVICEABLE,
            ..Default::default()
        }
    }

    #[test]
    fn all_arrays_sized_to_count() {
        let store = ComponentStoreBuilder::new()
            .extend((0..5).map(|i| record(1, i)))
            .build();
        assert_eq!(store.count, 5);
        assert_eq!(store.part_id.len(), 5);
        assert_eq!(store.urgency.len(), 5);
        assert_eq!(store.pending_requests.len(), 5);
    }

    #[test]
    fn derived_fields_start_at_defaults() {
        let store = ComponentStoreBuilder::new().push(record(3, 9)).build();
        let c = store.get(AgentId(0)).unwrap();
        assert_eq!(c.urgency, Urgency::Normal);
        assert_eq!(c.utilization_ratio, 0.0);
        assert_eq!(c.available_replacements, 0);
        assert_eq!(c.best_replacement, PartId::NONE);
        assert_eq!(c.replacement_priority, Urgency::Unset);
        assert_eq!(c.pending_requests, 0);
    }

    #[test]
    fn record_roundtrip() {
        let r = record(4, 77);
        let store = ComponentStoreBuilder::new().push(r).build();
        assert_eq!(store.record(AgentId(0)), r);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let store = ComponentStoreBuilder::new().push(record(1, 1)).build();
        assert!(store.get(AgentId(1)).is_none());
    }

    #[test]
    fn reset_derived_restores_defaults() {
        let mut store = ComponentStoreBuilder::new().push(record(1, 1)).build();
        store.urgency[0] = Urgency::Critical;
        store.pending_requests[0] = 3;
        store.reset_derived();
        assert_eq!(store.urgency[0], Urgency::Normal);
        assert_eq!(store.pending_requests[0], 0);
    }

    #[test]
    fn empty_store() {
        let store = ComponentStoreBuilder::new().build();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use fm_core::{AcType, AgentId, FmError, GroupId, LocationId, PartId};

    use crate::{AgentError, load_components_reader};

    const HEADER: &str = "part_id,serial_id,ac_type_mask,location_id,operating_minutes,threshold_minutes,condition_mask,interchangeable_group_id\n";

    #[test]
    fn loads_rows() {
        let csv = format!("{HEADER}12,100234,96,10010,29000,30000,7,3\n12,100235,64,59010,1200,60000,4,0\n");
        let store = load_components_reader(Cursor::new(csv)).unwrap();
        assert_eq!(store.count, 2);

        let first = store.record(AgentId(0));
        assert_eq!(first.part_id, PartId(12));
        assert!(first.ac_types.contains(AcType::Mi17));
        assert!(first.ac_types.contains(AcType::Mi8T));
        assert_eq!(first.location, LocationId(10_010));
        assert!(first.condition.counters_active);
        assert_eq!(first.group, GroupId(3));

        let second = store.record(AgentId(1));
        assert!(second.condition.operational);
        assert!(!second.condition.needs_maintenance);
        assert_eq!(second.group, GroupId::ANY);
    }

    #[test]
    fn empty_cell_is_structural_error() {
        let csv = format!("{HEADER}12,100234,96,10010,,30000,7,3\n");
        match load_components_reader(Cursor::new(csv)) {
            Err(AgentError::MissingField { row, field }) => {
                assert_eq!(row, 1);
                assert_eq!(field, "operating_minutes");
            }
            Err(e) => panic!("wrong error: {e}"),
            Ok(_) => panic!("expected a missing-field error"),
        }
    }

    #[test]
    fn missing_column_is_structural_error() {
        let csv = "part_id,serial_id\n1,2\n";
        assert!(load_components_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn garbage_is_parse_error() {
        let csv = format!("{HEADER}x,100234,96,10010,1,30000,7,3\n");
        assert!(matches!(
            load_components_reader(Cursor::new(csv)),
            Err(AgentError::Parse(_))
        ));
    }

    #[test]
    fn designations_fill_an_empty_mask() {
        let header = "part_id,serial_id,ac_type_mask,ac_types,location_id,operating_minutes,threshold_minutes,condition_mask,interchangeable_group_id\n";
        let csv = format!("{header}1,1,,Ми-8МТВ; r44,0,0,100,7,0\n2,2,16,AS350,0,0,100,7,0\n");
        let store = load_components_reader(Cursor::new(csv)).unwrap();
        assert_eq!(store.ac_types[0].bits(), 0x20 | 0x02);
        // The mask wins when both are present.
        assert_eq!(store.ac_types[1].bits(), 0x10);
    }

    #[test]
    fn unknown_designation_aborts() {
        let header = "part_id,serial_id,ac_type_mask,ac_types,location_id,operating_minutes,threshold_minutes,condition_mask,interchangeable_group_id\n";
        let csv = format!("{header}1,1,,Mi-8T;B737,0,0,100,7,0\n");
        match load_components_reader(Cursor::new(csv)) {
            Err(AgentError::Core(FmError::UnknownAcType(name))) => assert_eq!(name, "B737"),
            Err(e) => panic!("wrong error: {e}"),
            Ok(_) => panic!("expected an unknown-type error"),
        }
    }

    #[test]
    fn unknown_type_bits_dropped() {
        let csv = format!("{HEADER}1,1,65,0,0,100,7,0\n");
        let store = load_components_reader(Cursor::new(csv)).unwrap();
        assert_eq!(store.ac_types[0].bits(), 64);
    }
}

#[cfg(test)]
mod synthetic {
    use crate::generate_fleet;

    #[test]
    fn deterministic_for_seed() {
        let a = generate_fleet(200, 7);
        let b = generate_fleet(200, 7);
        assert_eq!(a.part_id, b.part_id);
        assert_eq!(a.location, b.location);
        assert_eq!(a.operating_minutes, b.operating_minutes);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_fleet(200, 1);
        let b = generate_fleet(200, 2);
        assert_ne!(a.operating_minutes, b.operating_minutes);
    }

    #[test]
    fn values_in_domain() {
        let store = generate_fleet(500, 3);
        assert_eq!(store.count, 500);
        for c in store.iter() {
            let p = c.record.location.grid_point();
            assert!(p.x < 1_000.0 && p.y < 1_000.0);
            assert!(!c.record.part_id.is_none());
            assert!(!c.record.ac_types.is_empty());
            assert!(c.record.threshold_minutes > 0);
        }
    }
}
