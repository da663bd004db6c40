//! Unit tests for the transition functions.

#[cfg(test)]
mod helpers {
    use fm_agent::ComponentRecord;
    use fm_core::{
        AcType, AcTypeSet, Condition, GroupId, LocationId, PartId, SerialId, SimConfig, Step,
        Urgency,
    };

    use crate::{LayerContext, StatusMessage};

    pub fn ctx() -> LayerContext {
        LayerContext::new(Step(0), &SimConfig::new(1, 1))
    }

    pub fn mi8() -> AcTypeSet {
        [AcType::Mi8T].into_iter().collect()
    }

    pub fn part(id: u16, operating: u32, threshold: u32) -> ComponentRecord {
        ComponentRecord {
            part_id:           PartId(id),
            serial_id:         SerialId(1_000 + id as u32),
            ac_types:          mi8(),
            location:          LocationId(10_010),
            operating_minutes: operating,
            threshold_minutes: threshold,
            condition:         Condition::SERVICEABLE,
            group:             GroupId(1),
        }
    }

    pub fn status(id: u16, remaining_hours: u32) -> StatusMessage {
        StatusMessage {
            part_id:         PartId(id),
            serial_id:       SerialId(5_000 + id as u32),
            ac_types:        mi8(),
            location:        LocationId(20_020),
            remaining_hours,
            urgency:         Urgency::Normal,
            group:           GroupId(1),
            operational:     true,
        }
    }
}

#[cfg(test)]
mod monitor {
    use fm_core::{Condition, Urgency};

    use super::helpers::{ctx, part};
    use crate::{Patch, monitor};

    fn urgency_of(operating: u32, threshold: u32) -> Urgency {
        match monitor(&part(1, operating, threshold), &ctx()).patch {
            Some(Patch::Monitor { urgency, .. }) => urgency,
            other => panic!("unexpected patch {other:?}"),
        }
    }

    #[test]
    fn urgency_is_one_of_three_classes() {
        for (op, th) in [(0, 100_000), (0, 20_000), (0, 1_000), (50_000, 10), (0, 0)] {
            let u = urgency_of(op, th);
            assert!(matches!(u, Urgency::Normal | Urgency::Warning | Urgency::Critical), "{u:?}");
        }
    }

    #[test]
    fn urgency_cutoffs() {
        assert_eq!(urgency_of(0, 5_999), Urgency::Critical);
        assert_eq!(urgency_of(0, 6_000), Urgency::Warning);
        assert_eq!(urgency_of(0, 29_999), Urgency::Warning);
        assert_eq!(urgency_of(0, 30_000), Urgency::Normal);
        assert_eq!(urgency_of(29_000, 30_000), Urgency::Critical);
    }

    #[test]
    fn overdue_is_critical_with_zero_life() {
        let out = monitor(&part(1, 40_000, 30_000), &ctx());
        let status = out.message.expect("overdue part must broadcast");
        assert_eq!(status.remaining_hours, 0);
        assert_eq!(status.urgency, Urgency::Critical);
        assert_eq!(out.patch, Some(Patch::Monitor { urgency: Urgency::Critical, utilization_ratio: 1.0 }));
    }

    #[test]
    fn zero_interval_reports_zero_utilization() {
        let out = monitor(&part(1, 10, 0), &ctx());
        assert_eq!(out.patch, Some(Patch::Monitor { urgency: Urgency::Critical, utilization_ratio: 0.0 }));
    }

    #[test]
    fn utilization_ratio_computed() {
        let out = monitor(&part(1, 15_000, 60_000), &ctx());
        assert_eq!(out.patch, Some(Patch::Monitor { urgency: Urgency::Normal, utilization_ratio: 0.25 }));
    }

    #[test]
    fn publishes_when_urgent() {
        assert!(monitor(&part(1, 0, 20_000), &ctx()).message.is_some());
        assert!(monitor(&part(1, 0, 1_000), &ctx()).message.is_some());
    }

    #[test]
    fn publishes_when_flagged_for_maintenance() {
        let mut p = part(1, 0, 100_000);
        p.condition = Condition::NOT_INSTALLED;
        assert!(p.condition.needs_maintenance);
        let status = monitor(&p, &ctx()).message.expect("flagged part must broadcast");
        assert_eq!(status.urgency, Urgency::Normal);
        assert_eq!(status.remaining_hours, 100_000 / 60);
    }

    #[test]
    fn silent_when_normal_and_unflagged() {
        let mut p = part(1, 0, 100_000);
        p.condition = Condition::BROKEN;
        assert!(monitor(&p, &ctx()).message.is_none());
    }

    #[test]
    fn status_carries_identity_and_flags() {
        let mut p = part(9, 0, 1_200);
        p.condition = Condition::DONOR;
        let status = monitor(&p, &ctx()).message.unwrap();
        assert_eq!(status.part_id, p.part_id);
        assert_eq!(status.serial_id, p.serial_id);
        assert_eq!(status.location, p.location);
        assert_eq!(status.group, p.group);
        assert!(!status.operational);
        assert_eq!(status.remaining_hours, 20);
    }

    #[test]
    fn idempotent_on_unchanged_state() {
        let p = part(3, 12_345, 40_000);
        assert_eq!(monitor(&p, &ctx()), monitor(&p, &ctx()));
    }
}

#[cfg(test)]
mod replacement {
    use fm_core::{AcType, GroupId, PartId, SimConfig, Step, Urgency};

    use super::helpers::{ctx, part, status};
    use crate::{LayerContext, Patch, find_replacements, is_viable, monitor};

    #[test]
    fn below_warning_skips_entirely() {
        let own = part(1, 0, 100_000);
        let out = find_replacements(&own, Urgency::Normal, &[status(2, 5_000)], &ctx());
        assert!(out.is_skip());
    }

    #[test]
    fn picks_maximum_remaining_hours() {
        let own = part(1, 29_000, 30_000);
        let statuses = [status(2, 2_000), status(3, 5_000), status(4, 3_000)];
        let out = find_replacements(&own, Urgency::Critical, &statuses, &ctx());
        assert_eq!(out.patch, Some(Patch::Replacements { available: 3, best: PartId(3) }));

        let req = out.message.expect("request expected");
        assert_eq!(req.best_replacement, PartId(3));
        assert_eq!(req.replacement_hours, 5_000);
        assert_eq!(req.total_options, 3);
        assert_eq!(req.urgency, Urgency::Critical);
        assert_eq!(req.requester, own.part_id);
        assert_eq!(req.requester_location, own.location);
    }

    #[test]
    fn tie_goes_to_lowest_part_id_in_any_order() {
        let own = part(1, 29_000, 30_000);
        let forward = [status(7, 4_000), status(5, 4_000), status(6, 1_500)];
        let mut backward = forward;
        backward.reverse();
        for statuses in [forward, backward] {
            let out = find_replacements(&own, Urgency::Warning, &statuses, &ctx());
            assert_eq!(out.message.unwrap().best_replacement, PartId(5));
        }
    }

    #[test]
    fn rejects_each_failing_predicate() {
        let own = part(1, 29_000, 30_000);
        let t = ctx().thresholds;

        let mut worn = status(2, 1_000);
        assert!(!is_viable(&own, &worn, &t), "exactly 1000 h is not enough");
        worn.remaining_hours = 1_001;
        assert!(is_viable(&own, &worn, &t));

        let mut down = status(3, 5_000);
        down.operational = false;
        assert!(!is_viable(&own, &down, &t));

        let mut wrong_type = status(4, 5_000);
        wrong_type.ac_types = [AcType::R44].into_iter().collect();
        assert!(!is_viable(&own, &wrong_type, &t));

        let mut wrong_group = status(5, 5_000);
        wrong_group.group = GroupId(2);
        assert!(!is_viable(&own, &wrong_group, &t));

        let mut universal = status(6, 5_000);
        universal.group = GroupId::ANY;
        assert!(is_viable(&own, &universal, &t));
    }

    #[test]
    fn selected_best_satisfies_all_predicates() {
        let own = part(1, 29_000, 30_000);
        let mut statuses = vec![status(2, 9_000), status(3, 8_000), status(4, 900), status(5, 7_000)];
        statuses[0].operational = false;
        statuses[1].group = GroupId(9);
        let out = find_replacements(&own, Urgency::Critical, &statuses, &ctx());
        let best = out.message.unwrap().best_replacement;
        let chosen = statuses.iter().find(|s| s.part_id == best).unwrap();
        assert!(is_viable(&own, chosen, &ctx().thresholds));
        assert_eq!(best, PartId(5));
        assert_eq!(out.patch, Some(Patch::Replacements { available: 1, best: PartId(5) }));
    }

    #[test]
    fn none_viable_patches_zero_and_sends_nothing() {
        let own = part(1, 29_000, 30_000);
        let out = find_replacements(&own, Urgency::Warning, &[status(2, 10)], &ctx());
        assert_eq!(out.patch, Some(Patch::Replacements { available: 0, best: PartId::NONE }));
        assert!(out.message.is_none());
    }

    #[test]
    fn own_status_counts_when_viable() {
        // Wide warning band: 1500 h left is still a warning, yet above the
        // 1000 h candidate floor.
        let mut config = SimConfig::new(1, 1);
        config.thresholds.warning_minutes = 150_000;
        let ctx = LayerContext::new(Step(0), &config);

        let own = part(1, 0, 90_000);
        let mine = monitor(&own, &ctx).message.unwrap();
        assert_eq!(mine.urgency, Urgency::Warning);
        assert_eq!(mine.remaining_hours, 1_500);

        let out = find_replacements(&own, Urgency::Warning, [&mine], &ctx);
        assert_eq!(out.patch, Some(Patch::Replacements { available: 1, best: PartId(1) }));
        let req = out.message.unwrap();
        assert_eq!(req.best_replacement, own.part_id);
        assert_eq!(req.replacement_hours, 1_500);
        assert_eq!(req.total_options, 1);
    }

    #[test]
    fn same_part_number_other_serial_is_a_candidate() {
        let own = part(1, 29_000, 30_000);
        let out = find_replacements(&own, Urgency::Critical, &[status(1, 5_000)], &ctx());
        assert_eq!(out.message.unwrap().best_replacement, PartId(1));
    }
}

#[cfg(test)]
mod schedule {
    use fm_agent::ComponentStoreBuilder;
    use fm_core::{AgentId, Condition, LocationId, PartId, SerialId, Urgency};

    use super::helpers::{ctx, part};
    use crate::{Patch, ReplacementRequest, schedule_maintenance};

    fn request(best: u16, urgency: Urgency) -> ReplacementRequest {
        ReplacementRequest {
            requester:            PartId(99),
            requester_serial:     SerialId(99),
            requester_location:   LocationId(10_010),
            best_replacement:     PartId(best),
            replacement_hours:    4_000,
            replacement_location: LocationId(10_011),
            total_options:        1,
            urgency,
        }
    }

    #[test]
    fn counts_matching_requests_and_max_urgency() {
        let own = part(4, 0, 100_000);
        let reqs = [
            request(4, Urgency::Warning),
            request(5, Urgency::Critical),
            request(4, Urgency::Critical),
            request(4, Urgency::Warning),
        ];
        let out = schedule_maintenance(&own, &reqs, &ctx());
        assert_eq!(out.patch, Some(Patch::Schedule { priority: Urgency::Critical, pending: 3 }));
        assert!(out.message.is_none());
    }

    #[test]
    fn no_match_keeps_previous_values() {
        let own = part(4, 0, 100_000);
        let out = schedule_maintenance(&own, &[request(5, Urgency::Critical)], &ctx());
        assert!(out.is_skip());
    }

    #[test]
    fn non_operational_skips() {
        let mut own = part(4, 0, 100_000);
        own.condition = Condition::DONOR;
        let out = schedule_maintenance(&own, &[request(4, Urgency::Critical)], &ctx());
        assert!(out.is_skip());
    }

    #[test]
    fn patches_apply_to_own_row_only() {
        let mut store = ComponentStoreBuilder::new()
            .push(part(1, 0, 100_000))
            .push(part(2, 0, 100_000))
            .build();
        Patch::Schedule { priority: Urgency::Warning, pending: 2 }.apply(&mut store, AgentId(1));
        Patch::Replacements { available: 4, best: PartId(8) }.apply(&mut store, AgentId(1));
        assert_eq!(store.pending_requests, [0, 2]);
        assert_eq!(store.replacement_priority, [Urgency::Unset, Urgency::Warning]);
        assert_eq!(store.best_replacement, [PartId::NONE, PartId(8)]);
        assert_eq!(store.available_replacements, [0, 4]);
    }
}
