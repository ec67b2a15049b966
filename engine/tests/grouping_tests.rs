//! Tests for the group-formation engine
//!
//! Covers the engine's observable guarantees: variety purity, determinism,
//! area conservation, bound satisfaction, completeness, and the behavior of
//! each pipeline stage as seen through the public API.

use chrono::NaiveDate;
use geo::polygon;
use rust_decimal::Decimal;
use uuid::Uuid;

use rice_grouping_engine::GroupFormationService;
use shared::{GroupingParameters, MapPoint, ParcelClusterInfo, RiceVariety, UngroupedReason};

/// Helper to create a parcel at a position
fn parcel(x: f64, y: f64, date: &str, area: &str, variety: RiceVariety) -> ParcelClusterInfo {
    ParcelClusterInfo {
        parcel_id: Uuid::new_v4(),
        cultivation_id: Uuid::new_v4(),
        coordinate: Some(MapPoint::new(x, y)),
        boundary: None,
        planting_date: date.parse().unwrap(),
        variety,
        area_rai: area.parse().unwrap(),
        variety_confirmed: true,
        is_grouped: false,
    }
}

fn service(params: GroupingParameters) -> GroupFormationService {
    GroupFormationService::new(params).unwrap()
}

/// Parameters with the size floors lowered, for observing small clusters.
fn relaxed_params() -> GroupingParameters {
    GroupingParameters {
        min_plots_per_group: 1,
        min_group_area_rai: Decimal::ZERO,
        ..GroupingParameters::default()
    }
}

// =============================================================================
// Scenario Tests
// =============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn compact_cluster_forms_one_group() {
        // Six same-variety parcels within 100 m, identical planting dates,
        // 20 rai in total against 15-50 rai and 5-15 parcel bounds.
        let parcels = vec![
            parcel(0.0, 0.0, "2026-06-01", "4", RiceVariety::RD6),
            parcel(50.0, 0.0, "2026-06-01", "4", RiceVariety::RD6),
            parcel(0.0, 50.0, "2026-06-01", "3", RiceVariety::RD6),
            parcel(50.0, 50.0, "2026-06-01", "3", RiceVariety::RD6),
            parcel(25.0, 25.0, "2026-06-01", "3", RiceVariety::RD6),
            parcel(75.0, 25.0, "2026-06-01", "3", RiceVariety::RD6),
        ];
        let outcome = service(GroupingParameters::default()).form_groups(&parcels);

        assert_eq!(outcome.groups.len(), 1);
        assert_eq!(outcome.groups[0].member_count(), 6);
        assert_eq!(outcome.groups[0].group_number, 1);
        assert_eq!(outcome.groups[0].total_area_rai, Decimal::from(20));
        assert!(outcome.ungrouped.is_empty());
    }

    #[test]
    fn undersized_cluster_rejected_as_too_few_plots() {
        let parcels = vec![
            parcel(0.0, 0.0, "2026-06-01", "6", RiceVariety::RD6),
            parcel(50.0, 0.0, "2026-06-01", "6", RiceVariety::RD6),
            parcel(100.0, 0.0, "2026-06-01", "6", RiceVariety::RD6),
        ];
        let outcome = service(GroupingParameters::default()).form_groups(&parcels);

        assert!(outcome.groups.is_empty());
        assert_eq!(outcome.ungrouped.len(), 3);
        for record in &outcome.ungrouped {
            assert_eq!(record.reason, UngroupedReason::TooFewPlots);
        }
    }

    #[test]
    fn parcel_without_coordinate_never_reaches_clustering() {
        let mut no_coordinate = parcel(0.0, 0.0, "2026-06-01", "6", RiceVariety::RD6);
        no_coordinate.coordinate = None;
        let outcome = service(GroupingParameters::default()).form_groups(&[no_coordinate]);

        assert!(outcome.groups.is_empty());
        assert_eq!(outcome.ungrouped.len(), 1);
        assert_eq!(
            outcome.ungrouped[0].reason,
            UngroupedReason::MissingCoordinate
        );
    }

    #[test]
    fn oversized_cluster_splits_largest_first() {
        // 5 + 19×4 = 81 rai and 20 parcels against 50 rai / 15 parcel caps.
        let mut parcels = vec![parcel(0.0, 0.0, "2026-06-01", "5", RiceVariety::RD6)];
        let largest_id = parcels[0].parcel_id;
        for _ in 0..19 {
            parcels.push(parcel(0.0, 0.0, "2026-06-01", "4", RiceVariety::RD6));
        }
        let outcome = service(GroupingParameters::default()).form_groups(&parcels);

        assert!(outcome.groups.len() >= 2);
        assert!(outcome.ungrouped.is_empty());
        for group in &outcome.groups {
            assert!(group.total_area_rai <= Decimal::from(50));
            assert!(group.member_count() <= 15);
        }
        // Greedy largest-first: the biggest parcel anchors the first bucket.
        assert_eq!(outcome.groups[0].members[0].parcel_id, largest_id);
    }

    #[test]
    fn distant_planting_dates_split_temporally() {
        // Ten days apart with a two-day tolerance: the second parcel opens a
        // new sub-cluster even though both share a location.
        let parcels = vec![
            parcel(0.0, 0.0, "2026-06-01", "6", RiceVariety::RD6),
            parcel(10.0, 0.0, "2026-06-11", "6", RiceVariety::RD6),
        ];
        let outcome = service(relaxed_params()).form_groups(&parcels);

        assert_eq!(outcome.groups.len(), 2);
        for group in &outcome.groups {
            assert_eq!(group.member_count(), 1);
            assert_eq!(group.planting_window.start, group.planting_window.end);
        }
    }
}

// =============================================================================
// Engine Property Tests
// =============================================================================

mod properties {
    use super::*;

    fn mixed_scene() -> Vec<ParcelClusterInfo> {
        let mut parcels = Vec::new();
        // A viable RD6 cluster.
        for i in 0..6 {
            parcels.push(parcel(
                i as f64 * 40.0,
                0.0,
                "2026-06-01",
                "4",
                RiceVariety::RD6,
            ));
        }
        // A co-located Hom Mali cluster, also viable.
        for i in 0..5 {
            parcels.push(parcel(
                i as f64 * 40.0,
                100.0,
                "2026-06-02",
                "4",
                RiceVariety::HomMali105,
            ));
        }
        // An isolated trio, too few to group.
        for i in 0..3 {
            parcels.push(parcel(
                100_000.0 + i as f64 * 40.0,
                0.0,
                "2026-06-01",
                "4",
                RiceVariety::RD6,
            ));
        }
        // A parcel with no coordinate.
        let mut lost = parcel(0.0, 0.0, "2026-06-01", "4", RiceVariety::RD6);
        lost.coordinate = None;
        parcels.push(lost);
        parcels
    }

    #[test]
    fn variety_purity() {
        let outcome = service(GroupingParameters::default()).form_groups(&mixed_scene());
        assert!(outcome.groups.len() >= 2);
        for group in &outcome.groups {
            assert!(group.members.iter().all(|m| m.variety == group.variety));
        }
    }

    #[test]
    fn determinism_across_runs() {
        let parcels = mixed_scene();
        let engine = service(GroupingParameters::default());
        let first = engine.form_groups(&parcels);
        let second = engine.form_groups(&parcels);

        let membership = |outcome: &rice_grouping_engine::GroupingOutcome| {
            outcome
                .groups
                .iter()
                .map(|g| {
                    (
                        g.group_number,
                        g.members.iter().map(|m| m.parcel_id).collect::<Vec<_>>(),
                    )
                })
                .collect::<Vec<_>>()
        };
        let rejections = |outcome: &rice_grouping_engine::GroupingOutcome| {
            outcome
                .ungrouped
                .iter()
                .map(|u| (u.parcel.parcel_id, u.reason))
                .collect::<Vec<_>>()
        };

        assert_eq!(membership(&first), membership(&second));
        assert_eq!(rejections(&first), rejections(&second));
    }

    #[test]
    fn completeness_no_parcel_dropped_or_duplicated() {
        let parcels = mixed_scene();
        let outcome = service(GroupingParameters::default()).form_groups(&parcels);

        let mut seen: Vec<Uuid> = outcome
            .groups
            .iter()
            .flat_map(|g| g.members.iter().map(|m| m.parcel_id))
            .chain(outcome.ungrouped.iter().map(|u| u.parcel.parcel_id))
            .collect();
        seen.sort();

        let mut expected: Vec<Uuid> = parcels.iter().map(|p| p.parcel_id).collect();
        expected.sort();

        assert_eq!(seen, expected);
    }

    #[test]
    fn area_conservation() {
        let outcome = service(GroupingParameters::default()).form_groups(&mixed_scene());
        for group in &outcome.groups {
            let sum: Decimal = group.members.iter().map(|m| m.area_rai).sum();
            assert_eq!(group.total_area_rai, sum);
        }
    }

    #[test]
    fn bounds_hold_on_the_non_split_path() {
        let params = GroupingParameters::default();
        let outcome = service(params.clone()).form_groups(&mixed_scene());
        // The scene's accepted clusters fit without splitting, so every
        // group satisfies both closed intervals.
        for group in &outcome.groups {
            assert!(group.member_count() >= params.min_plots_per_group);
            assert!(group.member_count() <= params.max_plots_per_group);
            assert!(group.total_area_rai >= params.min_group_area_rai);
            assert!(group.total_area_rai <= params.max_group_area_rai);
        }
    }

    #[test]
    fn group_numbers_follow_variety_then_discovery_order() {
        let outcome = service(GroupingParameters::default()).form_groups(&mixed_scene());
        let numbers: Vec<u32> = outcome.groups.iter().map(|g| g.group_number).collect();
        assert_eq!(numbers, (1..=numbers.len() as u32).collect::<Vec<_>>());
        // RD6 was encountered first in the input.
        assert_eq!(outcome.groups[0].variety, RiceVariety::RD6);
    }
}

// =============================================================================
// Eligibility and Parameter Tests
// =============================================================================

mod eligibility {
    use super::*;

    #[test]
    fn ineligible_parcels_are_excluded_entirely() {
        let mut already_grouped = parcel(0.0, 0.0, "2026-06-01", "4", RiceVariety::RD6);
        already_grouped.is_grouped = true;
        let mut unconfirmed = parcel(10.0, 0.0, "2026-06-01", "4", RiceVariety::RD6);
        unconfirmed.variety_confirmed = false;

        let outcome = service(GroupingParameters::default())
            .form_groups(&[already_grouped.clone(), unconfirmed.clone()]);

        assert!(outcome.groups.is_empty());
        assert!(outcome.ungrouped.is_empty());
        assert_eq!(outcome.summary.eligible_parcels, 0);
    }

    #[test]
    fn inverted_bounds_rejected_at_construction() {
        let params = GroupingParameters {
            min_plots_per_group: 20,
            max_plots_per_group: 15,
            ..GroupingParameters::default()
        };
        assert!(GroupFormationService::new(params).is_err());
    }
}

// =============================================================================
// Diagnostics Tests
// =============================================================================

mod diagnostics {
    use super::*;

    fn scene_with_nearby_rejects() -> Vec<ParcelClusterInfo> {
        let mut parcels = Vec::new();
        // A viable RD6 group around the origin.
        for i in 0..6 {
            parcels.push(parcel(
                i as f64 * 40.0,
                0.0,
                "2026-06-01",
                "4",
                RiceVariety::RD6,
            ));
        }
        // An RD6 trio 3 km east: beyond the 2 km clustering threshold but
        // inside the suggestion radius.
        for i in 0..3 {
            parcels.push(parcel(
                3_100.0 + i as f64 * 40.0,
                0.0,
                "2026-06-01",
                "4",
                RiceVariety::RD6,
            ));
        }
        parcels
    }

    #[test]
    fn nearby_same_variety_group_is_suggested() {
        let outcome = service(GroupingParameters::default()).form_groups(&scene_with_nearby_rejects());

        assert_eq!(outcome.groups.len(), 1);
        assert_eq!(outcome.ungrouped.len(), 3);
        for record in &outcome.ungrouped {
            assert_eq!(record.nearest_group_number, Some(1));
            let distance = record.nearest_group_distance_m.unwrap();
            assert!(distance > 2_000.0 && distance < 5_000.0);
            assert!(record.suggestions.iter().any(|s| s.contains("G01")));
        }
    }

    #[test]
    fn different_variety_groups_are_never_suggested() {
        let mut parcels = Vec::new();
        for i in 0..6 {
            parcels.push(parcel(
                i as f64 * 40.0,
                0.0,
                "2026-06-01",
                "4",
                RiceVariety::HomMali105,
            ));
        }
        for i in 0..3 {
            parcels.push(parcel(
                3_100.0 + i as f64 * 40.0,
                0.0,
                "2026-06-01",
                "4",
                RiceVariety::RD6,
            ));
        }
        let outcome = service(GroupingParameters::default()).form_groups(&parcels);

        assert_eq!(outcome.ungrouped.len(), 3);
        for record in &outcome.ungrouped {
            assert_eq!(record.nearest_group_number, None);
            assert_eq!(record.nearest_group_distance_m, None);
        }
    }

    #[test]
    fn boilerplate_suggestions_are_always_present() {
        let parcels = vec![
            parcel(0.0, 0.0, "2026-06-01", "6", RiceVariety::RD6),
            parcel(50.0, 0.0, "2026-06-01", "6", RiceVariety::RD6),
        ];
        let outcome = service(GroupingParameters::default()).form_groups(&parcels);
        for record in &outcome.ungrouped {
            assert!(!record.suggestions.is_empty());
            assert!(!record.description.is_empty());
            assert!(!record.description_th.is_empty());
        }
    }
}

// =============================================================================
// Synthesis Tests
// =============================================================================

mod synthesis {
    use super::*;

    #[test]
    fn adjacent_boundaries_union_into_one_polygon() {
        let mut parcels = Vec::new();
        for i in 0..5 {
            let offset = i as f64 * 100.0;
            let mut p = parcel(offset + 50.0, 50.0, "2026-06-01", "4", RiceVariety::RD6);
            // Overlapping 110 m squares along a row.
            p.boundary = Some(polygon![
                (x: offset, y: 0.0),
                (x: offset + 110.0, y: 0.0),
                (x: offset + 110.0, y: 110.0),
                (x: offset, y: 110.0),
                (x: offset, y: 0.0),
            ]);
            parcels.push(p);
        }
        let outcome = service(GroupingParameters::default()).form_groups(&parcels);

        assert_eq!(outcome.groups.len(), 1);
        let group = &outcome.groups[0];
        assert!(group.boundary.is_some());
        assert!(group.boundary_wkt().unwrap().starts_with("POLYGON"));
        // Sum of member areas, not the union polygon's area.
        assert_eq!(group.total_area_rai, Decimal::from(20));
    }

    #[test]
    fn median_is_lower_median_on_even_counts() {
        let dates = ["2026-06-01", "2026-06-01", "2026-06-02", "2026-06-03"];
        let parcels: Vec<_> = dates
            .iter()
            .enumerate()
            .map(|(i, d)| parcel(i as f64 * 10.0, 0.0, d, "4", RiceVariety::RD6))
            .collect();
        let outcome = service(relaxed_params()).form_groups(&parcels);

        assert_eq!(outcome.groups.len(), 1);
        assert_eq!(
            outcome.groups[0].median_planting_date,
            "2026-06-02".parse::<NaiveDate>().unwrap()
        );
    }

    #[test]
    fn summary_counts_match_the_outcome() {
        let mut parcels = Vec::new();
        for i in 0..6 {
            parcels.push(parcel(
                i as f64 * 40.0,
                0.0,
                "2026-06-01",
                "4",
                RiceVariety::RD6,
            ));
        }
        let mut lost = parcel(0.0, 0.0, "2026-06-01", "4", RiceVariety::RD6);
        lost.coordinate = None;
        parcels.push(lost);

        let outcome = service(GroupingParameters::default()).form_groups(&parcels);
        let summary = &outcome.summary;

        assert_eq!(summary.eligible_parcels, 7);
        assert_eq!(summary.groups_formed, 1);
        assert_eq!(summary.parcels_grouped, 6);
        assert_eq!(summary.parcels_ungrouped, 1);
        assert_eq!(summary.missing_coordinate, 1);
        assert_eq!(summary.too_few_plots, 0);
        assert_eq!(summary.insufficient_area, 0);
        assert_eq!(summary.total_grouped_area_rai, Decimal::from(24));
    }
}
