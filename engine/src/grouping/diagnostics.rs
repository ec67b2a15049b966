//! Ungrouped diagnostics
//!
//! Read-only annotation pass over the finalized ungrouped records: a
//! nearest same-variety group suggestion where one is close enough, plus
//! reason-specific boilerplate. Never mutates group membership.

use shared::{ProposedGroup, UngroupedParcelInfo, UngroupedReason};

use crate::geometry;

/// Secondary proximity band for manual-override suggestions. Distinct from
/// the clustering threshold: close enough to suggest a manual merge, too
/// far to have clustered automatically.
pub const SUGGESTION_RADIUS_M: f64 = 5_000.0;

pub fn annotate(ungrouped: &mut [UngroupedParcelInfo], groups: &[ProposedGroup]) {
    for record in ungrouped.iter_mut() {
        if let Some(coordinate) = record.parcel.coordinate {
            let nearest = groups
                .iter()
                .filter(|g| g.variety == record.parcel.variety)
                .map(|g| (g, geometry::distance_m(coordinate, g.centroid)))
                .min_by(|(_, a), (_, b)| a.total_cmp(b));
            if let Some((group, distance)) = nearest {
                if distance <= SUGGESTION_RADIUS_M {
                    record.nearest_group_number = Some(group.group_number);
                    record.nearest_group_distance_m = Some(distance);
                    record.suggestions.push(format!(
                        "Group G{:02} of the same variety lies {:.0} m away; consider a manual assignment",
                        group.group_number, distance
                    ));
                }
            }
        }
        record
            .suggestions
            .extend(boilerplate(record.reason).iter().map(|s| s.to_string()));
    }
}

fn boilerplate(reason: UngroupedReason) -> &'static [&'static str] {
    match reason {
        UngroupedReason::MissingCoordinate => {
            &["Record a survey coordinate for the parcel and rerun group formation"]
        }
        UngroupedReason::TooFewPlots => &[
            "Review the proximity threshold or form an exception group for isolated parcels",
            "Lower the minimum parcel count or merge manually with a neighboring group",
        ],
        UngroupedReason::InsufficientArea => {
            &["Lower the minimum group area or merge manually with a neighboring group"]
        }
    }
}
