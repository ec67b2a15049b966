//! Temporal clusterer
//!
//! Sub-groups one spatial cluster by planting date: sort ascending, open a
//! sub-cluster anchored on the first date, append while a parcel's date is
//! within tolerance of the anchor, re-anchor on overflow. The window
//! re-anchors rather than slides; membership is measured against the
//! anchor, never against the previous member.

use chrono::NaiveDate;
use shared::ParcelClusterInfo;

pub fn cluster_by_planting_date(
    mut parcels: Vec<ParcelClusterInfo>,
    tolerance_days: i64,
) -> Vec<Vec<ParcelClusterInfo>> {
    if parcels.is_empty() {
        return Vec::new();
    }

    // Stable sort: parcels with equal dates keep their input order.
    parcels.sort_by_key(|p| p.planting_date);

    let mut clusters: Vec<Vec<ParcelClusterInfo>> = Vec::new();
    let mut current: Vec<ParcelClusterInfo> = Vec::new();
    let mut anchor: Option<NaiveDate> = None;

    for parcel in parcels {
        let within_tolerance = anchor.is_some_and(|anchor_date| {
            (parcel.planting_date - anchor_date).num_days().abs() <= tolerance_days
        });
        if within_tolerance {
            current.push(parcel);
        } else {
            if !current.is_empty() {
                clusters.push(std::mem::take(&mut current));
            }
            anchor = Some(parcel.planting_date);
            current.push(parcel);
        }
    }
    clusters.push(current);

    clusters
}
