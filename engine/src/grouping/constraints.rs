//! Constraint resolver
//!
//! Enforces group size bounds on a date sub-cluster: undersized clusters
//! are rejected member-by-member, oversized clusters are split with a
//! greedy area-packing heuristic. The count check runs first; a cluster
//! failing on count is never also evaluated for area.

use rust_decimal::Decimal;
use shared::{GroupingParameters, ParcelClusterInfo, UngroupedReason};

/// Outcome of resolving one date sub-cluster against the size bounds.
#[derive(Debug)]
pub enum Resolution {
    /// Accepted as-is or split; each bucket becomes an independent group.
    Accepted(Vec<Vec<ParcelClusterInfo>>),
    /// Every member reported ungrouped with the given reason.
    Rejected {
        parcels: Vec<ParcelClusterInfo>,
        reason: UngroupedReason,
    },
}

pub fn resolve(cluster: Vec<ParcelClusterInfo>, params: &GroupingParameters) -> Resolution {
    if cluster.len() < params.min_plots_per_group {
        return Resolution::Rejected {
            parcels: cluster,
            reason: UngroupedReason::TooFewPlots,
        };
    }

    let total_area: Decimal = cluster.iter().map(|p| p.area_rai).sum();
    if total_area < params.min_group_area_rai {
        return Resolution::Rejected {
            parcels: cluster,
            reason: UngroupedReason::InsufficientArea,
        };
    }

    if cluster.len() > params.max_plots_per_group || total_area > params.max_group_area_rai {
        return Resolution::Accepted(split_by_area(cluster, params));
    }

    Resolution::Accepted(vec![cluster])
}

/// Greedy area packing: sort by area descending so large parcels anchor the
/// buckets and small ones fill the remaining capacity, add while the running
/// area stays within the maximum AND the running count stays under the
/// maximum, open a new bucket on overflow. Buckets are not re-validated; a
/// single parcel exceeding the maximum area still forms its own bucket.
fn split_by_area(
    mut cluster: Vec<ParcelClusterInfo>,
    params: &GroupingParameters,
) -> Vec<Vec<ParcelClusterInfo>> {
    // Stable sort keeps equal-area parcels in discovery order.
    cluster.sort_by(|a, b| b.area_rai.cmp(&a.area_rai));

    let mut buckets: Vec<Vec<ParcelClusterInfo>> = Vec::new();
    let mut current: Vec<ParcelClusterInfo> = Vec::new();
    let mut current_area = Decimal::ZERO;

    for parcel in cluster {
        let fits = current_area + parcel.area_rai <= params.max_group_area_rai
            && current.len() < params.max_plots_per_group;
        if !current.is_empty() && !fits {
            buckets.push(std::mem::take(&mut current));
            current_area = Decimal::ZERO;
        }
        current_area += parcel.area_rai;
        current.push(parcel);
    }
    if !current.is_empty() {
        buckets.push(current);
    }

    buckets
}
