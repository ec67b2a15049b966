//! Group synthesizer
//!
//! Computes planting window, median planting date, centroid, union boundary
//! and total area of an accepted bucket, producing a proposed group.

use geo::Polygon;
use rust_decimal::Decimal;
use shared::{DateRange, MapPoint, ParcelClusterInfo, ProposedGroup};

use crate::geometry;

pub fn synthesize(group_number: u32, members: Vec<ParcelClusterInfo>) -> ProposedGroup {
    assert!(
        !members.is_empty(),
        "cannot synthesize a group without members"
    );

    let mut dates: Vec<_> = members.iter().map(|p| p.planting_date).collect();
    dates.sort();
    let planting_window = DateRange::new(dates[0], dates[dates.len() - 1]);
    // Lower median: the middle element of the sorted list, no averaging of
    // the two middle dates on even counts.
    let median_planting_date = dates[dates.len() / 2];

    let coordinates: Vec<MapPoint> = members
        .iter()
        .map(|p| {
            p.coordinate
                .expect("parcel without coordinate reached group synthesis")
        })
        .collect();
    let centroid = geometry::mean_point(&coordinates);

    let boundaries: Vec<Polygon<f64>> =
        members.iter().filter_map(|p| p.boundary.clone()).collect();
    let boundary =
        geometry::union_boundaries(&boundaries).map(geometry::UnionOutcome::collapse_to_hull);

    // Sum of member areas, not the union polygon's area; overlapping survey
    // boundaries must not change the reported total.
    let total_area_rai: Decimal = members.iter().map(|p| p.area_rai).sum();

    let variety = members[0].variety.clone();

    ProposedGroup {
        group_number,
        variety,
        planting_window,
        median_planting_date,
        members,
        centroid,
        boundary,
        total_area_rai,
    }
}
