//! Geometry collaborator boundary
//!
//! Wraps the `geo` operations the engine relies on and converts between the
//! platform's [`MapPoint`] and `geo` types at this module boundary. Union
//! failures on degenerate survey polygons degrade to `None` so one bad
//! boundary never aborts a formation run.

use std::panic::{catch_unwind, AssertUnwindSafe};

use geo::{ConvexHull, Distance, Euclidean, MultiPolygon, Point, Polygon};
use shared::MapPoint;

/// Euclidean distance between two parcel coordinates in meters.
pub fn distance_m(a: MapPoint, b: MapPoint) -> f64 {
    Euclidean.distance(Point::from(a), Point::from(b))
}

/// Arithmetic mean of a set of coordinates: mean of x and mean of y
/// independently, not an area-weighted centroid.
pub fn mean_point(points: &[MapPoint]) -> MapPoint {
    assert!(!points.is_empty(), "mean_point requires at least one point");
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.x).sum();
    let sum_y: f64 = points.iter().map(|p| p.y).sum();
    MapPoint::new(sum_x / n, sum_y / n)
}

/// Union of parcel boundaries: a single polygon or a multi-part result.
#[derive(Debug, Clone)]
pub enum UnionOutcome {
    Single(Polygon<f64>),
    Multi(MultiPolygon<f64>),
}

impl UnionOutcome {
    /// Collapse to one simple polygon. A multi-part union becomes the convex
    /// hull of its parts; downstream consumers require a single polygon and
    /// accept the loss of concavity.
    pub fn collapse_to_hull(self) -> Polygon<f64> {
        match self {
            UnionOutcome::Single(polygon) => polygon,
            UnionOutcome::Multi(multi) => multi.convex_hull(),
        }
    }
}

/// Union the given boundaries.
///
/// Returns `None` when the list is empty or the union operation fails on
/// invalid geometry; the failure is logged and the caller proceeds without
/// a boundary.
pub fn union_boundaries(boundaries: &[Polygon<f64>]) -> Option<UnionOutcome> {
    if boundaries.is_empty() {
        return None;
    }

    let unioned = catch_unwind(AssertUnwindSafe(|| geo::unary_union(boundaries.iter())))
        .map_err(|_| {
            tracing::warn!(
                boundary_count = boundaries.len(),
                "boundary union failed on invalid geometry, group keeps a null boundary"
            );
        })
        .ok()?;

    let mut polygons = unioned.0;
    match polygons.len() {
        0 => None,
        1 => Some(UnionOutcome::Single(polygons.remove(0))),
        _ => Some(UnionOutcome::Multi(MultiPolygon(polygons))),
    }
}
