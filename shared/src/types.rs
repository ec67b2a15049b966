//! Common types used across the platform

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A coordinate in a projected planar reference system, in meters.
///
/// Parcel surveys are recorded in a projected CRS (UTM zone 47N/48N for
/// Thailand), so Euclidean distance is an acceptable approximation at field
/// scale and no geodesic correction is performed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MapPoint {
    /// Easting in meters
    pub x: f64,
    /// Northing in meters
    pub y: f64,
}

impl MapPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<MapPoint> for geo::Point<f64> {
    fn from(point: MapPoint) -> Self {
        geo::Point::new(point.x, point.y)
    }
}

impl From<geo::Point<f64>> for MapPoint {
    fn from(point: geo::Point<f64>) -> Self {
        Self {
            x: point.x(),
            y: point.y(),
        }
    }
}

/// Date range for planting windows and queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` falls inside the range, inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Length of the range in days.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
