//! Land parcel models

use chrono::NaiveDate;
use geo::Polygon;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::MapPoint;

/// A land parcel prepared for group formation in one cultivation season.
///
/// Snapshot of a parcel joined with its confirmed variety selection for the
/// target season. The engine reads it and never persists it; all grouping
/// state lives in the run's output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParcelClusterInfo {
    pub parcel_id: Uuid,
    /// Cultivation record linking this parcel to the target season.
    pub cultivation_id: Uuid,
    /// Representative coordinate (survey point or boundary centroid).
    /// Parcels without one are reported ungrouped, never clustered.
    pub coordinate: Option<MapPoint>,
    /// Parcel boundary, when a survey polygon exists.
    pub boundary: Option<Polygon<f64>>,
    pub planting_date: NaiveDate,
    pub variety: RiceVariety,
    /// Area in rai (Thai unit: 1 rai = 1,600 m²)
    pub area_rai: Decimal,
    /// Whether the variety selection is confirmed for the season.
    pub variety_confirmed: bool,
    /// Whether the parcel is already assigned to a group this season.
    pub is_grouped: bool,
}

/// Rice varieties commonly grown in Thailand
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiceVariety {
    HomMali105,
    RD6,
    RD15,
    RD41,
    RD47,
    PathumThani1,
    Riceberry,
    /// Custom variety with name
    Custom(String),
}

impl std::fmt::Display for RiceVariety {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiceVariety::HomMali105 => write!(f, "Hom Mali 105"),
            RiceVariety::RD6 => write!(f, "RD6"),
            RiceVariety::RD15 => write!(f, "RD15"),
            RiceVariety::RD41 => write!(f, "RD41"),
            RiceVariety::RD47 => write!(f, "RD47"),
            RiceVariety::PathumThani1 => write!(f, "Pathum Thani 1"),
            RiceVariety::Riceberry => write!(f, "Riceberry"),
            RiceVariety::Custom(name) => write!(f, "{}", name),
        }
    }
}
