//! Parcel group models produced by the group-formation engine

use chrono::NaiveDate;
use geo::{LineString, Polygon};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::parcel::{ParcelClusterInfo, RiceVariety};
use crate::types::{DateRange, MapPoint};

/// Parameters controlling one group-formation run.
///
/// Bounds must satisfy min ≤ max for both the area pair and the parcel-count
/// pair; a violation is a caller error rejected at the engine entry point.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "crate::validation::validate_grouping_bounds"))]
pub struct GroupingParameters {
    /// Maximum distance between parcels to be spatially linked (meters)
    pub proximity_threshold_m: f64,
    /// Planting-date tolerance within a group (days)
    pub date_tolerance_days: i64,
    /// Minimum group area (rai)
    pub min_group_area_rai: Decimal,
    /// Maximum group area (rai)
    pub max_group_area_rai: Decimal,
    /// Minimum parcels per group
    pub min_plots_per_group: usize,
    /// Maximum parcels per group
    pub max_plots_per_group: usize,
}

impl Default for GroupingParameters {
    fn default() -> Self {
        Self {
            proximity_threshold_m: 2000.0,
            date_tolerance_days: 2,
            min_group_area_rai: Decimal::from(15),
            max_group_area_rai: Decimal::from(50),
            min_plots_per_group: 5,
            max_plots_per_group: 15,
        }
    }
}

/// A proposed parcel group, the unit of supervision and production planning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposedGroup {
    /// Sequential number, unique within a run, assigned in discovery order.
    pub group_number: u32,
    pub variety: RiceVariety,
    /// [earliest, latest] planting date across members.
    pub planting_window: DateRange,
    /// Lower median of the members' planting dates.
    pub median_planting_date: NaiveDate,
    pub members: Vec<ParcelClusterInfo>,
    /// Arithmetic mean of the member coordinates.
    pub centroid: MapPoint,
    /// Union of member boundaries collapsed to a single polygon. `None` when
    /// no member has a boundary or the union degraded.
    pub boundary: Option<Polygon<f64>>,
    /// Sum of member areas in rai. Authoritative for reporting even when
    /// member boundaries overlap.
    pub total_area_rai: Decimal,
}

impl ProposedGroup {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Boundary as a WKT POLYGON string for map rendering.
    pub fn boundary_wkt(&self) -> Option<String> {
        let polygon = self.boundary.as_ref()?;
        let mut rings = vec![wkt_ring(polygon.exterior())];
        rings.extend(polygon.interiors().iter().map(wkt_ring));
        Some(format!("POLYGON ({})", rings.join(", ")))
    }

    /// Boundary as a GeoJSON Polygon value.
    pub fn boundary_geojson(&self) -> Option<serde_json::Value> {
        let polygon = self.boundary.as_ref()?;
        let mut rings = vec![geojson_ring(polygon.exterior())];
        rings.extend(polygon.interiors().iter().map(geojson_ring));
        Some(serde_json::json!({
            "type": "Polygon",
            "coordinates": rings,
        }))
    }
}

fn wkt_ring(ring: &LineString<f64>) -> String {
    let coordinates = ring
        .coords()
        .map(|c| format!("{} {}", c.x, c.y))
        .collect::<Vec<_>>()
        .join(", ");
    format!("({})", coordinates)
}

fn geojson_ring(ring: &LineString<f64>) -> Vec<[f64; 2]> {
    ring.coords().map(|c| [c.x, c.y]).collect()
}

/// Why a parcel could not be placed in any group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UngroupedReason {
    /// The parcel has no representative coordinate.
    MissingCoordinate,
    /// The parcel's cluster had fewer members than the minimum group size.
    TooFewPlots,
    /// The parcel's cluster did not reach the minimum group area.
    InsufficientArea,
}

impl UngroupedReason {
    pub fn description(&self) -> &'static str {
        match self {
            UngroupedReason::MissingCoordinate => {
                "Parcel has no survey coordinate and cannot be clustered"
            }
            UngroupedReason::TooFewPlots => {
                "Cluster has fewer parcels than the minimum group size"
            }
            UngroupedReason::InsufficientArea => {
                "Cluster area is below the minimum group area"
            }
        }
    }

    pub fn description_th(&self) -> &'static str {
        match self {
            UngroupedReason::MissingCoordinate => "แปลงไม่มีพิกัด ไม่สามารถจัดกลุ่มได้",
            UngroupedReason::TooFewPlots => "จำนวนแปลงในกลุ่มน้อยกว่าขั้นต่ำ",
            UngroupedReason::InsufficientArea => "พื้นที่รวมของกลุ่มต่ำกว่าขั้นต่ำ",
        }
    }
}

/// A parcel left out of every proposed group, with diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UngroupedParcelInfo {
    pub parcel: ParcelClusterInfo,
    pub reason: UngroupedReason,
    pub description: String,
    pub description_th: String,
    /// Number of the nearest accepted same-variety group, when one lies
    /// within the suggestion radius.
    pub nearest_group_number: Option<u32>,
    /// Centroid distance to that group in meters.
    pub nearest_group_distance_m: Option<f64>,
    pub suggestions: Vec<String>,
}

impl UngroupedParcelInfo {
    /// Build a record for `parcel` with the reason's boilerplate description.
    pub fn new(parcel: ParcelClusterInfo, reason: UngroupedReason) -> Self {
        Self {
            description: reason.description().to_string(),
            description_th: reason.description_th().to_string(),
            parcel,
            reason,
            nearest_group_number: None,
            nearest_group_distance_m: None,
            suggestions: Vec::new(),
        }
    }
}

/// Counts summarizing one group-formation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupingSummary {
    pub eligible_parcels: usize,
    pub groups_formed: usize,
    pub parcels_grouped: usize,
    pub parcels_ungrouped: usize,
    pub missing_coordinate: usize,
    pub too_few_plots: usize,
    pub insufficient_area: usize,
    pub total_grouped_area_rai: Decimal,
}
