//! Validation utilities for the Rice Production Management Platform

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::models::GroupingParameters;
use crate::types::MapPoint;

// ============================================================================
// Grouping Parameter Validations
// ============================================================================

/// Struct-level check backing `GroupingParameters::validate()`.
///
/// Inverted bounds are a caller contract violation, not a data condition the
/// engine tolerates.
pub fn validate_grouping_bounds(params: &GroupingParameters) -> Result<(), ValidationError> {
    if !params.proximity_threshold_m.is_finite() || params.proximity_threshold_m <= 0.0 {
        return Err(ValidationError::new("proximity_threshold_not_positive"));
    }
    if params.date_tolerance_days < 0 {
        return Err(ValidationError::new("date_tolerance_negative"));
    }
    if params.min_group_area_rai < Decimal::ZERO {
        return Err(ValidationError::new("min_area_negative"));
    }
    if params.min_group_area_rai > params.max_group_area_rai {
        return Err(ValidationError::new("area_bounds_inverted"));
    }
    if params.min_plots_per_group == 0 {
        return Err(ValidationError::new("min_plots_zero"));
    }
    if params.min_plots_per_group > params.max_plots_per_group {
        return Err(ValidationError::new("plot_count_bounds_inverted"));
    }
    Ok(())
}

// ============================================================================
// Parcel Validations
// ============================================================================

/// Validate a parcel area recorded in rai
pub fn validate_parcel_area(area_rai: Decimal) -> Result<(), &'static str> {
    if area_rai <= Decimal::ZERO {
        return Err("Parcel area must be positive");
    }
    Ok(())
}

/// Validate a projected survey coordinate
pub fn validate_coordinate(point: &MapPoint) -> Result<(), &'static str> {
    if !point.x.is_finite() || !point.y.is_finite() {
        return Err("Coordinate components must be finite");
    }
    Ok(())
}
