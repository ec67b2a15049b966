//! Configuration for the group-formation engine
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with RPM_ prefix

use config::{Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::GroupingParameters;

use crate::error::EngineResult;

/// Engine configuration
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// Current environment (development, production)
    pub environment: String,

    /// Group-formation tuning
    pub grouping: GroupingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GroupingConfig {
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

impl EngineConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> EngineResult<Self> {
        let environment = std::env::var("RPM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("grouping.proximity_threshold_m", 2000.0)?
            .set_default("grouping.date_tolerance_days", 2)?
            .set_default("grouping.min_group_area_rai", 15.0)?
            .set_default("grouping.max_group_area_rai", 50.0)?
            .set_default("grouping.min_plots_per_group", 5)?
            .set_default("grouping.max_plots_per_group", 15)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (RPM_ prefix)
            .add_source(
                Environment::with_prefix("RPM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize::<Self>()?)
    }
}

impl GroupingConfig {
    /// Convert into the engine's run parameters.
    pub fn into_parameters(self) -> GroupingParameters {
        GroupingParameters {
            proximity_threshold_m: self.proximity_threshold_m,
            date_tolerance_days: self.date_tolerance_days,
            min_group_area_rai: self.min_group_area_rai,
            max_group_area_rai: self.max_group_area_rai,
            min_plots_per_group: self.min_plots_per_group,
            max_plots_per_group: self.max_plots_per_group,
        }
    }
}
