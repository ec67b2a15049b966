//! Cultivation season models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Thai rice cultivation seasons
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiceSeason {
    /// Wet-season (major) crop, นาปี
    WetSeason,
    /// Dry-season (second) crop, นาปรัง
    DrySeason,
    /// Custom season with name
    Custom(String),
}

impl RiceSeason {
    pub fn name_th(&self) -> &str {
        match self {
            RiceSeason::WetSeason => "นาปี",
            RiceSeason::DrySeason => "นาปรัง",
            RiceSeason::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for RiceSeason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiceSeason::WetSeason => write!(f, "Wet Season"),
            RiceSeason::DrySeason => write!(f, "Dry Season"),
            RiceSeason::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// A cultivation season within a production cluster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CultivationSeason {
    pub id: Uuid,
    pub cluster_id: Uuid,
    /// Display name of the production cluster, e.g. "Nakhon Pathom".
    pub cluster_name: String,
    pub season: RiceSeason,
    pub year: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
