//! Group-formation pipeline
//!
//! Eligibility filter → variety partitioner → spatial clusterer → temporal
//! clusterer → constraint resolver → group synthesizer → ungrouped
//! diagnostics. A single deterministic pass with bounded local repair
//! (splitting); no iterative refinement.

mod constraints;
mod diagnostics;
mod partition;
mod spatial;
mod synthesis;
mod temporal;

pub use diagnostics::SUGGESTION_RADIUS_M;

use shared::{
    GroupingParameters, GroupingSummary, ParcelClusterInfo, ProposedGroup, UngroupedParcelInfo,
    UngroupedReason,
};
use validator::Validate;

use crate::error::{EngineError, EngineResult};

/// Result of one group-formation run
#[derive(Debug, Clone)]
pub struct GroupingOutcome {
    pub groups: Vec<ProposedGroup>,
    pub ungrouped: Vec<UngroupedParcelInfo>,
    pub summary: GroupingSummary,
}

/// Group-formation service for one season's eligible parcels
#[derive(Debug, Clone)]
pub struct GroupFormationService {
    params: GroupingParameters,
}

impl GroupFormationService {
    /// Create a service with validated parameters.
    ///
    /// Inverted bounds fail here rather than being absorbed mid-run.
    pub fn new(params: GroupingParameters) -> EngineResult<Self> {
        params
            .validate()
            .map_err(|e| EngineError::InvalidParameters(e.to_string()))?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &GroupingParameters {
        &self.params
    }

    /// Partition the eligible parcels into proposed groups.
    ///
    /// Pure function of the input snapshot: no state survives the call and
    /// repeated runs on identical input produce identical group membership,
    /// numbering and ungrouped classification. Group numbers are assigned
    /// sequentially in variety-then-discovery order.
    pub fn form_groups(&self, parcels: &[ParcelClusterInfo]) -> GroupingOutcome {
        let eligible = self.filter_eligible(parcels);
        let eligible_count = eligible.len();

        let partitioned = partition::partition_by_variety(eligible);
        let mut ungrouped: Vec<UngroupedParcelInfo> = partitioned
            .missing_coordinate
            .into_iter()
            .map(|p| UngroupedParcelInfo::new(p, UngroupedReason::MissingCoordinate))
            .collect();

        let mut groups: Vec<ProposedGroup> = Vec::new();
        let mut next_group_number: u32 = 1;

        for variety_partition in partitioned.varieties {
            let spatial_clusters = spatial::cluster_by_proximity(
                variety_partition.parcels,
                self.params.proximity_threshold_m,
            );
            for spatial_cluster in spatial_clusters {
                let date_clusters =
                    temporal::cluster_by_planting_date(spatial_cluster, self.params.date_tolerance_days);
                for date_cluster in date_clusters {
                    match constraints::resolve(date_cluster, &self.params) {
                        constraints::Resolution::Accepted(buckets) => {
                            for bucket in buckets {
                                groups.push(synthesis::synthesize(next_group_number, bucket));
                                next_group_number += 1;
                            }
                        }
                        constraints::Resolution::Rejected { parcels, reason } => {
                            ungrouped.extend(
                                parcels
                                    .into_iter()
                                    .map(|p| UngroupedParcelInfo::new(p, reason)),
                            );
                        }
                    }
                }
            }
        }

        diagnostics::annotate(&mut ungrouped, &groups);

        let summary = summarize(eligible_count, &groups, &ungrouped);
        tracing::debug!(
            groups = summary.groups_formed,
            grouped = summary.parcels_grouped,
            ungrouped = summary.parcels_ungrouped,
            "group formation finished"
        );

        GroupingOutcome {
            groups,
            ungrouped,
            summary,
        }
    }

    fn filter_eligible(&self, parcels: &[ParcelClusterInfo]) -> Vec<ParcelClusterInfo> {
        let eligible: Vec<_> = parcels
            .iter()
            .filter(|p| p.variety_confirmed && !p.is_grouped)
            .cloned()
            .collect();
        tracing::debug!(
            total = parcels.len(),
            eligible = eligible.len(),
            "filtered season-eligible parcels"
        );
        eligible
    }
}

fn summarize(
    eligible: usize,
    groups: &[ProposedGroup],
    ungrouped: &[UngroupedParcelInfo],
) -> GroupingSummary {
    let by_reason =
        |reason: UngroupedReason| ungrouped.iter().filter(|u| u.reason == reason).count();
    GroupingSummary {
        eligible_parcels: eligible,
        groups_formed: groups.len(),
        parcels_grouped: groups.iter().map(|g| g.member_count()).sum(),
        parcels_ungrouped: ungrouped.len(),
        missing_coordinate: by_reason(UngroupedReason::MissingCoordinate),
        too_few_plots: by_reason(UngroupedReason::TooFewPlots),
        insufficient_area: by_reason(UngroupedReason::InsufficientArea),
        total_grouped_area_rai: groups.iter().map(|g| g.total_area_rai).sum(),
    }
}
