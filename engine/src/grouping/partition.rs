//! Variety partitioner
//!
//! Hard-splits the eligible population by rice variety before any spatial
//! work; variety mismatch is never tolerated within a group. Parcels
//! without a coordinate are separated out first and never attempted for
//! clustering.

use std::collections::HashMap;

use shared::{ParcelClusterInfo, RiceVariety};

/// One variety's share of the eligible population.
#[derive(Debug)]
pub struct VarietyPartition {
    pub variety: RiceVariety,
    pub parcels: Vec<ParcelClusterInfo>,
}

/// Output of the variety partitioner.
#[derive(Debug)]
pub struct PartitionedParcels {
    /// Partitions in first-encounter order of each variety, parcels in
    /// input order within each. Stable ordering keeps repeated runs
    /// identical.
    pub varieties: Vec<VarietyPartition>,
    /// Parcels with no representative coordinate.
    pub missing_coordinate: Vec<ParcelClusterInfo>,
}

pub fn partition_by_variety(parcels: Vec<ParcelClusterInfo>) -> PartitionedParcels {
    let mut varieties: Vec<VarietyPartition> = Vec::new();
    let mut index_by_variety: HashMap<RiceVariety, usize> = HashMap::new();
    let mut missing_coordinate = Vec::new();

    for parcel in parcels {
        if parcel.coordinate.is_none() {
            missing_coordinate.push(parcel);
            continue;
        }
        match index_by_variety.get(&parcel.variety) {
            Some(&index) => varieties[index].parcels.push(parcel),
            None => {
                index_by_variety.insert(parcel.variety.clone(), varieties.len());
                varieties.push(VarietyPartition {
                    variety: parcel.variety.clone(),
                    parcels: vec![parcel],
                });
            }
        }
    }

    PartitionedParcels {
        varieties,
        missing_coordinate,
    }
}
