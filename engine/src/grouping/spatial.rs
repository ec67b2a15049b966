//! Spatial clusterer
//!
//! Partitions one variety's parcels into connected components under the
//! proximity threshold: two parcels share a component iff a chain of
//! parcels links them, each within the threshold of the next. Breadth-first
//! expansion over the full pairwise distance matrix, O(n²) per partition;
//! input scale is hundreds of parcels, so no spatial index is used.
//! Iteration follows input order so repeated runs produce identical
//! clusters.

use shared::{MapPoint, ParcelClusterInfo};

use crate::geometry;

pub fn cluster_by_proximity(
    parcels: Vec<ParcelClusterInfo>,
    threshold_m: f64,
) -> Vec<Vec<ParcelClusterInfo>> {
    let coordinates: Vec<MapPoint> = parcels
        .iter()
        .map(|p| {
            p.coordinate
                .expect("parcel without coordinate reached the spatial clusterer")
        })
        .collect();

    let mut visited = vec![false; parcels.len()];
    let mut components: Vec<Vec<usize>> = Vec::new();

    for seed in 0..parcels.len() {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;

        // The component itself doubles as the BFS queue: each member in turn
        // pulls every still-unvisited parcel within the threshold.
        let mut component = vec![seed];
        let mut cursor = 0;
        while cursor < component.len() {
            let current = component[cursor];
            cursor += 1;
            for candidate in 0..parcels.len() {
                if visited[candidate] {
                    continue;
                }
                if geometry::distance_m(coordinates[current], coordinates[candidate]) <= threshold_m
                {
                    visited[candidate] = true;
                    component.push(candidate);
                }
            }
        }
        components.push(component);
    }

    components
        .into_iter()
        .map(|indices| indices.into_iter().map(|i| parcels[i].clone()).collect())
        .collect()
}
