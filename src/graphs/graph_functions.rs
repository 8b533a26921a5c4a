use itertools::Itertools;
use rand::prelude::*;

use super::{road::Road, road_graph::RoadGraph, Distance};

/// Every road of the graph exactly once, as canonical unordered pairs in
/// sorted order.
pub fn all_roads(graph: &RoadGraph) -> Vec<Road> {
    graph
        .cities()
        .flat_map(|city| {
            graph
                .roads_from(city)
                .iter()
                .filter_map(|end| Road::new(city, &end.city, end.distance))
        })
        .unique()
        .sorted()
        .collect()
}

/// Generates roads for a random test network. Later roads may replace
/// earlier ones between the same pair of cities.
pub fn random_roads(number_of_roads: usize) -> Vec<Road> {
    let mut rng = thread_rng();
    let number_of_cities = (number_of_roads / 2).max(2);

    let mut roads = Vec::new();
    while roads.len() < number_of_roads {
        let a = format!("city_{}", rng.gen_range(0..number_of_cities));
        let b = format!("city_{}", rng.gen_range(0..number_of_cities));
        let distance: Distance = rng.gen_range(1..=100);

        if let Some(road) = Road::new(&a, &b, distance) {
            roads.push(road);
        }
    }

    roads
}
