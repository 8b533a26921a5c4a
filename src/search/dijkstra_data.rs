use std::{cmp::Reverse, collections::BinaryHeap};

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use serde::{Deserialize, Serialize};

use crate::graphs::{City, Distance};

/// A route through the network, from source to destination inclusive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub cities: Vec<City>,
    pub distance: Distance,
}

/// Working state of a single Dijkstra run.
///
/// Frontier entries are (distance, city) tuples in a min-heap, so ties are
/// broken lexicographically by city name and runs are reproducible. Entries
/// are never decrease-keyed in place; stale ones are skipped on pop.
pub struct DijkstraData {
    pub frontier: BinaryHeap<Reverse<(Distance, City)>>,
    pub settled: HashSet<City>,
    pub predecessors: HashMap<City, City>,
    pub distances: HashMap<City, Distance>,
}

impl DijkstraData {
    pub fn new(source: &str) -> DijkstraData {
        let mut data = DijkstraData {
            frontier: BinaryHeap::new(),
            settled: HashSet::new(),
            predecessors: HashMap::new(),
            distances: HashMap::new(),
        };

        data.distances.insert(source.to_string(), 0);
        data.frontier.push(Reverse((0, source.to_string())));

        data
    }

    /// Pops the nearest not-yet-settled city and marks it settled.
    pub fn pop(&mut self) -> Option<(City, Distance)> {
        while let Some(Reverse((distance, city))) = self.frontier.pop() {
            if self.settled.insert(city.clone()) {
                return Some((city, distance));
            }
        }

        None
    }

    /// Relaxes the road tail -> head. A strictly shorter candidate updates
    /// the tentative distance and pushes a fresh frontier entry.
    pub fn update(&mut self, tail: &str, head: &str, road_distance: Distance) {
        let alternative_distance = self.distances[tail] + road_distance;
        let current_distance = self.distances.get(head).copied().unwrap_or(Distance::MAX);

        if alternative_distance < current_distance {
            self.distances.insert(head.to_string(), alternative_distance);
            self.predecessors.insert(head.to_string(), tail.to_string());
            self.frontier
                .push(Reverse((alternative_distance, head.to_string())));
        }
    }

    /// Traces predecessors back from the target and reverses. `None` if the
    /// target was never reached.
    pub fn route_to(&self, target: &str) -> Option<Route> {
        let distance = *self.distances.get(target)?;

        let mut cities = vec![target.to_string()];
        let mut current = target;
        while let Some(predecessor) = self.predecessors.get(current) {
            current = predecessor;
            cities.push(current.to_string());
        }
        cities.reverse();

        Some(Route { cities, distance })
    }
}
