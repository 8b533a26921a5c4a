use ahash::{HashMap, HashMapExt};

use super::{
    road::{Road, RoadEnd},
    City, Distance,
};

/// In-memory weighted undirected graph over city names.
///
/// Both directions of a road are stored independently and always agree in
/// distance. A city becomes a key the first time it appears as a road
/// endpoint and is never removed, even once its neighbor list is empty.
#[derive(Clone, Default)]
pub struct RoadGraph {
    roads: HashMap<City, Vec<RoadEnd>>,
}

impl RoadGraph {
    pub fn new() -> RoadGraph {
        RoadGraph {
            roads: HashMap::new(),
        }
    }

    pub fn from_roads(roads: &[Road]) -> RoadGraph {
        let mut graph = RoadGraph::new();
        roads.iter().for_each(|road| {
            graph.add_road(road.a(), road.b(), road.distance());
        });
        graph
    }

    /// Inserts a road, replacing any existing road between the two cities.
    ///
    /// Distance validity and the a != b rule are the caller's
    /// responsibility.
    pub fn add_road(&mut self, a: &str, b: &str, distance: Distance) {
        self.remove_road(a, b);

        self.roads.entry(a.to_string()).or_default().push(RoadEnd {
            city: b.to_string(),
            distance,
        });
        self.roads.entry(b.to_string()).or_default().push(RoadEnd {
            city: a.to_string(),
            distance,
        });
    }

    /// Removes the road between a and b. Removing a road that does not
    /// exist is a no-op; the cities stay in the adjacency table.
    pub fn remove_road(&mut self, a: &str, b: &str) {
        if let Some(ends) = self.roads.get_mut(a) {
            ends.retain(|end| end.city != b);
        }
        if let Some(ends) = self.roads.get_mut(b) {
            ends.retain(|end| end.city != a);
        }
    }

    pub fn distance_between(&self, a: &str, b: &str) -> Option<Distance> {
        self.roads_from(a)
            .iter()
            .find(|end| end.city == b)
            .map(|end| end.distance)
    }

    pub fn contains(&self, city: &str) -> bool {
        self.roads.contains_key(city)
    }

    pub fn roads_from(&self, city: &str) -> &[RoadEnd] {
        self.roads.get(city).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.roads.keys()
    }

    pub fn number_of_cities(&self) -> usize {
        self.roads.len()
    }

    pub fn number_of_roads(&self) -> usize {
        // every road is stored once per direction
        self.roads.values().map(Vec::len).sum::<usize>() / 2
    }
}
