use thiserror::Error;
use tracing::debug;

use crate::{
    graphs::{road_graph::RoadGraph, Distance},
    search::{dijkstra::dijkstra_one_to_one, dijkstra_data::Route, SearchObserver},
    store::{DistanceStore, StoreError},
};

/// Rejected caller input. Raised at this boundary so bad input never
/// reaches the graph or the store.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("city name must not be empty")]
    EmptyCityName,
    #[error("a road must connect two different cities")]
    SameCity,
    #[error("road distance must be positive, got {0}")]
    NonPositiveDistance(i64),
    #[error("road distance {0} is out of range")]
    DistanceOutOfRange(i64),
    #[error("unknown city {0}")]
    UnknownCity(String),
}

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Checks a raw distance value from the outside world. The graph itself
/// places no arithmetic bound, so zero and negative values must be stopped
/// here.
pub fn validate_distance(raw: i64) -> Result<Distance, ValidationError> {
    if raw <= 0 {
        return Err(ValidationError::NonPositiveDistance(raw));
    }

    Distance::try_from(raw).map_err(|_| ValidationError::DistanceOutOfRange(raw))
}

fn validate_city_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyCityName);
    }
    Ok(())
}

fn validate_endpoints(a: &str, b: &str) -> Result<(), ValidationError> {
    validate_city_name(a)?;
    validate_city_name(b)?;
    if a == b {
        return Err(ValidationError::SameCity);
    }
    Ok(())
}

/// The surface a presentation layer talks to: a road graph plus the durable
/// distance record, behind input validation.
///
/// Not safe for concurrent use; callers must serialize access. Mutations
/// and the store's whole-file rewrite are read-modify-write sequences.
pub struct RoadNetwork {
    graph: RoadGraph,
    store: DistanceStore,
}

impl RoadNetwork {
    pub fn new(store: DistanceStore) -> RoadNetwork {
        RoadNetwork {
            graph: RoadGraph::new(),
            store,
        }
    }

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    pub fn store(&self) -> &DistanceStore {
        &self.store
    }

    /// Adds the road or replaces its distance, then records the distance
    /// durably. A failed persist surfaces as `NetworkError::Store`; the
    /// in-memory update stays applied.
    pub fn add_or_update_road(
        &mut self,
        a: &str,
        b: &str,
        distance: Distance,
    ) -> Result<(), NetworkError> {
        validate_endpoints(a, b)?;
        if distance == 0 {
            return Err(ValidationError::NonPositiveDistance(0).into());
        }

        self.graph.add_road(a, b, distance);
        self.store.upsert(a, b, distance)?;
        debug!(a, b, distance, "road added");

        Ok(())
    }

    /// Removes the road if it exists; removing an absent road is an
    /// idempotent no-op. The durable record keeps the last known distance
    /// either way.
    pub fn remove_road(&mut self, a: &str, b: &str) -> Result<(), ValidationError> {
        validate_endpoints(a, b)?;

        self.graph.remove_road(a, b);
        debug!(a, b, "road removed");

        Ok(())
    }

    /// Direct road distance, `None` when the cities are not directly
    /// connected (or not known at all).
    pub fn road_distance(&self, a: &str, b: &str) -> Option<Distance> {
        self.graph.distance_between(a, b)
    }

    /// Shortest route between two known cities. `Ok(None)` means both
    /// cities exist but no path connects them; an unknown city is a
    /// validation error, not an unreachable result.
    pub fn shortest_path(
        &self,
        source: &str,
        destination: &str,
        observer: Option<&mut dyn SearchObserver>,
    ) -> Result<Option<Route>, ValidationError> {
        validate_city_name(source)?;
        validate_city_name(destination)?;
        for city in [source, destination] {
            if !self.graph.contains(city) {
                return Err(ValidationError::UnknownCity(city.to_string()));
            }
        }

        Ok(dijkstra_one_to_one(&self.graph, source, destination, observer))
    }

    /// Drops the whole live graph and starts from an empty one. The durable
    /// record is left in place.
    pub fn clear(&mut self) {
        self.graph = RoadGraph::new();
        debug!("road network cleared");
    }
}
