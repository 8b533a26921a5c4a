use serde::{Deserialize, Serialize};

use super::{City, Distance};

/// An undirected road between two distinct cities.
///
/// Endpoints are held in lexicographic order, so a road compares equal to
/// its own reverse.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Road {
    a: City,
    b: City,
    distance: Distance,
}

impl Road {
    pub fn new(a: &str, b: &str, distance: Distance) -> Option<Road> {
        if a == b {
            return None;
        }

        let (a, b) = if a < b { (a, b) } else { (b, a) };

        Some(Road {
            a: a.to_string(),
            b: b.to_string(),
            distance,
        })
    }

    pub fn a(&self) -> &str {
        &self.a
    }

    pub fn b(&self) -> &str {
        &self.b
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }
}

/// One adjacency entry: the far end of a road as seen from some city.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadEnd {
    pub city: City,
    pub distance: Distance,
}
