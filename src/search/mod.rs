use ahash::{HashMap, HashSet};

use crate::graphs::{City, Distance};

pub mod dijkstra;
pub mod dijkstra_data;

/// Hook invoked once per settled city during a shortest-path run.
///
/// The arguments are the live search state, borrowed for the duration of
/// the call: `distances` holds the tentative distances of all discovered
/// cities (an absent city means infinity), `predecessors` the current
/// shortest-path tree. The search does not continue until the call
/// returns, so a slow observer paces the whole run.
pub trait SearchObserver {
    fn city_settled(
        &mut self,
        current: &str,
        settled: &HashSet<City>,
        predecessors: &HashMap<City, City>,
        distances: &HashMap<City, Distance>,
    );
}
