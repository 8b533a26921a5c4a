use super::{
    dijkstra_data::{DijkstraData, Route},
    SearchObserver,
};
use crate::graphs::road_graph::RoadGraph;

/// Runs Dijkstra from `source` until the frontier is exhausted.
///
/// The observer, if supplied, is called synchronously after every settled
/// city, in non-decreasing distance order.
pub fn dijkstra_single_source(
    graph: &RoadGraph,
    source: &str,
    mut observer: Option<&mut dyn SearchObserver>,
) -> DijkstraData {
    let mut data = DijkstraData::new(source);

    while let Some((city, _)) = data.pop() {
        if let Some(observer) = observer.as_deref_mut() {
            observer.city_settled(&city, &data.settled, &data.predecessors, &data.distances);
        }

        relax_roads_from(graph, &mut data, &city);
    }

    data
}

/// Like `dijkstra_single_source`, but stops once `target` is settled and
/// returns the route to it, or `None` if it is unreachable.
pub fn dijkstra_one_to_one(
    graph: &RoadGraph,
    source: &str,
    target: &str,
    mut observer: Option<&mut dyn SearchObserver>,
) -> Option<Route> {
    let mut data = DijkstraData::new(source);

    while let Some((city, _)) = data.pop() {
        if let Some(observer) = observer.as_deref_mut() {
            observer.city_settled(&city, &data.settled, &data.predecessors, &data.distances);
        }

        if city == target {
            break;
        }

        relax_roads_from(graph, &mut data, &city);
    }

    data.route_to(target)
}

fn relax_roads_from(graph: &RoadGraph, data: &mut DijkstraData, city: &str) {
    for end in graph.roads_from(city) {
        if data.settled.contains(&end.city) {
            continue;
        }
        data.update(city, &end.city, end.distance);
    }
}
