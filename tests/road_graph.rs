use urban_nav::graphs::{
    graph_functions::{all_roads, random_roads},
    road_graph::RoadGraph,
};

#[test]
fn distances_are_symmetric() {
    let mut graph = RoadGraph::new();
    graph.add_road("Aachen", "Bonn", 91);
    graph.add_road("Bonn", "Cologne", 28);

    assert_eq!(graph.distance_between("Aachen", "Bonn"), Some(91));
    assert_eq!(graph.distance_between("Bonn", "Aachen"), Some(91));
    assert_eq!(graph.distance_between("Bonn", "Cologne"), Some(28));
    assert_eq!(graph.distance_between("Cologne", "Bonn"), Some(28));
}

#[test]
fn distances_are_symmetric_on_random_networks() {
    let roads = random_roads(200);
    let graph = RoadGraph::from_roads(&roads);

    for road in all_roads(&graph) {
        assert_eq!(
            graph.distance_between(road.a(), road.b()),
            graph.distance_between(road.b(), road.a()),
        );
        assert!(graph.distance_between(road.a(), road.b()).is_some());
    }
}

#[test]
fn adding_twice_replaces_instead_of_duplicating() {
    let mut graph = RoadGraph::new();
    graph.add_road("Aachen", "Bonn", 91);
    graph.add_road("Aachen", "Bonn", 85);
    graph.add_road("Bonn", "Aachen", 88);

    let to_bonn = graph
        .roads_from("Aachen")
        .iter()
        .filter(|end| end.city == "Bonn")
        .count();
    assert_eq!(to_bonn, 1);
    assert_eq!(graph.distance_between("Aachen", "Bonn"), Some(88));
    assert_eq!(graph.number_of_roads(), 1);
}

#[test]
fn removal_is_idempotent_and_keeps_cities() {
    let mut graph = RoadGraph::new();
    graph.add_road("Aachen", "Bonn", 91);

    graph.remove_road("Aachen", "Bonn");
    assert_eq!(graph.distance_between("Aachen", "Bonn"), None);
    assert!(graph.contains("Aachen"));
    assert!(graph.contains("Bonn"));
    assert!(graph.roads_from("Aachen").is_empty());

    graph.remove_road("Aachen", "Bonn");
    assert_eq!(graph.distance_between("Aachen", "Bonn"), None);
}

#[test]
fn lookups_between_unknown_cities_are_not_found() {
    let graph = RoadGraph::new();
    assert_eq!(graph.distance_between("Aachen", "Bonn"), None);
    assert!(!graph.contains("Aachen"));
    assert!(graph.roads_from("Aachen").is_empty());
}

#[test]
fn all_roads_lists_every_road_once() {
    let mut graph = RoadGraph::new();
    graph.add_road("Aachen", "Bonn", 91);
    graph.add_road("Bonn", "Cologne", 28);

    let roads = all_roads(&graph);
    assert_eq!(roads.len(), 2);
    assert_eq!(roads[0].a(), "Aachen");
    assert_eq!(roads[0].b(), "Bonn");
    assert_eq!(roads[1].distance(), 28);
}
