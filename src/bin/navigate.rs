use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use ahash::{HashMap, HashSet};
use clap::Parser;
use urban_nav::{
    graphs::{graph_functions::all_roads, City, Distance},
    network::{validate_distance, RoadNetwork},
    search::SearchObserver,
    store::DistanceStore,
};

/// Interactive shortest-path console over a city road network
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File holding the durable distance record
    #[arg(short, long, default_value = "distances.json")]
    distances: PathBuf,

    /// Print every settled city while a route is computed
    #[arg(long)]
    show_steps: bool,
}

struct PrintSteps;

impl SearchObserver for PrintSteps {
    fn city_settled(
        &mut self,
        current: &str,
        settled: &HashSet<City>,
        _predecessors: &HashMap<City, City>,
        distances: &HashMap<City, Distance>,
    ) {
        println!(
            "  settled {} at {} km ({} cities done)",
            current, distances[current], settled.len()
        );
    }
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let args = Args::parse();
    let mut network = RoadNetwork::new(DistanceStore::new(&args.distances));

    println!("commands: add <a> <b> <km> | remove <a> <b> | distance <a> <b> | route <a> <b> | list | clear | quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["add", a, b, km] => add(&mut network, a, b, km),
            ["remove", a, b] => match network.remove_road(a, b) {
                Ok(()) => println!("removed any road between {} and {}", a, b),
                Err(error) => println!("{}", error),
            },
            ["distance", a, b] => match network.road_distance(a, b) {
                Some(distance) => println!("{} <-> {}: {} km", a, b, distance),
                None => println!("no direct road between {} and {}", a, b),
            },
            ["route", a, b] => route(&network, a, b, args.show_steps),
            ["list"] => list(&network),
            ["clear"] => {
                network.clear();
                println!("cleared");
            }
            ["quit"] | ["exit"] => break,
            [] => {}
            _ => println!("unrecognized command"),
        }
    }
}

fn add(network: &mut RoadNetwork, a: &str, b: &str, km: &str) {
    let raw: i64 = match km.parse() {
        Ok(raw) => raw,
        Err(_) => {
            println!("distance must be a whole number of km");
            return;
        }
    };

    let distance = match validate_distance(raw) {
        Ok(distance) => distance,
        Err(error) => {
            println!("{}", error);
            return;
        }
    };

    match network.add_or_update_road(a, b, distance) {
        Ok(()) => println!("{} <-> {}: {} km", a, b, distance),
        Err(error) => println!("{}", error),
    }
}

fn route(network: &RoadNetwork, a: &str, b: &str, show_steps: bool) {
    let mut print_steps = PrintSteps;
    let observer = show_steps.then_some(&mut print_steps as &mut dyn SearchObserver);

    match network.shortest_path(a, b, observer) {
        Ok(Some(route)) => println!("{} km via {}", route.distance, route.cities.join(" -> ")),
        Ok(None) => println!("no path exists between {} and {}", a, b),
        Err(error) => println!("{}", error),
    }
}

fn list(network: &RoadNetwork) {
    let roads = all_roads(network.graph());
    if roads.is_empty() {
        println!("no roads");
        return;
    }

    for road in roads {
        println!("{} <-> {}: {} km", road.a(), road.b(), road.distance());
    }
}
