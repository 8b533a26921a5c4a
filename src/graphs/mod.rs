pub mod graph_functions;
pub mod road;
pub mod road_graph;

pub type City = String;
pub type Distance = u32;
