#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod queue;
mod routing;

pub use error::GraphError;
pub use graph::Graph;
pub use graph::path::{ShortestPathTree, edges_on_paths, reconstruct_path};
pub use model::{Edge, Metric, VertexId};
pub use queue::PriorityQueue;
pub use routing::{
    CheapestPath, FastestPath, PathConfig, Unreachable, cheapest_path, cheapest_paths,
    fastest_path, fastest_paths,
};
