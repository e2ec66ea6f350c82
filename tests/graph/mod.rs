#![allow(dead_code)]

use std::sync::LazyLock;

use dualpath::{Graph, VertexId};

pub static CITY_GRAPH: LazyLock<Graph> =
    LazyLock::new(|| parse_edges(8, include_str!("../data/city.edges")));

/// Parses one edge per line: `source target weight [time]`.
/// Empty lines and `#` comments are skipped.
pub fn parse_edges(vertex_count: usize, text: &str) -> Graph {
    let mut graph = Graph::new(vertex_count);

    for line in text.lines() {
        let line = line.split('#').next().unwrap_or_default();
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        let vertex = |i: usize| VertexId(fields[i].parse().unwrap());
        let value = |i: usize| fields[i].parse::<f64>().unwrap();

        let time = (fields.len() > 3).then(|| value(3));
        graph
            .add_edge(vertex(0), vertex(1), value(2), time)
            .unwrap_or_else(|e| panic!("Invalid edge {line:?}: {e}"));
    }

    graph
}

pub fn vertices<const N: usize>(ids: [usize; N]) -> Vec<VertexId> {
    ids.into_iter().map(VertexId).collect()
}
