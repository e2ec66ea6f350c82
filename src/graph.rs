use std::cell::Cell;
use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{Edge, GraphError, Metric, VertexId};

/// Directed graph over the vertices `[0, vertex_count)`.
///
/// Edges are only ever appended, parallel edges between the same vertices are kept and considered
/// independently by the shortest path algorithms.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Creates a graph from the given edges, failing on the first edge that is not valid.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count);
        for edge in edges {
            graph.push_edge(edge)?;
        }
        Ok(graph)
    }

    /// Appends a directed edge from source to target.
    /// Edges without a time are ignored when computing the fastest paths.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: f64,
        time: Option<f64>,
    ) -> Result<(), GraphError> {
        self.push_edge(Edge {
            source,
            target,
            weight,
            time,
        })
    }

    /// Appends the edge to the graph.
    /// The graph is left untouched if any of the edge vertices is out of range, or if the edge
    /// weight or time is not a finite number.
    pub fn push_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        self.check_vertex(edge.source)?;
        self.check_vertex(edge.target)?;

        if let Some(value) = [Some(edge.weight), edge.time]
            .into_iter()
            .flatten()
            .find(|value| !value.is_finite())
        {
            return Err(GraphError::InvalidWeight(value));
        }

        self.edges.push(edge);
        Ok(())
    }

    /// Returns a copy of this graph with one more edge.
    pub fn with_edge(
        &self,
        source: VertexId,
        target: VertexId,
        weight: f64,
        time: Option<f64>,
    ) -> Result<Self, GraphError> {
        let mut graph = self.clone();
        graph.add_edge(source, target, weight, time)?;
        Ok(graph)
    }

    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Gets all the edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + use<> {
        (0..self.vertex_count).map(VertexId)
    }

    /// Gets an iterator over all the edges exiting the given vertex, in insertion order.
    pub fn exiting_edges(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |edge| edge.source == vertex)
    }

    /// Returns the vertex if it belongs to the graph.
    pub fn check_vertex(&self, vertex: VertexId) -> Result<VertexId, GraphError> {
        if vertex.index() < self.vertex_count {
            Ok(vertex)
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Groups the edges by their source vertex, keeping for each edge its target and its value
    /// for the metric. Edges without a value for the metric are left out.
    fn adjacency(&self, metric: Metric) -> Vec<Vec<(VertexId, f64)>> {
        let mut adjacency = vec![vec![]; self.vertex_count];

        for edge in &self.edges {
            if let Some(value) = edge.value(metric) {
                adjacency[edge.source.index()].push((edge.target, value));
            }
        }

        adjacency
    }
}

/// Orders vertices by their current score, lower scores first.
/// The scores are read when comparing, therefore updates are visible to the queue.
fn by_score(scores: &[Cell<f64>]) -> impl Fn(&VertexId, &VertexId) -> Ordering + '_ {
    |a: &VertexId, b: &VertexId| {
        OrderedFloat(scores[a.index()].get()).cmp(&OrderedFloat(scores[b.index()].get()))
    }
}

mod cost;
pub mod path;
mod time;
