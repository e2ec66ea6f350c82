use std::fmt;

use strum::Display;

/// Uniquely identify a vertex that belongs to a graph.
/// Valid identifiers lie in `[0, vertex_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VertexId(pub usize);

impl VertexId {
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// The edge value a shortest path computation minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Metric {
    /// The edge weight, may be negative.
    Cost,
    /// The edge travel time, only defined on some edges.
    Time,
}

/// Directed edge from source to target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    /// Cost of traversing the edge.
    pub weight: f64,
    /// Time needed to traverse the edge, edges without a time are ignored by time queries.
    pub time: Option<f64>,
}

impl Edge {
    pub const fn new(source: VertexId, target: VertexId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
            time: None,
        }
    }

    pub const fn timed(source: VertexId, target: VertexId, weight: f64, time: f64) -> Self {
        Self {
            source,
            target,
            weight,
            time: Some(time),
        }
    }

    /// Gets the edge value for the given metric.
    /// Returns None for [`Metric::Time`] if the edge carries no time.
    pub const fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Cost => Some(self.weight),
            Metric::Time => self.time,
        }
    }
}

// Label shown next to the edge when drawing the graph: "weight" or "weight (time)".
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time {
            Some(time) => write!(f, "{} ({time})", self.weight),
            None => write!(f, "{}", self.weight),
        }
    }
}
