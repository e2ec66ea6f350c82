use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{Edge, Graph, GraphError, Metric, VertexId};

/// Result of a single source shortest path computation.
///
/// For each vertex of the graph holds the shortest score from the origin (infinite if the vertex
/// cannot be reached) and the previous vertex on the shortest path (None for the origin and for
/// vertices that cannot be reached).
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    origin: VertexId,
    metric: Metric,
    scores: Vec<f64>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    pub(crate) fn new(
        origin: VertexId,
        metric: Metric,
        scores: Vec<f64>,
        predecessors: Vec<Option<VertexId>>,
    ) -> Self {
        debug_assert_eq!(scores.len(), predecessors.len());
        Self {
            origin,
            metric,
            scores,
            predecessors,
        }
    }

    pub const fn origin(&self) -> VertexId {
        self.origin
    }

    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Gets the shortest score of each vertex, indexed by vertex.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Gets the previous vertex on the shortest path of each vertex, indexed by vertex.
    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }

    /// Gets the shortest score from the origin to the vertex.
    pub fn score(&self, vertex: VertexId) -> Result<f64, GraphError> {
        self.scores
            .get(vertex.index())
            .copied()
            .ok_or(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.scores.len(),
            })
    }

    /// Returns true only if the vertex belongs to the graph and there is a path to it.
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.score(vertex).is_ok_and(|score| score < f64::INFINITY)
    }

    /// Gets the shortest path from the origin to the target.
    /// See [`reconstruct_path`] for targets that cannot be reached.
    pub fn path_to(&self, target: VertexId) -> Result<Vec<VertexId>, GraphError> {
        reconstruct_path(&self.predecessors, target)
    }
}

/// Unpacks the path from the target back to the first vertex without predecessor, returning it in
/// forward order.
///
/// If the target has no predecessor the path only contains the target: this is the case for the
/// origin of the search and for targets that cannot be reached, which are told apart by their
/// score or by checking the first vertex of the path.
pub fn reconstruct_path(
    predecessors: &[Option<VertexId>],
    target: VertexId,
) -> Result<Vec<VertexId>, GraphError> {
    let previous = |vertex: VertexId| {
        predecessors
            .get(vertex.index())
            .copied()
            .ok_or(GraphError::InvalidVertex {
                vertex,
                vertex_count: predecessors.len(),
            })
    };

    let mut path = vec![target];
    let mut seen = FxHashSet::from_iter([target]);
    let mut next = previous(target)?;

    while let Some(vertex) = next {
        if !seen.insert(vertex) {
            debug!("Found loop at {vertex}: {path:?}");
            return Err(GraphError::PredecessorCycle(vertex));
        }
        path.push(vertex);
        next = previous(vertex)?;
    }

    path.reverse();
    Ok(path)
}

/// Gets the edges of the graph that connect two consecutive vertices of any of the paths, in
/// insertion order. All the parallel edges between such vertices are returned.
pub fn edges_on_paths<'g, P: AsRef<[VertexId]>>(graph: &'g Graph, paths: &[P]) -> Vec<&'g Edge> {
    let steps: FxHashSet<(VertexId, VertexId)> = paths
        .iter()
        .flat_map(|path| path.as_ref().windows(2).map(|w| (w[0], w[1])))
        .collect();

    graph
        .edges()
        .iter()
        .filter(|edge| steps.contains(&(edge.source, edge.target)))
        .collect()
}
