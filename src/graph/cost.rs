use std::cell::Cell;

use tracing::{debug, trace};

use crate::graph::by_score;
use crate::queue::PriorityQueue;
use crate::{Graph, GraphError, Metric, ShortestPathTree, VertexId};

impl Graph {
    /// Computes the cheapest paths from the origin to every vertex of the graph, using the edge
    /// weights as costs.
    ///
    /// Edge weights can be negative. Vertices waiting to be relaxed are kept in a priority queue
    /// ordered by their current distance, and a vertex is queued at most once at any time. A
    /// vertex can be relaxed again after its distance improves.
    ///
    /// The number of relaxed vertices is bounded by `vertex_count * max(edge_count, 1)`, saturating
    /// at `usize::MAX`: if the queue is not empty once the bound is reached the graph contains a
    /// negative weight cycle reachable from the origin, and no distances are returned. A search
    /// that empties the queue exactly at the bound succeeds.
    pub fn shortest_paths_by_cost(&self, origin: VertexId) -> Result<ShortestPathTree, GraphError> {
        self.check_vertex(origin)?;
        debug!(
            "Computing shortest paths by cost from {origin} ({} vertices, {} edges)",
            self.vertex_count,
            self.edges.len()
        );

        let adjacency = self.adjacency(Metric::Cost);

        // (current) cheapest distance from origin to this vertex
        let distances = vec![Cell::new(f64::INFINITY); self.vertex_count];
        distances[origin.index()].set(0.0);

        // previous vertex on the current cheapest known path from origin to this vertex
        let mut predecessors: Vec<Option<VertexId>> = vec![None; self.vertex_count];

        let mut queued = vec![false; self.vertex_count];
        let mut queue = PriorityQueue::with_capacity(self.vertex_count, by_score(&distances));
        queue.enqueue(origin);
        queued[origin.index()] = true;

        let max_iterations = self
            .vertex_count
            .saturating_mul(self.edges.len().max(1));
        let mut iterations = 0;

        while iterations < max_iterations {
            let Some(vertex) = queue.dequeue() else {
                break;
            };
            queued[vertex.index()] = false;
            let distance = distances[vertex.index()].get();

            for &(next, weight) in &adjacency[vertex.index()] {
                let next_distance = distance + weight;

                // Relax: we have now found a cheaper way to reach the neighbor
                if next_distance < distances[next.index()].get() {
                    trace!("Relaxing {vertex} -> {next}: {next_distance}");
                    distances[next.index()].set(next_distance);
                    predecessors[next.index()] = Some(vertex);

                    if !queued[next.index()] {
                        queue.enqueue(next);
                        queued[next.index()] = true;
                    }
                }
            }

            iterations += 1;
        }

        if !queue.is_empty() {
            return Err(GraphError::NegativeCycle { origin, iterations });
        }

        debug!("Shortest paths by cost from {origin} settled after {iterations} iterations");

        Ok(ShortestPathTree::new(
            origin,
            Metric::Cost,
            distances.iter().map(Cell::get).collect(),
            predecessors,
        ))
    }
}
