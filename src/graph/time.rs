use std::cell::Cell;

use tracing::{debug, trace};

use crate::graph::by_score;
use crate::queue::PriorityQueue;
use crate::{Graph, GraphError, Metric, ShortestPathTree, VertexId};

impl Graph {
    /// Computes the fastest paths from the origin to every vertex of the graph, only following
    /// the edges that have a time.
    ///
    /// Edge times must not be negative: this is not checked, and negative times can lead to wrong
    /// results or, with a negative time cycle, to a search that never ends.
    pub fn shortest_paths_by_time(&self, origin: VertexId) -> Result<ShortestPathTree, GraphError> {
        self.check_vertex(origin)?;
        debug!("Computing shortest paths by time from {origin}");

        let adjacency = self.adjacency(Metric::Time);

        // (current) shortest time from origin to this vertex
        let times = vec![Cell::new(f64::INFINITY); self.vertex_count];
        times[origin.index()].set(0.0);

        let mut predecessors: Vec<Option<VertexId>> = vec![None; self.vertex_count];

        // priority queue of discovered vertices that may need to be visited, the same vertex can
        // be queued more than once and outdated entries will not relax any edge
        let mut frontier = PriorityQueue::with_capacity(self.vertex_count, by_score(&times));
        frontier.enqueue(origin);

        while let Some(vertex) = frontier.dequeue() {
            let time = times[vertex.index()].get();

            for &(next, edge_time) in &adjacency[vertex.index()] {
                let next_time = time + edge_time;

                // check if we can follow the current path to reach the neighbor faster
                if next_time < times[next.index()].get() {
                    trace!("Relaxing {vertex} -> {next}: {next_time}");
                    times[next.index()].set(next_time);
                    predecessors[next.index()] = Some(vertex);
                    frontier.enqueue(next);
                }
            }
        }

        Ok(ShortestPathTree::new(
            origin,
            Metric::Time,
            times.iter().map(Cell::get).collect(),
            predecessors,
        ))
    }
}
