use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::{Graph, GraphError, ShortestPathTree, VertexId};

/// How a target that cannot be reached from the origin is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unreachable {
    /// The path only contains the target and the score is infinite.
    Degenerate,
    /// The query fails with [`GraphError::NoPath`].
    Error,
}

#[derive(Debug, Clone, Copy)]
pub struct PathConfig {
    pub unreachable: Unreachable,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            unreachable: Unreachable::Degenerate,
        }
    }
}

/// The cheapest path from the origin (first vertex) to the target (last vertex).
#[derive(Debug, Clone, PartialEq)]
pub struct CheapestPath {
    pub path: Vec<VertexId>,
    /// Total weight of the path, infinite if the target cannot be reached.
    pub distance: f64,
}

impl CheapestPath {
    pub const fn is_reachable(&self) -> bool {
        self.distance < f64::INFINITY
    }
}

/// The fastest path from the origin (first vertex) to the target (last vertex).
#[derive(Debug, Clone, PartialEq)]
pub struct FastestPath {
    pub path: Vec<VertexId>,
    /// Total time of the path, infinite if the target cannot be reached.
    pub time: f64,
}

impl FastestPath {
    pub const fn is_reachable(&self) -> bool {
        self.time < f64::INFINITY
    }
}

impl fmt::Display for CheapestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_path(f, &self.path)?;
        write!(f, " (distance {})", self.distance)
    }
}

impl fmt::Display for FastestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_path(f, &self.path)?;
        write!(f, " (time {})", self.time)
    }
}

fn write_path(f: &mut fmt::Formatter<'_>, path: &[VertexId]) -> fmt::Result {
    for (i, vertex) in path.iter().enumerate() {
        if i > 0 {
            f.write_str(" -> ")?;
        }
        write!(f, "{vertex}")?;
    }
    Ok(())
}

/// Computes the cheapest path from origin to destination.
/// Fails if a negative weight cycle can be reached from the origin.
pub fn cheapest_path(
    config: &PathConfig,
    graph: &Graph,
    origin: VertexId,
    destination: VertexId,
) -> Result<CheapestPath, GraphError> {
    debug!("Computing cheapest path {origin} -> {destination} with {config:?}");
    graph.check_vertex(destination)?;

    let tree = graph.shortest_paths_by_cost(origin)?;
    let (path, distance) = unpack_route(config, &tree, destination)?;

    Ok(CheapestPath { path, distance })
}

/// Computes the cheapest paths from origin to each destination, the cost shortest paths are
/// computed only once. Duplicated destinations are returned once.
pub fn cheapest_paths(
    config: &PathConfig,
    graph: &Graph,
    origin: VertexId,
    destinations: &[VertexId],
) -> Result<BTreeMap<VertexId, CheapestPath>, GraphError> {
    debug!("Computing cheapest paths {origin} -> {destinations:?} with {config:?}");
    check_vertices(graph, destinations)?;

    let tree = graph.shortest_paths_by_cost(origin)?;

    destinations
        .iter()
        .map(|&destination| {
            let (path, distance) = unpack_route(config, &tree, destination)?;
            Ok((destination, CheapestPath { path, distance }))
        })
        .collect()
}

/// Computes the fastest path from origin to destination, only following edges with a time.
pub fn fastest_path(
    config: &PathConfig,
    graph: &Graph,
    origin: VertexId,
    destination: VertexId,
) -> Result<FastestPath, GraphError> {
    debug!("Computing fastest path {origin} -> {destination} with {config:?}");
    graph.check_vertex(destination)?;

    let tree = graph.shortest_paths_by_time(origin)?;
    let (path, time) = unpack_route(config, &tree, destination)?;

    Ok(FastestPath { path, time })
}

/// Computes the fastest paths from origin to each destination, the time shortest paths are
/// computed only once. Duplicated destinations are returned once.
pub fn fastest_paths(
    config: &PathConfig,
    graph: &Graph,
    origin: VertexId,
    destinations: &[VertexId],
) -> Result<BTreeMap<VertexId, FastestPath>, GraphError> {
    debug!("Computing fastest paths {origin} -> {destinations:?} with {config:?}");
    check_vertices(graph, destinations)?;

    let tree = graph.shortest_paths_by_time(origin)?;

    destinations
        .iter()
        .map(|&destination| {
            let (path, time) = unpack_route(config, &tree, destination)?;
            Ok((destination, FastestPath { path, time }))
        })
        .collect()
}

fn check_vertices(graph: &Graph, vertices: &[VertexId]) -> Result<(), GraphError> {
    vertices
        .iter()
        .try_for_each(|&vertex| graph.check_vertex(vertex).map(|_| ()))
}

fn unpack_route(
    config: &PathConfig,
    tree: &ShortestPathTree,
    destination: VertexId,
) -> Result<(Vec<VertexId>, f64), GraphError> {
    let score = tree.score(destination)?;

    // a sum of finite weights can overflow to -inf, only +inf means unreachable
    if score == f64::INFINITY && config.unreachable == Unreachable::Error {
        return Err(GraphError::NoPath {
            origin: tree.origin(),
            destination,
        });
    }

    Ok((tree.path_to(destination)?, score))
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::graph::tests::{
        DELIVERY_GRAPH, EXPRESS_GRAPH, NEGATIVE_CYCLE_GRAPH, NEGATIVE_WEIGHTS_GRAPH,
    };

    fn vertices<const N: usize>(ids: [usize; N]) -> Vec<VertexId> {
        ids.into_iter().map(VertexId).collect()
    }

    const STRICT: PathConfig = PathConfig {
        unreachable: Unreachable::Error,
    };

    #[test]
    fn routing_cheapest_path_001() {
        let graph: &Graph = &DELIVERY_GRAPH;

        assert_eq!(
            cheapest_path(&PathConfig::default(), graph, VertexId(0), VertexId(4)).unwrap(),
            CheapestPath {
                path: vertices([0, 1, 2, 3, 4]),
                distance: 6.0,
            }
        );
    }

    #[test]
    fn routing_cheapest_path_002() {
        let graph: &Graph = &DELIVERY_GRAPH;

        assert_eq!(
            cheapest_path(&PathConfig::default(), graph, VertexId(3), VertexId(3)).unwrap(),
            CheapestPath {
                path: vertices([3]),
                distance: 0.0,
            }
        );
    }

    #[test]
    fn routing_cheapest_path_003() {
        let graph: &Graph = &DELIVERY_GRAPH;

        let route =
            cheapest_path(&PathConfig::default(), graph, VertexId(4), VertexId(0)).unwrap();
        assert_eq!(route.path, vertices([0]));
        assert_eq!(route.distance, f64::INFINITY);
        assert!(!route.is_reachable());

        assert_eq!(
            cheapest_path(&STRICT, graph, VertexId(4), VertexId(0)),
            Err(GraphError::NoPath {
                origin: VertexId(4),
                destination: VertexId(0)
            })
        );
    }

    #[test]
    fn routing_cheapest_path_004() {
        let graph: &Graph = &NEGATIVE_CYCLE_GRAPH;

        assert!(matches!(
            cheapest_path(&PathConfig::default(), graph, VertexId(0), VertexId(2)),
            Err(GraphError::NegativeCycle {
                origin: VertexId(0),
                ..
            })
        ));
    }

    #[test]
    fn routing_cheapest_path_005() {
        let graph: &Graph = &DELIVERY_GRAPH;
        let config = PathConfig::default();

        assert_eq!(
            cheapest_path(&config, graph, VertexId(0), VertexId(5)),
            Err(GraphError::InvalidVertex {
                vertex: VertexId(5),
                vertex_count: 5
            })
        );
        assert_eq!(
            cheapest_path(&config, graph, VertexId(5), VertexId(0)),
            Err(GraphError::InvalidVertex {
                vertex: VertexId(5),
                vertex_count: 5
            })
        );
    }

    #[test]
    fn routing_cheapest_paths_001() {
        let graph: &Graph = &NEGATIVE_WEIGHTS_GRAPH;
        let routes = cheapest_paths(
            &PathConfig::default(),
            graph,
            VertexId(0),
            &vertices([4, 1, 4]),
        )
        .unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(
            routes[&VertexId(1)],
            CheapestPath {
                path: vertices([0, 2, 1]),
                distance: 2.0,
            }
        );
        assert_eq!(
            routes[&VertexId(4)],
            CheapestPath {
                path: vertices([0, 2, 1, 3, 4]),
                distance: 7.0,
            }
        );
    }

    #[test]
    fn routing_cheapest_paths_002() {
        let graph: &Graph = &DELIVERY_GRAPH;

        assert!(
            cheapest_paths(&PathConfig::default(), graph, VertexId(0), &[])
                .unwrap()
                .is_empty()
        );
        assert!(matches!(
            cheapest_paths(&PathConfig::default(), graph, VertexId(0), &vertices([1, 8])),
            Err(GraphError::InvalidVertex { .. })
        ));
        assert!(matches!(
            cheapest_paths(&STRICT, graph, VertexId(2), &vertices([3, 1])),
            Err(GraphError::NoPath { .. })
        ));
    }

    #[test]
    fn routing_cheapest_path_006() {
        let mut graph = Graph::new(3);
        graph.add_edge(VertexId(0), VertexId(1), -1e308, None).unwrap();
        graph.add_edge(VertexId(1), VertexId(2), -1e308, None).unwrap();

        let route =
            cheapest_path(&PathConfig::default(), &graph, VertexId(0), VertexId(2)).unwrap();
        assert_eq!(route.path, vertices([0, 1, 2]));
        assert_eq!(route.distance, f64::NEG_INFINITY);
        assert!(route.is_reachable());

        assert_eq!(
            cheapest_path(&STRICT, &graph, VertexId(0), VertexId(2)).unwrap(),
            route
        );
    }

    #[test]
    fn routing_fastest_path_001() {
        let graph: &Graph = &DELIVERY_GRAPH;

        assert_eq!(
            fastest_path(&PathConfig::default(), graph, VertexId(0), VertexId(4)).unwrap(),
            FastestPath {
                path: vertices([0, 1, 2, 3, 4]),
                time: 8.0,
            }
        );
    }

    #[test]
    fn routing_fastest_path_002() {
        let graph: &Graph = &EXPRESS_GRAPH;
        let config = PathConfig::default();

        assert_eq!(
            fastest_path(&config, graph, VertexId(0), VertexId(3)).unwrap(),
            FastestPath {
                path: vertices([0, 2, 3]),
                time: 5.0,
            }
        );
        assert_eq!(
            cheapest_path(&config, graph, VertexId(0), VertexId(3)).unwrap(),
            CheapestPath {
                path: vertices([0, 1, 2, 3]),
                distance: 3.0,
            }
        );
    }

    #[test]
    fn routing_fastest_path_003() {
        // 3 -> 4 has no time
        let graph: &Graph = &EXPRESS_GRAPH;

        let route = fastest_path(&PathConfig::default(), graph, VertexId(0), VertexId(4)).unwrap();
        assert_eq!(route.path, vertices([4]));
        assert!(!route.is_reachable());

        assert_eq!(
            fastest_path(&STRICT, graph, VertexId(0), VertexId(4)),
            Err(GraphError::NoPath {
                origin: VertexId(0),
                destination: VertexId(4)
            })
        );
    }

    #[test]
    fn routing_fastest_paths_001() {
        let graph: &Graph = &EXPRESS_GRAPH;
        let routes = fastest_paths(
            &PathConfig::default(),
            graph,
            VertexId(0),
            &vertices([3, 2, 1]),
        )
        .unwrap();

        assert_eq!(
            routes.keys().copied().collect::<Vec<_>>(),
            vertices([1, 2, 3])
        );
        assert_eq!(routes[&VertexId(1)].path, vertices([0, 1]));
        assert_eq!(routes[&VertexId(2)].path, vertices([0, 2]));
        assert_eq!(routes[&VertexId(3)].time, 5.0);
    }

    #[test]
    fn routing_display_001() {
        let cheapest = CheapestPath {
            path: vertices([0, 1, 2]),
            distance: 6.0,
        };
        assert_eq!(cheapest.to_string(), "0 -> 1 -> 2 (distance 6)");

        let fastest = FastestPath {
            path: vertices([3]),
            time: f64::INFINITY,
        };
        assert_eq!(fastest.to_string(), "3 (time inf)");
    }
}
