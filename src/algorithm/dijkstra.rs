use crate::algorithm::{PathSearch, RoutePath};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{EdgeId, RouteNetwork};
use crate::policy::WeightPolicy;

/// Classic Dijkstra's algorithm with early exit at the destination
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<G> PathSearch<G> for Dijkstra
where
    G: RouteNetwork,
{
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn find_path(
        &self,
        graph: &G,
        policy: &WeightPolicy,
        origin: usize,
        destination: usize,
    ) -> Option<RoutePath> {
        let n = graph.node_count();
        if origin >= n || destination >= n {
            return None;
        }

        let mut distances = vec![f64::INFINITY; n];
        let mut predecessors: Vec<Option<(usize, EdgeId)>> = vec![None; n];
        let mut settled = vec![false; n];

        distances[origin] = 0.0;
        let mut queue = BinaryHeapWrapper::new();
        queue.push(origin, 0.0);

        while let Some((u, dist_u)) = queue.pop() {
            if settled[u] || dist_u > distances[u] {
                continue;
            }
            settled[u] = true;
            if u == destination {
                break;
            }

            for edge in graph.outgoing(u) {
                let weight = policy.weight(edge.route);
                if !weight.is_finite() {
                    continue;
                }

                let candidate = dist_u + weight;
                // Strict comparison keeps the first route found on ties
                if candidate < distances[edge.target] {
                    distances[edge.target] = candidate;
                    predecessors[edge.target] = Some((u, edge.id));
                    queue.push(edge.target, candidate);
                }
            }
        }

        if !distances[destination].is_finite() {
            return None;
        }

        let mut edges = Vec::new();
        let mut current = destination;
        while current != origin {
            let (previous, edge) = predecessors[current]?;
            edges.push(edge);
            current = previous;
        }
        edges.reverse();

        Some(RoutePath {
            edges,
            cost: distances[destination],
        })
    }
}
