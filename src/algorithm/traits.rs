use crate::graph::{EdgeId, Route, RouteNetwork};
use crate::policy::WeightPolicy;

/// A concrete route sequence found by a search
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    /// Routes in travel order
    pub edges: Vec<EdgeId>,

    /// Total weight under the policy that produced the path
    pub cost: f64,
}

impl RoutePath {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Resolves the edge identifiers against the graph they came from
    pub fn routes<'g, G: RouteNetwork>(&self, graph: &'g G) -> Vec<&'g Route> {
        self.edges
            .iter()
            .filter_map(|&edge| graph.route(edge))
            .collect()
    }
}

/// Trait for point-to-point route search algorithms
pub trait PathSearch<G>
where
    G: RouteNetwork,
{
    /// Find the cheapest path between two node indices under `policy`;
    /// `None` when the destination cannot be reached through finite-weight routes
    fn find_path(
        &self,
        graph: &G,
        policy: &WeightPolicy,
        origin: usize,
        destination: usize,
    ) -> Option<RoutePath>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Same as [`PathSearch::find_path`], addressing nodes by identifier
    fn find_route(
        &self,
        graph: &G,
        policy: &WeightPolicy,
        origin: &str,
        destination: &str,
    ) -> Option<RoutePath> {
        let origin = graph.node_index(origin)?;
        let destination = graph.node_index(destination)?;
        self.find_path(graph, policy, origin, destination)
    }
}
