//! All-pairs shortest paths with next-hop matrix and edge-level reconstruction.
//!
//! Besides the usual distance and next-hop matrices, the table records which
//! concrete route was used for every direct hop. With parallel routes between
//! the same pair of countries, that is the only way to tell which one a path
//! actually travels on.

use log::debug;

use crate::algorithm::{PathSearch, RoutePath};
use crate::graph::{EdgeId, RouteNetwork};
use crate::policy::{PolicyKey, WeightPolicy};

/// Floyd-Warshall algorithm, O(V^3) over the whole graph
#[derive(Debug, Default)]
pub struct FloydWarshall;

/// Distance and next-hop matrices computed for one weight policy
#[derive(Debug, Clone)]
pub struct AllPairsTable {
    n: usize,
    key: PolicyKey,
    dist: Vec<f64>,
    next: Vec<Option<usize>>,
    /// Cheapest direct route for each (u, v) pair
    direct: Vec<Option<EdgeId>>,
}

impl FloydWarshall {
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Computes the full table for `policy`
    pub fn compute<G: RouteNetwork>(graph: &G, policy: &WeightPolicy) -> AllPairsTable {
        let n = graph.node_count();
        let mut table = AllPairsTable {
            n,
            key: policy.cache_key(),
            dist: vec![f64::INFINITY; n * n],
            next: vec![None; n * n],
            direct: vec![None; n * n],
        };

        for i in 0..n {
            table.dist[i * n + i] = 0.0;
            table.next[i * n + i] = Some(i);
        }

        // Seed with the cheapest usable route between each pair
        for u in 0..n {
            for edge in graph.outgoing(u) {
                let weight = policy.weight(edge.route);
                if !weight.is_finite() {
                    continue;
                }
                let cell = u * n + edge.target;
                if weight < table.dist[cell] {
                    table.dist[cell] = weight;
                    table.next[cell] = Some(edge.target);
                    table.direct[cell] = Some(edge.id);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = table.dist[i * n + k];
                if !d_ik.is_finite() {
                    continue;
                }
                for j in 0..n {
                    let candidate = d_ik + table.dist[k * n + j];
                    if candidate < table.dist[i * n + j] {
                        table.dist[i * n + j] = candidate;
                        table.next[i * n + j] = table.next[i * n + k];
                    }
                }
            }
        }

        debug!(
            "Floyd-Warshall table computed for {:?} over {} nodes",
            table.key, n
        );
        table
    }
}

impl AllPairsTable {
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// The policy key this table was computed for
    pub fn key(&self) -> &PolicyKey {
        &self.key
    }

    /// Shortest distance between two node indices, `None` if unreachable
    pub fn distance(&self, origin: usize, destination: usize) -> Option<f64> {
        if origin >= self.n || destination >= self.n {
            return None;
        }
        let d = self.dist[origin * self.n + destination];
        d.is_finite().then_some(d)
    }

    /// Rebuilds the concrete route sequence from `origin` to `destination`.
    ///
    /// Every hop is re-weighted with `policy`; a hop without a recorded route,
    /// or whose route is not usable under `policy`, fails the reconstruction.
    pub fn reconstruct<G: RouteNetwork>(
        &self,
        graph: &G,
        policy: &WeightPolicy,
        origin: usize,
        destination: usize,
    ) -> Option<RoutePath> {
        let n = self.n;
        if origin >= n || destination >= n || n != graph.node_count() {
            return None;
        }
        self.next[origin * n + destination]?;

        let mut edges = Vec::new();
        let mut cost = 0.0;
        let mut current = origin;
        while current != destination {
            // A simple path never needs more than n - 1 hops
            if edges.len() >= n {
                return None;
            }
            let hop = self.next[current * n + destination]?;
            let edge = self.direct[current * n + hop]?;
            let weight = policy.weight(graph.route(edge)?);
            if !weight.is_finite() {
                return None;
            }
            cost += weight;
            edges.push(edge);
            current = hop;
        }

        Some(RoutePath { edges, cost })
    }
}

impl<G> PathSearch<G> for FloydWarshall
where
    G: RouteNetwork,
{
    fn name(&self) -> &'static str {
        "floyd-warshall"
    }

    fn find_path(
        &self,
        graph: &G,
        policy: &WeightPolicy,
        origin: usize,
        destination: usize,
    ) -> Option<RoutePath> {
        FloydWarshall::compute(graph, policy).reconstruct(graph, policy, origin, destination)
    }
}
