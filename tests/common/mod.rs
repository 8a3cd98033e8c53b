#![allow(dead_code)]

use ecoroute::graph::{Product, RouteGraph, RouteNetwork, TransportMode};
use ecoroute::WeightPolicy;

/// A, B, C with a fast air corridor through B and a slow, cheap sea route A -> C
pub fn triangle_graph() -> RouteGraph {
    let mut graph = RouteGraph::new();
    graph.add_node("A", "Alpha", 0.0, 0.0).unwrap();
    graph.add_node("B", "Bravo", 10.0, 10.0).unwrap();
    graph.add_node("C", "Charlie", 20.0, 20.0).unwrap();
    graph
        .add_edge("A", "B", TransportMode::Air, 1000.0, 3.0, 50.0)
        .unwrap();
    graph
        .add_edge("B", "C", TransportMode::Air, 2000.0, 5.0, 80.0)
        .unwrap();
    graph
        .add_edge("A", "C", TransportMode::Sea, 4000.0, 40.0, 30.0)
        .unwrap();
    graph
}

/// Two parallel A -> B routes: a fast expensive flight declared first, then a cheap slow ship
pub fn parallel_graph() -> RouteGraph {
    let mut graph = RouteGraph::new();
    graph.add_node("A", "Alpha", 0.0, 0.0).unwrap();
    graph.add_node("B", "Bravo", 1.0, 1.0).unwrap();
    graph
        .add_edge("A", "B", TransportMode::Air, 900.0, 5.0, 100.0)
        .unwrap();
    graph
        .add_edge("A", "B", TransportMode::Sea, 1100.0, 50.0, 10.0)
        .unwrap();
    graph
}

pub fn product(id: &str, weight_kg: f64, modes: &[TransportMode]) -> Product {
    Product {
        id: id.to_string(),
        name: format!("{} product", id),
        category: "test".to_string(),
        weight_kg,
        volume_m3: 0.1,
        unit_price: 10.0,
        allowed_modes: modes.to_vec(),
    }
}

/// Minimum cost over every simple path, by exhaustive enumeration
pub fn brute_force_cost<G: RouteNetwork>(
    graph: &G,
    policy: &WeightPolicy,
    origin: usize,
    destination: usize,
) -> Option<f64> {
    fn walk<G: RouteNetwork>(
        graph: &G,
        policy: &WeightPolicy,
        current: usize,
        destination: usize,
        visited: &mut Vec<bool>,
        cost: f64,
        best: &mut Option<f64>,
    ) {
        if current == destination {
            if best.map_or(true, |b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        visited[current] = true;
        for edge in graph.outgoing(current) {
            let weight = policy.weight(edge.route);
            if weight.is_finite() && !visited[edge.target] {
                walk(graph, policy, edge.target, destination, visited, cost + weight, best);
            }
        }
        visited[current] = false;
    }

    let mut best = None;
    let mut visited = vec![false; graph.node_count()];
    walk(graph, policy, origin, destination, &mut visited, 0.0, &mut best);
    best
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
