use ecoroute::algorithm::floyd_warshall::FloydWarshall;
use ecoroute::algorithm::PathSearch;
use ecoroute::graph::generators::generate_route_network;
use ecoroute::graph::{RouteGraph, RouteNetwork};
use ecoroute::{Criterion, Dijkstra, WeightPolicy};
use std::time::{Duration, Instant};

struct Timing {
    dijkstra: Duration,
    floyd: Duration,
    routes_found: usize,
    disagreements: usize,
}

// Answer every ordered pair once with each engine
fn benchmark_graph(graph: &RouteGraph, policy: &WeightPolicy) -> Timing {
    let n = graph.node_count();
    let dijkstra = Dijkstra::new();

    let start = Instant::now();
    let mut dijkstra_costs = Vec::with_capacity(n * n);
    for origin in 0..n {
        for destination in 0..n {
            if origin != destination {
                dijkstra_costs.push(
                    dijkstra
                        .find_path(graph, policy, origin, destination)
                        .map(|path| path.cost),
                );
            }
        }
    }
    let dijkstra_time = start.elapsed();

    let start = Instant::now();
    let table = FloydWarshall::compute(graph, policy);
    let mut floyd_costs = Vec::with_capacity(n * n);
    for origin in 0..n {
        for destination in 0..n {
            if origin != destination {
                floyd_costs.push(
                    table
                        .reconstruct(graph, policy, origin, destination)
                        .map(|path| path.cost),
                );
            }
        }
    }
    let floyd_time = start.elapsed();

    let disagreements = dijkstra_costs
        .iter()
        .zip(&floyd_costs)
        .filter(|(a, b)| match (a, b) {
            (Some(a), Some(b)) => (a - b).abs() > 1e-6,
            (None, None) => false,
            _ => true,
        })
        .count();

    Timing {
        dijkstra: dijkstra_time,
        floyd: floyd_time,
        routes_found: dijkstra_costs.iter().filter(|c| c.is_some()).count(),
        disagreements,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let graph_sizes = [10, 25, 50, 100, 200];
    let routes_per_node = 3;

    println!("=====================================================");
    println!("Benchmark: Dijkstra (per pair) vs Floyd-Warshall (all pairs)");
    println!("Routes per country: {}", routes_per_node);
    println!("=====================================================");

    let mut results = Vec::new();
    for &size in &graph_sizes {
        let graph = generate_route_network(size, routes_per_node, size as u64)?;
        println!(
            "\nGraph with {} countries and {} routes",
            graph.node_count(),
            graph.edge_count()
        );

        for criterion in [Criterion::Speed, Criterion::Economy] {
            let policy = WeightPolicy::new(criterion, None);
            let timing = benchmark_graph(&graph, &policy);
            println!(
                "  {:<8} dijkstra {:>10.2?}  floyd-warshall {:>10.2?}  routes {}  disagreements {}",
                criterion.as_str(),
                timing.dijkstra,
                timing.floyd,
                timing.routes_found,
                timing.disagreements
            );
            results.push((size, criterion, timing));
        }
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<15} | {:<15} | {:<10}",
        "Countries", "Criterion", "Dijkstra (ms)", "Floyd (ms)", "Ratio"
    );
    println!("-----------------------------------------------------");
    for (size, criterion, timing) in &results {
        println!(
            "{:<10} | {:<10} | {:<15.3} | {:<15.3} | {:<10.2}",
            size,
            criterion.as_str(),
            timing.dijkstra.as_secs_f64() * 1000.0,
            timing.floyd.as_secs_f64() * 1000.0,
            timing.dijkstra.as_secs_f64() / timing.floyd.as_secs_f64().max(f64::EPSILON)
        );
    }

    Ok(())
}
