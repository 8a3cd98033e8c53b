mod common;

use common::{parallel_graph, product, triangle_graph};
use ecoroute::algorithm::CacheStats;
use ecoroute::graph::{RouteGraph, TransportMode};
use ecoroute::{Error, RouteQuery, RouteService, RouteSummary};
use std::sync::Arc;
use std::thread;

const ALGORITHMS: [&str; 2] = ["dijkstra", "floyd-warshall"];

fn service_with_products() -> RouteService {
    let mut graph = triangle_graph();
    graph
        .add_product(product("SEA_CARGO", 500.0, &[TransportMode::Sea]))
        .unwrap();
    graph
        .add_product(product("LAND_CARGO", 500.0, &[TransportMode::Land]))
        .unwrap();
    RouteService::new(graph)
}

#[test]
fn test_speed_route_summary() {
    let service = service_with_products();
    for algorithm in ALGORITHMS {
        let summary = service
            .compute_optimal_route(&RouteQuery::new(algorithm, "rapidez", "A", "C"))
            .unwrap();
        assert_eq!(summary.path, ["A", "B", "C"], "{}", algorithm);
        assert_eq!(summary.route_type, TransportMode::Air);
        assert_eq!(summary.total_distance_km, 3000.0);
        assert_eq!(summary.total_hours, 8.0);
        // Cost is reported with the economy weighting even for speed queries
        assert_eq!(summary.total_cost, 130.0);
    }
}

#[test]
fn test_economy_route_summary() {
    let service = service_with_products();
    for algorithm in ALGORITHMS {
        let summary = service
            .compute_optimal_route(&RouteQuery::new(algorithm, "economia", "A", "C"))
            .unwrap();
        assert_eq!(summary.path, ["A", "C"], "{}", algorithm);
        assert_eq!(summary.route_type, TransportMode::Sea);
        assert_eq!(summary.total_distance_km, 4000.0);
        assert_eq!(summary.total_hours, 40.0);
        assert_eq!(summary.total_cost, 30.0);
    }
}

#[test]
fn test_product_restricts_modes_and_scales_cost() {
    let service = service_with_products();
    for algorithm in ALGORITHMS {
        let summary = service
            .compute_optimal_route(
                &RouteQuery::new(algorithm, "rapidez", "A", "C").with_product("SEA_CARGO"),
            )
            .unwrap();
        assert_eq!(summary.path, ["A", "C"]);
        assert_eq!(summary.total_hours, 40.0);
        // 30 per ton for half a ton
        assert_eq!(summary.total_cost, 15.0);

        let err = service
            .compute_optimal_route(
                &RouteQuery::new(algorithm, "rapidez", "A", "C").with_product("LAND_CARGO"),
            )
            .unwrap_err();
        assert!(matches!(err, Error::NoRouteFound { .. }), "{:?}", err);
    }
}

#[test]
fn test_parallel_routes_through_the_service() {
    let service = RouteService::new(parallel_graph());
    for algorithm in ALGORITHMS {
        let cheap = service
            .compute_optimal_route(&RouteQuery::new(algorithm, "economia", "A", "B"))
            .unwrap();
        assert_eq!(cheap.total_cost, 10.0);
        assert_eq!(cheap.total_hours, 50.0);
        assert_eq!(cheap.route_type, TransportMode::Sea);

        let fast = service
            .compute_optimal_route(&RouteQuery::new(algorithm, "speed", "A", "B"))
            .unwrap();
        assert_eq!(fast.total_hours, 5.0);
        assert_eq!(fast.total_cost, 100.0);
        assert_eq!(fast.route_type, TransportMode::Air);
    }
}

#[test]
fn test_mixed_route_type() {
    let mut graph = triangle_graph();
    graph
        .add_edge("C", "D", TransportMode::Land, 300.0, 6.0, 9.0)
        .unwrap();
    let service = RouteService::new(graph);
    let summary = service
        .compute_optimal_route(&RouteQuery::new("dijkstra", "economia", "A", "D"))
        .unwrap();
    assert_eq!(summary.path, ["A", "C", "D"]);
    assert_eq!(summary.route_type, TransportMode::Mixed);
    assert_eq!(summary.total_cost, 39.0);
}

#[test]
fn test_validation_order() {
    let service = service_with_products();
    let kind = |query: RouteQuery| service.compute_optimal_route(&query).unwrap_err().kind();

    let mut query = RouteQuery::new("bogus", "bogus", "X", "Y").with_product("NOPE");
    assert_eq!(kind(query.clone()), "invalid_country");
    match service.compute_optimal_route(&query).unwrap_err() {
        Error::InvalidCountry(id) => assert_eq!(id, "X"),
        other => panic!("unexpected {:?}", other),
    }

    query.origin = "A".into();
    match service.compute_optimal_route(&query).unwrap_err() {
        Error::InvalidCountry(id) => assert_eq!(id, "Y"),
        other => panic!("unexpected {:?}", other),
    }

    query.destination = "A".into();
    assert_eq!(kind(query.clone()), "no_route_found");

    query.destination = "C".into();
    assert_eq!(kind(query.clone()), "invalid_criterion");

    query.criterion = "economia".into();
    assert_eq!(kind(query.clone()), "invalid_product");

    query.product_id = None;
    assert_eq!(kind(query.clone()), "invalid_algorithm");

    query.algorithm = "dijkstra".into();
    assert!(service.compute_optimal_route(&query).is_ok());
}

#[test]
fn test_empty_product_id_means_no_product() {
    let service = service_with_products();
    let summary = service
        .compute_optimal_route(&RouteQuery::new("dijkstra", "economia", "A", "C").with_product(""))
        .unwrap();
    assert_eq!(summary.total_cost, 30.0);
}

#[test]
fn test_repeated_queries_are_identical() {
    let service = service_with_products();
    for algorithm in ALGORITHMS {
        for criterion in ["rapidez", "economia"] {
            let query = RouteQuery::new(algorithm, criterion, "A", "C");
            let first = service.compute_optimal_route(&query).unwrap();
            let second = service.compute_optimal_route(&query).unwrap();
            assert_eq!(first, second);
        }
    }
}

// Reported totals equal the sum over the cheapest route of each hop
#[test]
fn test_totals_round_trip_over_bundled_dataset() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/graph.json");
    let graph = ecoroute::dataset::load_graph(path, Default::default(), 64).unwrap();
    let ids: Vec<String> = graph.all_node_ids().map(str::to_string).collect();
    let service = RouteService::new(graph);
    let graph = service.graph();

    for algorithm in ALGORITHMS {
        for criterion in ["rapidez", "economia"] {
            for origin in &ids {
                for destination in &ids {
                    if origin == destination {
                        continue;
                    }
                    let query = RouteQuery::new(algorithm, criterion, origin, destination);
                    let summary: RouteSummary = match service.compute_optimal_route(&query) {
                        Ok(summary) => summary,
                        Err(Error::NoRouteFound { .. }) => continue,
                        Err(other) => panic!("unexpected {:?}", other),
                    };

                    let (mut distance, mut hours) = (0.0, 0.0);
                    for hop in summary.path.windows(2) {
                        let best = graph
                            .neighbors(&hop[0])
                            .into_iter()
                            .filter(|route| route.destination == hop[1])
                            .fold(None, |best: Option<&ecoroute::Route>, route| {
                                let weight = |r: &ecoroute::Route| {
                                    if criterion == "rapidez" {
                                        r.hours
                                    } else {
                                        r.cost_per_ton
                                    }
                                };
                                match best {
                                    Some(b) if weight(b) <= weight(route) => Some(b),
                                    _ => Some(route),
                                }
                            })
                            .expect("every hop has a route");
                        distance += best.distance_km;
                        hours += best.hours;
                    }
                    assert!((summary.total_distance_km - distance).abs() < 0.01);
                    assert!((summary.total_hours - hours).abs() < 0.01);
                }
            }
        }
    }
}

#[test]
fn test_reload_swaps_graph_and_drops_cached_tables() {
    let service = service_with_products();
    let query = RouteQuery::new("floyd-warshall", "economia", "A", "C");

    service.compute_optimal_route(&query).unwrap();
    service.compute_optimal_route(&query).unwrap();
    let stats = service.cache_stats();
    assert_eq!((stats.misses, stats.hits, stats.entries), (1, 1, 1));

    // Same countries, but the ship got expensive
    let mut graph = RouteGraph::new();
    for id in ["A", "B", "C"] {
        graph.add_node(id, id, 0.0, 0.0).unwrap();
    }
    graph.add_edge("A", "B", TransportMode::Air, 1000.0, 3.0, 50.0).unwrap();
    graph.add_edge("B", "C", TransportMode::Air, 2000.0, 5.0, 80.0).unwrap();
    graph.add_edge("A", "C", TransportMode::Sea, 4000.0, 40.0, 300.0).unwrap();
    service.replace_graph(graph);

    assert_eq!(service.cache_stats(), CacheStats::default());
    let summary = service.compute_optimal_route(&query).unwrap();
    assert_eq!(summary.path, ["A", "B", "C"]);
    assert_eq!(summary.total_cost, 130.0);
}

#[test]
fn test_cache_keys_cover_criterion_and_product() {
    let service = service_with_products();
    let queries = [
        RouteQuery::new("floyd-warshall", "rapidez", "A", "C"),
        RouteQuery::new("floyd-warshall", "economia", "A", "C"),
        RouteQuery::new("floyd-warshall", "rapidez", "A", "C").with_product("SEA_CARGO"),
    ];
    let first: Vec<_> = queries
        .iter()
        .map(|q| service.compute_optimal_route(q).unwrap())
        .collect();
    assert_eq!(service.cache_stats().entries, 3);

    // Served from cache in a different order, same answers
    for (query, expected) in queries.iter().zip(&first).rev() {
        assert_eq!(&service.compute_optimal_route(query).unwrap(), expected);
    }
    let stats = service.cache_stats();
    assert_eq!((stats.misses, stats.hits), (3, 3));
    assert_eq!(first[2].path, ["A", "C"]);
}

#[test]
fn test_concurrent_queries_compute_each_table_once() {
    let service = Arc::new(service_with_products());
    thread::scope(|scope| {
        for _ in 0..8 {
            let service = Arc::clone(&service);
            scope.spawn(move || {
                let query = RouteQuery::new("floyd-warshall", "rapidez", "A", "C");
                let summary = service.compute_optimal_route(&query).unwrap();
                assert_eq!(summary.path, ["A", "B", "C"]);
            });
        }
    });
    let stats = service.cache_stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 7);
}
