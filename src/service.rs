//! Route query service: validation, policy selection, dispatch and summary.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{AllPairsCache, CacheStats, PathSearch, RoutePath};
use crate::graph::{Route, RouteGraph, RouteNetwork, TransportMode};
use crate::policy::{Criterion, WeightPolicy};
use crate::{Error, Result};

/// Search engine selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    FloydWarshall,
}

impl Algorithm {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "floyd-warshall" | "floyd_warshall" => Ok(Algorithm::FloydWarshall),
            other => Err(Error::InvalidAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => f.write_str("dijkstra"),
            Algorithm::FloydWarshall => f.write_str("floyd-warshall"),
        }
    }
}

/// Optimal route request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteQuery {
    #[serde(alias = "algoritmo")]
    pub algorithm: String,
    #[serde(alias = "criterio")]
    pub criterion: String,
    #[serde(rename = "origen", alias = "origin")]
    pub origin: String,
    #[serde(rename = "destino", alias = "destination")]
    pub destination: String,
    #[serde(
        rename = "producto_id",
        alias = "product_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub product_id: Option<String>,
}

impl RouteQuery {
    pub fn new(algorithm: &str, criterion: &str, origin: &str, destination: &str) -> Self {
        RouteQuery {
            algorithm: algorithm.to_string(),
            criterion: criterion.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            product_id: None,
        }
    }

    pub fn with_product(mut self, product_id: &str) -> Self {
        self.product_id = Some(product_id.to_string());
        self
    }
}

/// Totals and classification of an optimal route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Node identifiers from origin to destination
    #[serde(rename = "ruta")]
    pub path: Vec<String>,
    #[serde(rename = "tipo_ruta")]
    pub route_type: TransportMode,
    #[serde(rename = "distancia_total")]
    pub total_distance_km: f64,
    #[serde(rename = "tiempo_total")]
    pub total_hours: f64,
    #[serde(rename = "costo_total")]
    pub total_cost: f64,
}

impl RouteSummary {
    /// Aggregates a non-empty route sequence. Cost is always the economy cost
    /// for the same cargo, whatever the criterion used to pick the routes.
    pub fn from_routes(routes: &[&Route], policy: &WeightPolicy) -> Option<Self> {
        let first = routes.first()?;
        let economy = policy.economy_for();

        let mut path = Vec::with_capacity(routes.len() + 1);
        path.push(first.origin.clone());
        path.extend(routes.iter().map(|route| route.destination.clone()));

        let distance: f64 = routes.iter().map(|route| route.distance_km).sum();
        let hours: f64 = routes.iter().map(|route| route.hours).sum();
        let cost: f64 = routes.iter().map(|route| economy.weight(route)).sum();

        Some(RouteSummary {
            path,
            route_type: classify(routes),
            total_distance_km: round2(distance),
            total_hours: round2(hours),
            total_cost: round2(cost),
        })
    }
}

/// The shared mode when every leg uses the same one, `Mixed` otherwise
fn classify(routes: &[&Route]) -> TransportMode {
    let mut modes = routes.iter().map(|route| route.mode);
    match modes.next() {
        Some(first) if modes.all(|mode| mode == first) => first,
        _ => TransportMode::Mixed,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A loaded graph together with the all-pairs tables computed over it
#[derive(Debug)]
struct GraphSnapshot {
    graph: Arc<RouteGraph>,
    floyd_cache: AllPairsCache,
}

impl GraphSnapshot {
    fn new(graph: RouteGraph) -> Self {
        GraphSnapshot {
            graph: Arc::new(graph),
            floyd_cache: AllPairsCache::new(),
        }
    }
}

/// Answers optimal route queries against a swappable graph
#[derive(Debug)]
pub struct RouteService {
    snapshot: RwLock<Arc<GraphSnapshot>>,
}

impl RouteService {
    pub fn new(graph: RouteGraph) -> Self {
        RouteService {
            snapshot: RwLock::new(Arc::new(GraphSnapshot::new(graph))),
        }
    }

    fn current(&self) -> Arc<GraphSnapshot> {
        Arc::clone(&self.snapshot.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// The graph queries currently run against
    pub fn graph(&self) -> Arc<RouteGraph> {
        Arc::clone(&self.current().graph)
    }

    /// Replaces the whole graph at once; cached all-pairs tables go with the old one.
    /// Queries already running finish against the graph they started with.
    pub fn replace_graph(&self, graph: RouteGraph) {
        let snapshot = Arc::new(GraphSnapshot::new(graph));
        info!(
            "Swapping route graph: {} nodes, {} routes",
            snapshot.graph.node_count(),
            snapshot.graph.edge_count()
        );
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.current().floyd_cache.stats()
    }

    /// Computes the optimal route for `query`.
    ///
    /// Checks run in order and the first failure is returned: origin,
    /// destination, distinct endpoints, criterion, product, then algorithm.
    pub fn compute_optimal_route(&self, query: &RouteQuery) -> Result<RouteSummary> {
        let snapshot = self.current();
        let graph = snapshot.graph.as_ref();

        let origin = graph
            .node_index(&query.origin)
            .ok_or_else(|| Error::InvalidCountry(query.origin.clone()))?;
        let destination = graph
            .node_index(&query.destination)
            .ok_or_else(|| Error::InvalidCountry(query.destination.clone()))?;
        if origin == destination {
            return Err(Error::no_route(
                &query.origin,
                &query.destination,
                "origin and destination are the same",
            ));
        }

        let criterion = Criterion::parse(&query.criterion)?;

        let product = match query.product_id.as_deref() {
            None | Some("") => None,
            Some(id) => Some(
                graph
                    .get_product(id)
                    .ok_or_else(|| Error::InvalidProduct(id.to_string()))?,
            ),
        };

        let policy = WeightPolicy::new(criterion, product);
        let algorithm = Algorithm::parse(&query.algorithm)?;

        debug!(
            "Routing {} -> {} with {} by {} (product: {:?})",
            query.origin,
            query.destination,
            algorithm,
            criterion,
            policy.product_id()
        );

        let found: Option<RoutePath> = match algorithm {
            Algorithm::Dijkstra => Dijkstra::new().find_path(graph, &policy, origin, destination),
            Algorithm::FloydWarshall => snapshot
                .floyd_cache
                .get_or_compute(graph, &policy)
                .reconstruct(graph, &policy, origin, destination),
        };

        let path = found.ok_or_else(|| {
            Error::no_route(
                &query.origin,
                &query.destination,
                "no route available for the selected parameters",
            )
        })?;

        RouteSummary::from_routes(&path.routes(graph), &policy).ok_or_else(|| {
            Error::no_route(&query.origin, &query.destination, "empty route")
        })
    }
}
