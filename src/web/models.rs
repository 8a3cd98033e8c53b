use serde::Serialize;
use std::collections::BTreeMap;

use crate::algorithm::CacheStats;
use crate::graph::{Product, RouteGraph};

/// Country list with coordinates for map display
#[derive(Debug, Clone, Serialize)]
pub struct NodesResponse {
    pub nodes: Vec<String>,
    /// id -> [lat, lon]
    pub geo: BTreeMap<String, [f64; 2]>,
}

impl NodesResponse {
    pub fn from_graph(graph: &RouteGraph) -> Self {
        NodesResponse {
            nodes: graph.all_node_ids().map(str::to_string).collect(),
            geo: graph
                .nodes()
                .iter()
                .map(|node| (node.id.clone(), [node.lat, node.lon]))
                .collect(),
        }
    }
}

/// Product catalogue
#[derive(Debug, Clone, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// Outcome of a dataset reload
#[derive(Debug, Clone, Serialize)]
pub struct ReloadResponse {
    pub nodes: usize,
    pub routes: usize,
    pub products: usize,
}

/// Service status
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub nodes: usize,
    pub routes: usize,
    pub cache: CacheStats,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
