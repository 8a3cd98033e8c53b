//! Graph population from record streams and from the JSON dataset document.

use log::info;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::graph::{NodePolicy, Product, Route, RouteGraph, TransportMode};
use crate::Result;

/// Country record
#[derive(Debug, Clone, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Route record
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRecord {
    #[serde(rename = "origen", alias = "origin")]
    pub origin: String,
    #[serde(rename = "destino", alias = "destination")]
    pub destination: String,
    #[serde(rename = "tipo", alias = "mode")]
    pub mode: TransportMode,
    #[serde(rename = "distancia_km", alias = "distance_km")]
    pub distance_km: f64,
    #[serde(rename = "tiempo_horas", alias = "hours")]
    pub hours: f64,
    #[serde(rename = "costo_base_usd_ton", alias = "cost_per_ton")]
    pub cost_per_ton: f64,
}

/// Product record
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(rename = "categoria", alias = "category")]
    pub category: String,
    #[serde(rename = "peso_kg", alias = "weight_kg")]
    pub weight_kg: f64,
    #[serde(rename = "volumen_m3", alias = "volume_m3")]
    pub volume_m3: f64,
    #[serde(rename = "precio_unitario_usd", alias = "unit_price")]
    pub unit_price: f64,
    #[serde(rename = "tipo_transporte_permitido", alias = "allowed_modes")]
    pub allowed_modes: Vec<TransportMode>,
}

impl From<RouteRecord> for Route {
    fn from(r: RouteRecord) -> Self {
        Route::new(
            r.origin,
            r.destination,
            r.mode,
            r.distance_km,
            r.hours,
            r.cost_per_ton,
        )
    }
}

impl From<ProductRecord> for Product {
    fn from(p: ProductRecord) -> Self {
        let mut allowed_modes = p.allowed_modes;
        allowed_modes.sort();
        allowed_modes.dedup();
        Product {
            id: p.id,
            name: p.name,
            category: p.category,
            weight_kg: p.weight_kg,
            volume_m3: p.volume_m3,
            unit_price: p.unit_price,
            allowed_modes,
        }
    }
}

/// The dataset document: countries, products and routes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(rename = "paises", alias = "nodes", default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(rename = "productos", alias = "products", default)]
    pub products: Vec<ProductRecord>,
    #[serde(rename = "rutas", alias = "routes", default)]
    pub routes: Vec<RouteRecord>,
}

impl Dataset {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Builds a graph from the records; nodes first, then products, then routes
    pub fn into_graph(self, node_policy: NodePolicy, max_nodes: usize) -> Result<RouteGraph> {
        build_graph(
            self.nodes,
            self.products.into_iter().map(Product::from),
            self.routes.into_iter().map(Route::from),
            node_policy,
            max_nodes,
        )
    }
}

/// Builds a graph from three finite record streams, rejecting malformed records
pub fn build_graph<N, P, R>(
    nodes: N,
    products: P,
    routes: R,
    node_policy: NodePolicy,
    max_nodes: usize,
) -> Result<RouteGraph>
where
    N: IntoIterator<Item = NodeRecord>,
    P: IntoIterator<Item = Product>,
    R: IntoIterator<Item = Route>,
{
    let mut graph = RouteGraph::with_limits(node_policy, max_nodes);
    for node in nodes {
        graph.add_node(&node.id, &node.name, node.lat, node.lon)?;
    }
    for product in products {
        graph.add_product(product)?;
    }
    for route in routes {
        graph.add_route(route)?;
    }
    graph.log_summary();
    Ok(graph)
}

/// Reads and builds the graph stored at `path`
pub fn load_graph(
    path: impl AsRef<Path>,
    node_policy: NodePolicy,
    max_nodes: usize,
) -> Result<RouteGraph> {
    let path = path.as_ref();
    let graph = Dataset::from_path(path)?.into_graph(node_policy, max_nodes)?;
    info!("Loaded route dataset from {}", path.display());
    Ok(graph)
}
