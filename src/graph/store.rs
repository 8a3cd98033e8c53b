use log::{debug, warn};
use std::collections::HashMap;

use crate::graph::model::{finite_coordinate, Node, Product, Route, TransportMode};
use crate::graph::traits::{EdgeId, EdgeRef, RouteNetwork};
use crate::{Error, Result};

/// Default upper bound on the number of nodes, keeps the O(V^3) all-pairs search tractable
pub const DEFAULT_MAX_NODES: usize = 512;

/// What to do when a route references a node that was never declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodePolicy {
    /// Create a placeholder node with zero coordinates and log a warning
    #[default]
    AutoCreate,
    /// Reject the route with a validation error
    Strict,
}

/// Graph store holding countries, routes and products, using adjacency lists
///
/// Populated once and then frozen behind an `Arc`; a reload builds a new
/// store rather than mutating a shared one.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    routes: Vec<Route>,
    /// Target node index of each route, parallel to `routes`
    targets: Vec<usize>,
    /// Outgoing routes for each node: node index -> [route index]
    adjacency: Vec<Vec<usize>>,
    products: Vec<Product>,
    product_index: HashMap<String, usize>,
    node_policy: NodePolicy,
    max_nodes: usize,
}

impl Default for RouteGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteGraph {
    /// Creates a new empty graph with placeholder node creation and the default size limit
    pub fn new() -> Self {
        Self::with_limits(NodePolicy::default(), DEFAULT_MAX_NODES)
    }

    pub fn with_limits(node_policy: NodePolicy, max_nodes: usize) -> Self {
        RouteGraph {
            nodes: Vec::new(),
            index: HashMap::new(),
            routes: Vec::new(),
            targets: Vec::new(),
            adjacency: Vec::new(),
            products: Vec::new(),
            product_index: HashMap::new(),
            node_policy,
            max_nodes,
        }
    }

    pub fn node_policy(&self) -> NodePolicy {
        self.node_policy
    }

    /// Adds a country; duplicate identifiers are rejected
    pub fn add_node(&mut self, id: &str, name: &str, lat: f64, lon: f64) -> Result<()> {
        if self.index.contains_key(id) {
            return Err(Error::Validation(format!("duplicate node id '{}'", id)));
        }
        finite_coordinate(id, "lat", lat)?;
        finite_coordinate(id, "lon", lon)?;
        self.insert_node(Node {
            id: id.to_string(),
            name: name.to_string(),
            lat,
            lon,
        })?;
        Ok(())
    }

    fn insert_node(&mut self, node: Node) -> Result<usize> {
        if self.nodes.len() >= self.max_nodes {
            return Err(Error::GraphTooLarge {
                nodes: self.nodes.len() + 1,
                limit: self.max_nodes,
            });
        }
        let idx = self.nodes.len();
        self.index.insert(node.id.clone(), idx);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        Ok(idx)
    }

    /// Resolves a route endpoint, applying the node policy for undeclared ids
    fn resolve_endpoint(&mut self, id: &str) -> Result<usize> {
        if let Some(&idx) = self.index.get(id) {
            return Ok(idx);
        }
        match self.node_policy {
            NodePolicy::Strict => Err(Error::Validation(format!(
                "route references undeclared node '{}'",
                id
            ))),
            NodePolicy::AutoCreate => {
                warn!("Route references undeclared node '{}', creating a placeholder", id);
                self.insert_node(Node {
                    id: id.to_string(),
                    name: id.to_string(),
                    lat: 0.0,
                    lon: 0.0,
                })
            }
        }
    }

    /// Adds a directed route; parallel routes between the same pair are all kept
    pub fn add_edge(
        &mut self,
        origin: &str,
        destination: &str,
        mode: TransportMode,
        distance_km: f64,
        hours: f64,
        cost_per_ton: f64,
    ) -> Result<()> {
        self.add_route(Route::new(
            origin,
            destination,
            mode,
            distance_km,
            hours,
            cost_per_ton,
        ))
    }

    pub fn add_route(&mut self, route: Route) -> Result<()> {
        route.validate()?;
        let from = self.resolve_endpoint(&route.origin)?;
        let to = self.resolve_endpoint(&route.destination)?;

        let edge = self.routes.len();
        self.routes.push(route);
        self.targets.push(to);
        self.adjacency[from].push(edge);
        Ok(())
    }

    /// Adds a product definition; duplicate identifiers are rejected
    pub fn add_product(&mut self, product: Product) -> Result<()> {
        product.validate()?;
        if self.product_index.contains_key(&product.id) {
            return Err(Error::Validation(format!(
                "duplicate product id '{}'",
                product.id
            )));
        }
        self.product_index
            .insert(product.id.clone(), self.products.len());
        self.products.push(product);
        Ok(())
    }

    /// Outgoing routes of a country; empty for unknown ids and leaf nodes
    pub fn neighbors(&self, id: &str) -> Vec<&Route> {
        match self.index.get(id) {
            Some(&idx) => self.adjacency[idx]
                .iter()
                .map(|&edge| &self.routes[edge])
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All node identifiers, in insertion order
    pub fn all_node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|node| node.id.as_str())
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.product_index.get(id).map(|&idx| &self.products[idx])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Logs a one-line summary of the loaded graph
    pub fn log_summary(&self) {
        debug!(
            "Route graph loaded: {} nodes, {} routes, {} products",
            self.nodes.len(),
            self.routes.len(),
            self.products.len()
        );
    }
}

impl RouteNetwork for RouteGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.routes.len()
    }

    fn node_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    fn node_id(&self, index: usize) -> Option<&str> {
        self.nodes.get(index).map(|node| node.id.as_str())
    }

    fn outgoing(&self, index: usize) -> Box<dyn Iterator<Item = EdgeRef<'_>> + '_> {
        if let Some(edges) = self.adjacency.get(index) {
            Box::new(edges.iter().map(move |&edge| EdgeRef {
                id: EdgeId(edge),
                target: self.targets[edge],
                route: &self.routes[edge],
            }))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn route(&self, id: EdgeId) -> Option<&Route> {
        self.routes.get(id.0)
    }
}
