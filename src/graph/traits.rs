use std::fmt::Debug;

use crate::graph::model::Route;

/// Dense identifier of a route inside a loaded graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// An outgoing edge as seen by the search algorithms
#[derive(Debug, Clone, Copy)]
pub struct EdgeRef<'a> {
    pub id: EdgeId,
    /// Dense index of the destination node
    pub target: usize,
    pub route: &'a Route,
}

/// Trait representing a directed multigraph of routes, indexed densely by node
pub trait RouteNetwork: Debug {
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of routes in the graph
    fn edge_count(&self) -> usize;

    /// Maps a node identifier to its dense index
    fn node_index(&self, id: &str) -> Option<usize>;

    /// Maps a dense index back to the node identifier
    fn node_id(&self, index: usize) -> Option<&str>;

    /// Returns an iterator over the outgoing routes of a node, in insertion order
    fn outgoing(&self, index: usize) -> Box<dyn Iterator<Item = EdgeRef<'_>> + '_>;

    /// Looks up a route by its identifier
    fn route(&self, id: EdgeId) -> Option<&Route>;
}
