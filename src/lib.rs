//! EcoRoute - least-cost and least-time trade route planning
//!
//! This library models a small directed graph of countries connected by
//! transport routes (air, sea, land or mixed) and finds optimal routes between
//! them, either by time ("speed") or by freight cost ("economy"), optionally
//! restricted to the transport modes a given product may use.
//!
//! Two search engines are provided: a single-target Dijkstra and an all-pairs
//! Floyd-Warshall with edge-level path reconstruction and a per-policy cache.

pub mod algorithm;
pub mod data_structures;
pub mod dataset;
pub mod graph;
pub mod policy;
pub mod service;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra, floyd_warshall::FloydWarshall, PathSearch, RoutePath,
};
/// Re-export main types for convenient use
pub use graph::{NodePolicy, Product, Route, RouteGraph, TransportMode};
pub use policy::{Criterion, WeightPolicy};
pub use service::{Algorithm, RouteQuery, RouteService, RouteSummary};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown country '{0}'")]
    InvalidCountry(String),

    #[error("Unknown product '{0}'")]
    InvalidProduct(String),

    #[error("Invalid criterion '{0}' (use 'rapidez' or 'economia')")]
    InvalidCriterion(String),

    #[error("Invalid algorithm '{0}' (use 'dijkstra' or 'floyd-warshall')")]
    InvalidAlgorithm(String),

    #[error("No route found from {origin} to {destination}: {reason}")]
    NoRouteFound {
        origin: String,
        destination: String,
        reason: String,
    },

    #[error("Invalid graph data: {0}")]
    Validation(String),

    #[error("Graph has too many nodes: {nodes} exceeds the limit of {limit}")]
    GraphTooLarge { nodes: usize, limit: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Stable machine-readable identifier for this error
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidCountry(_) => "invalid_country",
            Error::InvalidProduct(_) => "invalid_product",
            Error::InvalidCriterion(_) => "invalid_criterion",
            Error::InvalidAlgorithm(_) => "invalid_algorithm",
            Error::NoRouteFound { .. } => "no_route_found",
            Error::Validation(_) => "validation_error",
            Error::GraphTooLarge { .. } => "graph_too_large",
            Error::Io(_) => "io_error",
            Error::Json(_) => "malformed_dataset",
        }
    }

    pub(crate) fn no_route(origin: &str, destination: &str, reason: impl Into<String>) -> Self {
        Error::NoRouteFound {
            origin: origin.to_string(),
            destination: destination.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
