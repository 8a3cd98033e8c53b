pub mod generators;
pub mod model;
pub mod store;
pub mod traits;

pub use model::{Node, Product, Route, TransportMode};
pub use store::{NodePolicy, RouteGraph, DEFAULT_MAX_NODES};
pub use traits::{EdgeId, EdgeRef, RouteNetwork};
