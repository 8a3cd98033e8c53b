pub mod cache;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod traits;

pub use cache::{AllPairsCache, CacheStats};
pub use traits::{PathSearch, RoutePath};
