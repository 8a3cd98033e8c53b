use axum::{
    http::{header, Method},
    Router,
};
use log::{info, warn};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::dataset::load_graph;
use crate::graph::{NodePolicy, DEFAULT_MAX_NODES};
use crate::service::RouteService;
use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// JSON dataset loaded at startup and on reload
    pub data_path: PathBuf,
    pub enable_cors: bool,
    pub node_policy: NodePolicy,
    pub max_nodes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3005,
            data_path: PathBuf::from("data/graph.json"),
            enable_cors: true,
            node_policy: NodePolicy::AutoCreate,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `ECOROUTE_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an arbitrary variable source.
    /// Unparsable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("ECOROUTE_BIND") {
            match value.parse() {
                Ok(bind) => config.bind = bind,
                Err(_) => warn!("Ignoring invalid ECOROUTE_BIND '{}'", value),
            }
        }
        if let Some(value) = lookup("ECOROUTE_PORT") {
            match value.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Ignoring invalid ECOROUTE_PORT '{}'", value),
            }
        }
        if let Some(value) = lookup("ECOROUTE_DATA_PATH") {
            config.data_path = PathBuf::from(value);
        }
        if let Some(value) = lookup("ECOROUTE_CORS") {
            match parse_flag(&value) {
                Some(flag) => config.enable_cors = flag,
                None => warn!("Ignoring invalid ECOROUTE_CORS '{}'", value),
            }
        }
        if let Some(value) = lookup("ECOROUTE_STRICT_NODES") {
            match parse_flag(&value) {
                Some(true) => config.node_policy = NodePolicy::Strict,
                Some(false) => config.node_policy = NodePolicy::AutoCreate,
                None => warn!("Ignoring invalid ECOROUTE_STRICT_NODES '{}'", value),
            }
        }
        if let Some(value) = lookup("ECOROUTE_MAX_NODES") {
            match value.parse() {
                Ok(max) if max > 0 => config.max_nodes = max,
                _ => warn!("Ignoring invalid ECOROUTE_MAX_NODES '{}'", value),
            }
        }

        config
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Build the application router with middleware
pub fn build_app(state: AppState, enable_cors: bool) -> Router {
    let app = Router::new().merge(create_router()).with_state(state);

    if !enable_cors {
        return app;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
    app.layer(ServiceBuilder::new().layer(cors).into_inner())
}

/// Load the dataset and start the web server
pub async fn start_server_with_config(
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph = load_graph(&config.data_path, config.node_policy, config.max_nodes)?;
    let service = Arc::new(RouteService::new(graph));
    let state = AppState::new(service, config.clone());
    let app = build_app(state, config.enable_cors);

    let addr = config.addr();
    info!("EcoRoute server listening on http://{}", addr);
    info!("Serving dataset from {}", config.data_path.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
