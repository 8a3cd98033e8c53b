use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use std::sync::Arc;

use crate::dataset::load_graph;
use crate::graph::RouteNetwork;
use crate::service::{RouteQuery, RouteService, RouteSummary};
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RouteService>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(service: Arc<RouteService>, config: ServerConfig) -> Self {
        Self {
            service,
            config: Arc::new(config),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/ruta-optima", post(optimal_route))
        .route("/api/route/optimal", post(optimal_route))
        .route("/api/nodes", get(list_nodes))
        .route("/api/products", get(list_products))
        .route("/api/graph/reload", post(reload_graph))
        .route("/api/health", get(health_check))
}

/// HTTP status for each library error
pub fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::InvalidCountry(_)
        | Error::InvalidProduct(_)
        | Error::InvalidCriterion(_)
        | Error::InvalidAlgorithm(_)
        | Error::Validation(_) => StatusCode::BAD_REQUEST,
        Error::NoRouteFound { .. } => StatusCode::NOT_FOUND,
        Error::GraphTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        Error::Io(_) | Error::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    (
        status_for(&err),
        Json(ErrorResponse {
            error: err.kind().to_string(),
            message: err.to_string(),
            details: None,
        }),
    )
}

/// Compute the optimal route between two countries
pub async fn optimal_route(
    State(state): State<AppState>,
    Json(query): Json<RouteQuery>,
) -> ApiResult<RouteSummary> {
    state
        .service
        .compute_optimal_route(&query)
        .map(Json)
        .map_err(error_response)
}

/// List countries with their coordinates
pub async fn list_nodes(State(state): State<AppState>) -> ApiResult<NodesResponse> {
    Ok(Json(NodesResponse::from_graph(&state.service.graph())))
}

/// List the product catalogue
pub async fn list_products(State(state): State<AppState>) -> ApiResult<ProductsResponse> {
    Ok(Json(ProductsResponse {
        products: state.service.graph().products().to_vec(),
    }))
}

/// Re-read the dataset and swap it in; the previous graph stays active on failure
pub async fn reload_graph(State(state): State<AppState>) -> ApiResult<ReloadResponse> {
    let config = &state.config;
    let graph = load_graph(&config.data_path, config.node_policy, config.max_nodes).map_err(
        |err| {
            warn!("Dataset reload failed: {}", err);
            error_response(err)
        },
    )?;

    let response = ReloadResponse {
        nodes: graph.node_count(),
        routes: graph.edge_count(),
        products: graph.products().len(),
    };
    state.service.replace_graph(graph);
    info!(
        "Dataset reloaded: {} nodes, {} routes, {} products",
        response.nodes, response.routes, response.products
    );
    Ok(Json(response))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> ApiResult<HealthResponse> {
    let graph = state.service.graph();
    Ok(Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        nodes: graph.node_count(),
        routes: graph.edge_count(),
        cache: state.service.cache_stats(),
    }))
}
