use ecoroute::web::server::{start_server_with_config, ServerConfig};
use log::{info, warn};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut config = ServerConfig::from_env();

    // Positional arguments: [port] [dataset path]
    let args: Vec<String> = env::args().collect();
    if let Some(port) = args.get(1) {
        match port.parse() {
            Ok(port) => config.port = port,
            Err(_) => warn!("Ignoring invalid port argument '{}'", port),
        }
    }
    if let Some(path) = args.get(2) {
        config.data_path = path.into();
    }

    info!("Starting EcoRoute server");
    info!("  bind: {}", config.addr());
    info!("  dataset: {}", config.data_path.display());
    info!("  CORS enabled: {}", config.enable_cors);
    info!("  node policy: {:?}", config.node_policy);
    info!("  max nodes: {}", config.max_nodes);

    start_server_with_config(config).await?;

    Ok(())
}
