use nasa_explorer::{Config, Server, app};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::new(&config.log_level))
        .init();

    info!(?config, "starting nasa-explorer");

    let router = match app::build(&config) {
        Ok(router) => router,
        Err(e) => {
            error!("failed to build application: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = Server::bind(config.bind_addr).serve(router).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
