use appinfo::config::Config;
use appinfo::error::StartupError;
use appinfo::server;
use appinfo::InfoEngine;
use tracing_subscriber::EnvFilter;

// ========================================
// MAIN ENTRY POINT
// ========================================

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("appinfo: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::init()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let engine = InfoEngine::local(&config.platform)?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    tracing::info!(
        app_id = %config.platform.app_id,
        dev_server = config.platform.dev_server,
        "appinfo v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    server::start_info_server(engine, &addr).await
}
