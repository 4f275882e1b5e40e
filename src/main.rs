use std::process;

use dotenvy::dotenv;

use storefront::{catalog::Catalog, create_router, AppConfig, AppState};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    env_logger::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid configuration: {}", e);
            eprintln!("invalid configuration: {}", e);
            process::exit(1);
        }
    };
    let addr = config.bind_addr();

    let app = create_router(AppState::new(config, Catalog::fixtures()));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("failed to bind {}: {}", addr, e);
            process::exit(1);
        }
    };
    log::info!("storefront server starting on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("server error: {}", e);
        process::exit(1);
    }
}
