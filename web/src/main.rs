use std::net::{Ipv4Addr, SocketAddr};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dbtime_web::config::Config;
use dbtime_web::{app, templates, AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting web server...");

    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    };

    // Parse the template up front so a broken page is fatal at startup.
    let templates = match templates::load_template(&config.template_path) {
        Ok(templates) => templates,
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    };

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));

    let app = app(AppState::new(templates, config.api_host));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
