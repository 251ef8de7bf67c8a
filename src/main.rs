use std::sync::Arc;

use lexicoid::config::Config;
use lexicoid::{AppState, SystemClock, server};
use tracing::info;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lexicoid=debug,tower_http=debug".parse().unwrap()),
        )
        .init();

    let config = Config::from_env();

    let state = AppState {
        config: config.clone(),
        clock: Arc::new(SystemClock),
    };

    let app = server::router(state);
    let addr = config.listen_addr();

    info!(%addr, strict = config.strict, "lexicoid is listening");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server error");
}
