use std::env;

use dinehub::api::routes::{AppState, app_router};
use dinehub::notify::Notifier;
use dinehub::persistence;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = persistence::connect_and_migrate(&database_url)
        .await
        .expect("failed to connect to order store");
    info!("connected to order store");

    let state = AppState {
        db,
        events: Notifier::new(),
    };

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");
    info!(%addr, "server listening");
    axum::serve(listener, app_router(state))
        .await
        .expect("server error");
}
