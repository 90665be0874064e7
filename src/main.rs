use std::sync::Arc;

use forum_api_rust::auth::FirebaseTokenVerifier;
use forum_api_rust::config::AppConfig;
use forum_api_rust::routes::app;
use forum_api_rust::state::AppState;
use forum_api_rust::store::{FirestoreCredentials, FirestoreStore};
use forum_api_rust::tenant::TenantPaths;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up FORUM_APP_ID, FIREBASE_PROJECT_ID, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!("Starting Forum API in {:?} mode", config.environment);

    // One shared HTTP client for both external services
    let http = reqwest::Client::new();

    let credentials = FirestoreCredentials::from_env();
    if credentials.is_missing() {
        tracing::warn!(
            "Document store credentials not configured; post writes will fail until FIRESTORE_AUTH_TOKEN or FIRESTORE_EMULATOR_HOST is set"
        );
    }

    let state = AppState::new(
        Arc::new(FirebaseTokenVerifier::new(http.clone(), &config.firebase)),
        Arc::new(FirestoreStore::new(http, &config.firebase, credentials)),
        TenantPaths::new(config.tenant.app_id.clone()),
    );

    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Forum API Rust server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
