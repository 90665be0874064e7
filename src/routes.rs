use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::posts;
use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Assemble the application router and its middleware stack.
pub fn app(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/api/posts", get(posts::list));

    // Only post creation sits behind the bearer-auth middleware
    let protected = Router::new()
        .route("/api/posts", post(posts::create))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    public
        .merge(protected)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - Liveness greeting, public regardless of auth state.
async fn root() -> &'static str {
    "Forum API backend is running"
}
