//! Player win counts and league membership behind a small HTTP API.

use std::sync::Arc;

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use routes::AppState;
pub use store::{InMemoryPlayerStore, PlayerStore};

/// Build the application router around one shared store.
pub fn build_router(store: Arc<dyn PlayerStore>) -> Router {
    // CORS configuration for browser clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // League listing
        .route("/league", ignoring_others(get(routes::league::list_players)))

        // Player endpoints, the name is read from the raw path by `PlayerName`
        .route("/players/", player_routes())
        .route("/players/{*name}", player_routes())

        .fallback(routes::ignore_request)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(store))
}

fn player_routes() -> MethodRouter<AppState> {
    ignoring_others(get(routes::players::get_player).post(routes::players::record_win))
}

// Unsupported methods on a known path fall through like unknown paths
fn ignoring_others(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(routes::ignore_request)
}
