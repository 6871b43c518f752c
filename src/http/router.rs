use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::sessions::HashMapSessionsStorage;
use crate::{catalog, game, health, http::cors, http::middleware, sessions};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;

pub fn new(args: &Args, app_context: AppContext<HashMapSessionsStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let game_routes = Router::new().route("/config", get(game::handlers::config));
    let catalog_routes = Router::new().route("/status", get(catalog::handlers::status));
    let sessions_routes = Router::new()
        .route("/", post(sessions::handlers::session::create))
        .route(
            "/:session-id",
            get(sessions::handlers::session::summary).delete(sessions::handlers::session::finish),
        )
        .route(
            "/:session-id/next-image",
            post(sessions::handlers::round::next_image),
        )
        .route(
            "/:session-id/guess",
            post(sessions::handlers::round::submit_guess),
        )
        .route(
            "/:session-id/reset",
            post(sessions::handlers::session::reset),
        );

    Router::new()
        .nest("/health", health_routes)
        .nest("/game", game_routes)
        .nest("/catalog", catalog_routes)
        .nest("/sessions", sessions_routes)
        .with_state(app_context)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::tracing))
                .layer(cors_policy),
        )
}
