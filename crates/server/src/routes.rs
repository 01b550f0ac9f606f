pub mod products;
pub mod users;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::{ApiIndex, Health};
use models::Entity;

use crate::errors::{ApiError, PanicResponder};
use crate::state::AppState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Index route: a greeting plus where the collections live.
pub async fn welcome() -> Json<ApiIndex> {
    Json(ApiIndex::new("Welcome to the memapi API"))
}

/// `:id` segments are matched as raw text and parsed here: anything that is
/// not a `u64` can never equal a stored id, so it maps to the entity's
/// not-found response rather than a 400.
pub(crate) fn parse_id<T: Entity>(raw: &str) -> Result<u64, ApiError> {
    raw.parse().map_err(|_| ApiError::not_found(T::NAME))
}

/// Build the full application router over the injected state.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // Panics inside handlers become the generic 500 body; detail only shows
    // outside production.
    let fault_boundary = CatchPanicLayer::custom(PanicResponder::new(state.environment));

    let users = Router::new()
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        );

    let products = Router::new()
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .patch(products::update_product)
                .delete(products::delete_product),
        );

    // Compose
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .merge(users)
        .merge(products)
        .with_state(state)
        .layer(cors)
        .layer(fault_boundary)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
