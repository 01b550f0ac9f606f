//! Self-contained demo server: a few text routes plus a seeded, read-only
//! user listing backed by the same store the api service uses.

use std::env;
use std::net::SocketAddr;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use dotenvy::dotenv;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use models::{NewUser, User};
use store::ResourceStore;

async fn hello() -> &'static str {
    "Hello World!"
}

async fn about() -> &'static str {
    "About Us"
}

async fn list_users(State(users): State<ResourceStore<User>>) -> Json<Vec<User>> {
    Json(users.list().await)
}

/// Look the user up in the store; unknown or non-numeric ids answer a plain
/// text 404, matching the rest of this app's responses.
async fn get_user(
    State(users): State<ResourceStore<User>>,
    Path(id): Path<String>,
) -> Result<Json<User>, (StatusCode, &'static str)> {
    let user = match id.parse::<u64>() {
        Ok(id) => users.get(id).await.ok(),
        Err(_) => None,
    };
    user.map(Json).ok_or((StatusCode::NOT_FOUND, "User not found"))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

async fn search(Query(params): Query<SearchParams>) -> String {
    format!("Search results for: {}", params.q)
}

async fn seed_users(users: &ResourceStore<User>) {
    for name in ["John Doe", "Jane Doe", "Jim Doe", "Jill Doe"] {
        users.create(NewUser { name: name.into(), email: None }).await;
    }
}

fn build_router(users: ResourceStore<User>) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/about", get(about))
        .route("/users", get(list_users))
        .route("/user/:id", get(get_user))
        .route("/search", get(search))
        .with_state(users)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::logging::init_logging_default();

    let users = ResourceStore::new();
    seed_users(&users).await;
    let router = build_router(users);

    let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!(%addr, "starting hello server");
    println!("Server listening at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
