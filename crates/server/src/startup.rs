use std::{env, net::SocketAddr};

use axum::Router;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use common::logging::init_logging_default;
use configs::Environment;

use crate::routes;
use crate::state::AppState;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(mut cfg) => {
            // a config file that parses must also validate (rejects port = 0)
            cfg.normalize_and_validate()?;
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .or_else(|| env::var("PORT").ok())
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(3000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Environment comes from the config file when present, APP_ENV otherwise.
fn load_environment() -> Environment {
    match configs::load_default() {
        Ok(cfg) if cfg.environment.is_some() => cfg.environment(),
        _ => Environment::from_env(),
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let environment = load_environment();
    let state = AppState::new(environment);

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(state, cors);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, environment = ?environment, "starting api server");
    println!("Server is running on port {}", addr.port());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // CONFIG_PATH is process-wide state, so both cases run in one test.
    #[test]
    fn bind_addr_validates_a_parsed_config_file() {
        let path = std::env::temp_dir().join(format!("memapi-bind-{}.toml", std::process::id()));
        std::env::set_var("CONFIG_PATH", &path);

        std::fs::write(&path, "[server]\nhost = \"127.0.0.1\"\nport = 0\n").expect("write config");
        assert!(load_bind_addr().is_err());

        std::fs::write(&path, "[server]\nhost = \"127.0.0.1\"\nport = 8123\n").expect("write config");
        let addr = load_bind_addr().expect("valid config");
        assert_eq!(addr, "127.0.0.1:8123".parse::<SocketAddr>().expect("addr"));

        std::env::remove_var("CONFIG_PATH");
        std::fs::remove_file(&path).ok();
    }
}
