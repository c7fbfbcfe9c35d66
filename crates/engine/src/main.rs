//! Wyrdgrid Engine - main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wyrdgrid_domain::{EventLog, GameState, WorldGrid};
use wyrdgrid_engine::api::websocket::{ws_handler, WsState};
use wyrdgrid_engine::api::{self, ConnectionManager};
use wyrdgrid_engine::game::runtime;
use wyrdgrid_engine::game::svg::{SvgCache, SvgSource};
use wyrdgrid_engine::game::TurnPipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wyrdgrid_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Wyrdgrid Engine");

    // Load configuration
    let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let server_port: u16 = std::env::var("SERVER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "8000".into())
        .parse()
        .unwrap_or(8000);
    let grid_width = env_parse("GRID_WIDTH", 10u32);
    let grid_height = env_parse("GRID_HEIGHT", 10u32);
    let log_capacity = env_parse("EVENT_LOG_CAPACITY", EventLog::DEFAULT_CAPACITY);
    let cache_capacity = env_parse("SVG_CACHE_CAPACITY", SvgCache::DEFAULT_CAPACITY);

    // Generate the world
    let svg = SvgCache::new(cache_capacity);
    let mut rng = match std::env::var("WORLD_SEED").ok().and_then(|s| s.parse().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let grid = WorldGrid::generate(grid_width, grid_height, &mut rng, |desc| svg.svg_for(desc));
    tracing::info!(
        width = grid_width,
        height = grid_height,
        svg_assets = svg.len(),
        "World generated"
    );

    let state = GameState::new(grid, log_capacity);

    // Create connection manager and the serializing game task
    let connections = Arc::new(ConnectionManager::new());
    let game = runtime::spawn(state, TurnPipeline::new(), connections.clone());

    let ws_state = Arc::new(WsState { game, connections });

    // Build router
    let mut router = api::http::routes()
        .route("/ws/{client_id}", get(ws_handler).with_state(ws_state))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer_from_env() {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{server_host}:{server_port}").parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer_from_env() -> Option<CorsLayer> {
    let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())?;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
