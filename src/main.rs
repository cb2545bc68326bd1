use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
mod gemini;
mod model;

use api::AppState;
use gemini::GeminiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // -----------------------------
    // Logging
    // -----------------------------
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("🚀 Starting Gemini chat gateway...");

    // -----------------------------
    // Shared state / Dependencies
    // -----------------------------
    // Missing credential is fatal before the listener ever opens.
    let client = GeminiClient::from_env()?;
    let state = AppState {
        model: Arc::new(client),
    };

    // Optional frontend mount. When set, the static page supersedes the JSON
    // liveness body at `/`.
    let static_dir = dotenvy::var("STATIC_DIR").ok().map(PathBuf::from);
    if let Some(dir) = &static_dir {
        info!(dir = %dir.display(), "serving static frontend");
    }

    // -----------------------------
    // Router
    // -----------------------------
    let app = api::router(static_dir)
        // CORS for frontend
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state);

    let addr = dotenvy::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    println!("🌐 HTTP listening on http://{addr}");
    println!("💬 Chat endpoint at http://{addr}/chat");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
