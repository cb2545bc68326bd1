use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::gemini::ChatModel;

pub mod handlers;
pub mod types;

use handlers::{chat, health};

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ChatModel>,
}

/// With a static dir configured the frontend page takes over `/`; otherwise
/// `/` answers the JSON liveness body.
pub fn router(static_dir: Option<PathBuf>) -> Router<AppState> {
    let router = Router::new().route("/chat", post(chat));
    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.route("/", get(health)),
    }
}
