use axum::{
    extract::Extension,
    routing::{get, get_service, post},
    Router,
};
use anyhow::Context;
use std::sync::Arc;
use tera::Tera;
use time::Duration;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use tracing_subscriber::EnvFilter;

mod config;
mod data;
mod features;
mod handlers;
mod utils;

use config::Config;
use data::models::Vocabulary;
use handlers::{api, quiz, vocabulary};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Nothing to quiz on without a default vocabulary
    let default_vocab = data::loader::load_vocabulary(&config.vocab_path)
        .with_context(|| format!("Failed to load vocabulary from {}", config.vocab_path.display()))?;
    let default_vocab = Arc::new(default_vocab);

    let templates = Arc::new(utils::load_templates().context("Template parsing error")?);

    let app = app(&config, default_vocab, templates);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", config.bind_addr))?;

    log::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

fn app(config: &Config, default_vocab: Arc<Vocabulary>, templates: Arc<Tera>) -> Router {
    // Sessions configuration
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(config.session_days)))
        .with_secure(config.secure_cookies);

    // Quiz form router
    let quiz_router = Router::new()
        .route("/start", post(quiz::start_quiz))
        .route("/answer", post(quiz::submit_answer))
        .route("/next", post(quiz::next_question))
        .route("/reset", post(quiz::reset_quiz));

    // Vocabulary router
    let vocabulary_router = Router::new()
        .route("/", get(vocabulary::vocabulary_page))
        .route("/upload", post(vocabulary::upload_vocabulary))
        .route("/default", post(vocabulary::use_default_vocabulary));

    // JSON API router
    let api_router = Router::new()
        .route("/quiz", get(api::quiz_state))
        .route("/quiz/start", post(api::start))
        .route("/quiz/answer", post(api::answer))
        .route("/quiz/next", post(api::next))
        .route("/quiz/reset", post(api::reset))
        .route("/vocabulary", get(api::vocabulary));

    Router::new()
        .route("/", get(quiz::quiz_page))
        .nest("/quiz", quiz_router)
        .nest("/vocabulary", vocabulary_router)
        .nest("/api", api_router)
        // Static files
        .nest_service("/static", get_service(ServeDir::new(&config.static_dir)))
        // Shared state and layers
        .with_state(default_vocab)
        .layer(Extension(templates))
        .layer(session_layer)
}
