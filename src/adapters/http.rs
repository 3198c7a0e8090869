use crate::config::ServerConfig;
use crate::core::profile::ProfileStore;
use crate::core::render::TemplateRenderer;
use crate::core::score::RandomScoreService;
use crate::core::{CurrentScore, Page, PageRenderer, ProfileProvider, ScoreService, ScoreSubmission};
use crate::domain::model::{Acknowledgement, HealthStatus};
use crate::utils::error::{PortfolioError, Result};
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;

const SNAKE_JS: &str = include_str!("../../static/snake.js");

#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<dyn ProfileProvider>,
    pub scores: Arc<dyn ScoreService>,
    pub renderer: Arc<dyn PageRenderer>,
}

impl AppState {
    pub fn new(
        profile: Arc<dyn ProfileProvider>,
        scores: Arc<dyn ScoreService>,
        renderer: Arc<dyn PageRenderer>,
    ) -> Self {
        Self {
            profile,
            scores,
            renderer,
        }
    }

    /// Built-in profile, embedded templates, thread-local score draws.
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(ProfileStore::builtin()),
            Arc::new(RandomScoreService::new()),
            Arc::new(TemplateRenderer::embedded()),
        )
    }

    pub fn bootstrap(config: &ServerConfig) -> Result<Self> {
        let store = ProfileStore::load(config.profile.as_deref())?;

        let renderer = match &config.templates {
            Some(dir) => {
                tracing::info!("📄 Serving templates from: {}", dir.display());
                TemplateRenderer::from_directory(dir.clone())
            }
            None => TemplateRenderer::embedded(),
        };

        Ok(Self::new(
            Arc::new(store),
            Arc::new(RandomScoreService::new()),
            Arc::new(renderer),
        ))
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Portfolio(PortfolioError::TemplateNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Portfolio(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("❌ Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/game", get(game))
        .route(
            "/api/highscore",
            get(current_highscore)
                .post(submit_highscore)
                // oversized submissions are acknowledged like any other payload
                .layer(DefaultBodyLimit::disable()),
        )
        .route("/health", get(health))
        .route("/static/snake.js", get(snake_js))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn render_page(state: &AppState, page: Page) -> std::result::Result<Html<String>, ApiError> {
    tracing::debug!("Rendering page: {}", page);
    let html = state.renderer.render(page, state.profile.profile()).await?;
    Ok(Html(html))
}

async fn home(State(state): State<AppState>) -> std::result::Result<Html<String>, ApiError> {
    render_page(&state, Page::Home).await
}

async fn game(State(state): State<AppState>) -> std::result::Result<Html<String>, ApiError> {
    render_page(&state, Page::Game).await
}

async fn current_highscore(State(state): State<AppState>) -> Json<CurrentScore> {
    Json(state.scores.query())
}

/// The raw body is decoded leniently: anything unreadable counts as a score of 0.
async fn submit_highscore(State(state): State<AppState>, body: Bytes) -> Json<Acknowledgement> {
    let submission = ScoreSubmission::from_body(&body);
    Json(state.scores.submit(submission))
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::healthy(state.profile.profile().portfolio_name()))
}

async fn snake_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SNAKE_JS,
    )
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
