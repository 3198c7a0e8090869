pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::{build_router, ApiError, AppState};
pub use adapters::server::{serve, serve_with_shutdown};
pub use app::run_oneshot;
pub use config::{LogFormat, ServerConfig};
pub use core::{profile::ProfileStore, render::TemplateRenderer, score::RandomScoreService};
pub use utils::error::{PortfolioError, Result};
