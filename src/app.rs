use crate::adapters::http::AppState;
use crate::config::ServerConfig;
use crate::core::{Page, PageRenderer, ProfileProvider};
use crate::utils::error::Result;

/// Handles the modes that print and exit instead of serving.
///
/// Returns the text to print for `--render` / `--dry-run`, or `None` when the
/// process should go on to bind the listener.
pub async fn run_oneshot(config: &ServerConfig, state: &AppState) -> Result<Option<String>> {
    if let Some(page) = &config.render {
        let page: Page = page.parse()?;
        tracing::info!("📄 Rendering page '{}' to stdout", page);
        let html = state.renderer.render(page, state.profile.profile()).await?;
        return Ok(Some(html));
    }

    if config.dry_run {
        tracing::info!("🔍 Dry run - configuration is valid");
        let profile = serde_json::to_string_pretty(state.profile.profile())?;
        return Ok(Some(profile));
    }

    Ok(None)
}
