//! Job Alerts bot
//!
//! Answers Discord messages with job openings found on Work.ua.

mod config;
mod logging;

use anyhow::Context;
use jobalerts::JobSearchService;
use jobalerts_integration_discord::DiscordBot;
use jobalerts_workua::WorkUaSource;
use std::sync::Arc;

use config::BotConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = logging::init_logging()?;

    tracing::info!("🤖 Job Alerts bot starting...");

    let config = BotConfig::from_env()
        .inspect_err(|e| tracing::error!(error = %e, "Invalid configuration"))?;

    let source = WorkUaSource::new(config.workua.clone())
        .context("Failed to initialise Work.ua source")?;
    let search = Arc::new(
        JobSearchService::new(Arc::new(source)).with_max_results(config.max_results),
    );

    tracing::info!(
        max_results = config.max_results,
        timeout_secs = config.workua.timeout.as_secs(),
        suggestions = config.discord.suggestions.len(),
        "🔍 Work.ua search ready"
    );

    DiscordBot::new(config.discord, search)
        .run()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Discord client stopped with an error"))
        .context("Discord client failed")?;

    Ok(())
}
