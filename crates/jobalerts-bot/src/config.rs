//! Process configuration, read from the environment once at startup

use jobalerts::DEFAULT_MAX_RESULTS;
use jobalerts_integration_discord::DiscordConfig;
use jobalerts_workua::WorkUaConfig;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
pub const TIMEOUT_VAR: &str = "WORKUA_TIMEOUT_SECS";
pub const MAX_RESULTS_VAR: &str = "WORKUA_MAX_RESULTS";
pub const SUGGESTIONS_VAR: &str = "JOBALERTS_SUGGESTIONS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Bot token is not set ({0})")]
    MissingToken(&'static str),

    #[error("Invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Everything the bot needs to start
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub discord: DiscordConfig,
    pub workua: WorkUaConfig,
    pub max_results: usize,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken(TOKEN_VAR))?;

        let mut discord = DiscordConfig::new(token);
        if let Some(list) = lookup(SUGGESTIONS_VAR) {
            discord = discord.with_suggestions(list.split(','));
        }

        let mut workua = WorkUaConfig::default();
        if let Some(secs) = parse_var::<u64, _>(&lookup, TIMEOUT_VAR)? {
            workua = workua.with_timeout(Duration::from_secs(secs));
        }

        let max_results = parse_var(&lookup, MAX_RESULTS_VAR)?.unwrap_or(DEFAULT_MAX_RESULTS);

        Ok(Self {
            discord,
            workua,
            max_results,
        })
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
