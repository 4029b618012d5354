//! Shared helper functions for CLI commands

use mind_matters_core::{
    config::default_config_path, error::Result, CompanionConfig, MemoryStore, MindMattersError,
    User, WellnessStore,
};
use std::path::PathBuf;
use tracing::debug;

/// Resolve and load the configuration file
pub fn load_config(cli_path: Option<PathBuf>) -> Result<CompanionConfig> {
    let path = cli_path.unwrap_or_else(default_config_path);
    debug!("Using config file: {:?}", path);
    CompanionConfig::load_layered(&path)
}

/// Parse a `QUESTION_ID=OPTION` answer argument
pub fn parse_answer(raw: &str) -> std::result::Result<(u32, String), String> {
    let (id, text) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION_ID=OPTION, got '{}'", raw))?;
    let id: u32 = id
        .trim()
        .parse()
        .map_err(|e| format!("invalid question id '{}': {}", id.trim(), e))?;
    Ok((id, text.trim().to_string()))
}

/// Parse a count that must be at least 1
pub fn parse_positive(raw: &str) -> std::result::Result<usize, String> {
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|e| format!("invalid number '{}': {}", raw.trim(), e))?;
    if value == 0 {
        return Err("value must be at least 1".to_string());
    }
    Ok(value)
}

/// Open the journal store at the configured data path
pub async fn open_store(config: &CompanionConfig) -> Result<(MemoryStore, PathBuf)> {
    let path = config.data_path();
    debug!("Using data file: {:?}", path);
    let store = MemoryStore::load(&path).await?;
    Ok((store, path))
}

/// Look up a registered user by email
pub async fn require_user(store: &MemoryStore, email: &str) -> Result<User> {
    store
        .get_user_by_email(email)
        .await?
        .ok_or_else(|| MindMattersError::UserNotFound(email.to_string()))
}
