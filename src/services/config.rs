use crate::domain::constants::{
    CANARY_DAEMON_SCRIPT, CANARY_HOOK_SCRIPT, CANARY_INSTALL_HINT, CANARY_PLUGINS_DIR,
    CANARY_STATE_FILE, CONFIG_FILE, GLOBAL_FILE, INSTRUCTION_FILE,
};
use crate::error::ReciteError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub canary: CanaryConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// File name probed in the cwd and every ancestor.
    pub instruction_file: String,
    /// Relative paths resolve against `$HOME`.
    pub global_file: PathBuf,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            instruction_file: INSTRUCTION_FILE.to_string(),
            global_file: PathBuf::from(GLOBAL_FILE),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CanaryConfig {
    pub plugins_dir: PathBuf,
    pub hook_script: String,
    pub daemon_script: String,
    pub state_file: PathBuf,
    pub install_hint: String,
}

impl Default for CanaryConfig {
    fn default() -> Self {
        Self {
            plugins_dir: PathBuf::from(CANARY_PLUGINS_DIR),
            hook_script: CANARY_HOOK_SCRIPT.to_string(),
            daemon_script: CANARY_DAEMON_SCRIPT.to_string(),
            state_file: PathBuf::from(CANARY_STATE_FILE),
            install_hint: CANARY_INSTALL_HINT.to_string(),
        }
    }
}

/// `$HOME` as set, or `None` when unset or empty.
pub fn home_dir() -> Option<PathBuf> {
    match std::env::var_os("HOME") {
        Some(h) if !h.is_empty() => Some(PathBuf::from(h)),
        _ => None,
    }
}

/// Joins `rel` onto `home` unless it is already absolute.
pub fn resolve(home: Option<&Path>, rel: &Path) -> Option<PathBuf> {
    if rel.is_absolute() {
        return Some(rel.to_path_buf());
    }
    home.map(|h| h.join(rel))
}

pub fn parse_config(path: &Path, raw: &str) -> Result<Config, ReciteError> {
    toml::from_str(raw).map_err(|source| ReciteError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Missing or malformed config falls back to defaults.
pub fn load_config(home: Option<&Path>) -> Config {
    let Some(path) = home.map(|h| h.join(CONFIG_FILE)) else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(source) => {
            tracing::warn!("{}", ReciteError::Read { path, source });
            return Config::default();
        }
    };
    match parse_config(&path, &raw) {
        Ok(cfg) => {
            tracing::debug!(path = %path.display(), "loaded config");
            cfg
        }
        Err(e) => {
            tracing::warn!("{e}; using defaults");
            Config::default()
        }
    }
}
