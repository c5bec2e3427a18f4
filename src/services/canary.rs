use crate::domain::models::{CanaryHealth, CanaryReport, CanaryState, CanaryStateFile};
use crate::error::ReciteError;
use crate::services::config::{resolve, CanaryConfig};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawState {
    #[serde(default)]
    failure_count: u64,
    #[serde(default)]
    last_failure: Option<serde_json::Value>,
}

/// Parses the watchdog state file. Only a non-empty JSON object counts as
/// recorded state.
pub fn parse_state(path: &Path, raw: &str) -> Result<Option<CanaryStateFile>, ReciteError> {
    let bad = |reason: String| ReciteError::StateParse {
        path: path.to_path_buf(),
        reason,
    };
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| bad(e.to_string()))?;
    match value.as_object() {
        Some(obj) if obj.is_empty() => return Ok(None),
        Some(_) => {}
        None => return Err(bad("expected a JSON object".to_string())),
    }
    let state: RawState = serde_json::from_value(value).map_err(|e| bad(e.to_string()))?;
    let last_failure = match state.last_failure {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    };
    Ok(Some(CanaryStateFile {
        failure_count: state.failure_count,
        last_failure,
    }))
}

fn read_state(path: &Path) -> Option<CanaryStateFile> {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no canary state file");
        return None;
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) => {
            let e = ReciteError::Read {
                path: path.to_path_buf(),
                source,
            };
            tracing::debug!("{e}; treating canary state as absent");
            return None;
        }
    };
    parse_state(path, &raw).unwrap_or_else(|e| {
        tracing::debug!("{e}; treating canary state as absent");
        None
    })
}

/// Snapshots the canary's installed components and recorded state.
pub fn check(home: Option<&Path>, cfg: &CanaryConfig) -> CanaryState {
    let plugins = resolve(home, &cfg.plugins_dir);
    let exists = |name: &str| {
        plugins
            .as_ref()
            .map(|dir| dir.join(name).exists())
            .unwrap_or(false)
    };
    let hook_installed = exists(cfg.hook_script.as_str());
    let daemon_installed = exists(cfg.daemon_script.as_str());
    tracing::debug!(hook_installed, daemon_installed, "canary components");

    let state = resolve(home, &cfg.state_file).and_then(|p| read_state(&p));

    CanaryState {
        installed: hook_installed || daemon_installed,
        hook_installed,
        daemon_installed,
        state,
    }
}

pub fn classify(state: &CanaryState, install_hint: &str) -> CanaryHealth {
    if !state.installed {
        return CanaryHealth::NotInstalled {
            install_hint: install_hint.to_string(),
        };
    }
    match &state.state {
        None => CanaryHealth::NoData,
        Some(s) if s.failure_count == 0 => CanaryHealth::Healthy,
        Some(s) => CanaryHealth::Degraded {
            failures: s.failure_count,
            last_failure: s
                .last_failure
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        },
    }
}

pub fn components(state: &CanaryState) -> Vec<String> {
    let mut out = Vec::new();
    if state.hook_installed {
        out.push("hook".to_string());
    }
    if state.daemon_installed {
        out.push("daemon".to_string());
    }
    out
}

pub fn report(home: Option<&Path>, cfg: &CanaryConfig) -> CanaryReport {
    let state = check(home, cfg);
    let health = classify(&state, &cfg.install_hint);
    CanaryReport {
        components: components(&state),
        state,
        health,
    }
}
