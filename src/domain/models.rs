use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Global,
    Project,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Project => "project",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateFile {
    pub scope: Scope,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    Safety,
    Style,
}

/// Rules extracted from one candidate file, before cross-file dedup.
#[derive(Debug, Clone, Serialize)]
pub struct FileRules {
    #[serde(flatten)]
    pub file: CandidateFile,
    pub safety: Vec<String>,
    pub style: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanaryStateFile {
    pub failure_count: u64,
    pub last_failure: Option<String>,
}

/// Filesystem snapshot of the canary watchdog taken at check time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanaryState {
    pub installed: bool,
    pub hook_installed: bool,
    pub daemon_installed: bool,
    pub state: Option<CanaryStateFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CanaryHealth {
    NotInstalled { install_hint: String },
    NoData,
    Healthy,
    Degraded { failures: u64, last_failure: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct CanaryReport {
    pub components: Vec<String>,
    #[serde(flatten)]
    pub state: CanaryState,
    pub health: CanaryHealth,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub files: Vec<FileRules>,
    pub safety: Vec<String>,
    pub style: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canary: Option<CanaryReport>,
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}
