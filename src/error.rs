use std::path::PathBuf;

/// Failures the services recover from. None of them abort a run; callers log
/// them and fall back to an empty or default value.
#[derive(thiserror::Error, Debug)]
pub enum ReciteError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8")]
    Decode { path: PathBuf },
    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid canary state {path}: {reason}")]
    StateParse { path: PathBuf, reason: String },
}
