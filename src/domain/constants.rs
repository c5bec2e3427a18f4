pub const INSTRUCTION_FILE: &str = "CLAUDE.md";
pub const GLOBAL_FILE: &str = "CLAUDE.md";

pub const CANARY_PLUGINS_DIR: &str = ".claude/plugins";
pub const CANARY_HOOK_SCRIPT: &str = "canary-check-v2.sh";
pub const CANARY_DAEMON_SCRIPT: &str = "canary-daemon-global.sh";
pub const CANARY_STATE_FILE: &str = ".claude/canary-state.json";
pub const CANARY_INSTALL_HINT: &str = "bash install.sh --canary";

/// Relative to `$HOME`.
pub const CONFIG_FILE: &str = ".config/recite/config.toml";

pub const BANNER_WIDTH: usize = 50;
pub const TITLE: &str = "[CONTEXT CHECK] Rule Verification";
