use crate::domain::models::RuleCategory;
use crate::error::ReciteError;
use regex::{Regex, RegexBuilder};
use std::path::Path;

/// Safety patterns in priority order. Bulleted and bare directive forms are
/// anchored; the golden-rule marker matches anywhere in the line.
const SAFETY_PATTERNS: &[(&str, &str)] = &[
    ("never", r"^[-*]\s+NEVER\b"),
    ("always", r"^[-*]\s+ALWAYS\b"),
    ("confirm-before", r"^[-*]\s+.*\bconfirm\w*\s+before\b"),
    ("never-bare", r"^NEVER\b"),
    ("always-bare", r"^ALWAYS\b"),
    ("golden-rule", r"Golden Rule"),
    ("trash-mv", r"^[-*]\s+.*\btrash\b.*\bmv\b"),
    ("mv-trash", r"^[-*]\s+.*\bmv\b.*\btrash\b"),
];

const STYLE_PATTERNS: &[(&str, &str)] = &[
    ("reply-prefix-zh", r"^[-*]\s+.*每次回复.*先说"),
    ("response-prefix", r"^Every response must start with"),
    ("response-prefix-bullet", r"^[-*]\s+.*Every response.*start with"),
    ("no-emoji", r"^[-*]\s+.*NO emoji"),
    ("concise", r"^[-*]\s+.*Concise.*professional"),
    ("communication", r"^[-*]\s+Communication:"),
];

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub regex: Regex,
}

/// Ordered patterns for one category. The first pattern that matches takes
/// the line.
#[derive(Debug)]
pub struct RuleList {
    pub category: RuleCategory,
    pub skip_tables: bool,
    pub patterns: Vec<Pattern>,
}

impl RuleList {
    fn compile(
        category: RuleCategory,
        skip_tables: bool,
        table: &[(&'static str, &str)],
    ) -> Result<Self, regex::Error> {
        let patterns = table
            .iter()
            .map(|&(name, src)| {
                RegexBuilder::new(src)
                    .case_insensitive(true)
                    .build()
                    .map(|regex| Pattern { name, regex })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            category,
            skip_tables,
            patterns,
        })
    }

    pub fn first_match(&self, line: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.regex.is_match(line))
    }
}

#[derive(Debug)]
pub struct RuleTable {
    pub safety: RuleList,
    pub style: RuleList,
}

impl RuleTable {
    pub fn canonical() -> Result<Self, regex::Error> {
        Ok(Self {
            safety: RuleList::compile(RuleCategory::Safety, true, SAFETY_PATTERNS)?,
            style: RuleList::compile(RuleCategory::Style, false, STYLE_PATTERNS)?,
        })
    }
}

/// Strips leading bullet markup (`-`, `*`, spaces).
pub fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(['-', '*', ' '])
}

pub fn extract(content: &str, rules: &RuleList) -> Vec<String> {
    let mut out = Vec::new();
    for raw in content.split('\n') {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if rules.skip_tables && line.starts_with('|') {
            continue;
        }
        if let Some(p) = rules.first_match(line) {
            tracing::debug!(category = ?rules.category, pattern = p.name, line, "matched");
            out.push(strip_bullet(line).to_string());
        }
    }
    out
}

pub fn read_text(path: &Path) -> Result<String, ReciteError> {
    let bytes = std::fs::read(path).map_err(|source| ReciteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| ReciteError::Decode {
        path: path.to_path_buf(),
    })
}

/// Returns `(safety, style)` for one file. An unreadable file contributes no
/// rules.
pub fn extract_file(path: &Path, table: &RuleTable) -> (Vec<String>, Vec<String>) {
    match read_text(path) {
        Ok(content) => (
            extract(&content, &table.safety),
            extract(&content, &table.style),
        ),
        Err(e) => {
            tracing::warn!("{e}; skipping");
            (Vec::new(), Vec::new())
        }
    }
}
