use crate::domain::models::FileRules;
use std::collections::HashSet;

/// Removes repeated lines, keeping the first occurrence. Comparison is exact.
pub fn dedupe_rules(rules: &mut Vec<String>) {
    let mut seen = HashSet::new();
    rules.retain(|r| seen.insert(r.clone()));
}

/// Concatenates per-file results in discovery order and dedupes each
/// category independently. Returns `(safety, style)`.
pub fn aggregate(per_file: &[FileRules]) -> (Vec<String>, Vec<String>) {
    let mut safety: Vec<String> = per_file.iter().flat_map(|f| f.safety.clone()).collect();
    let mut style: Vec<String> = per_file.iter().flat_map(|f| f.style.clone()).collect();
    let (raw_safety, raw_style) = (safety.len(), style.len());
    dedupe_rules(&mut safety);
    dedupe_rules(&mut style);
    tracing::debug!(
        safety = safety.len(),
        safety_dropped = raw_safety - safety.len(),
        style = style.len(),
        style_dropped = raw_style - style.len(),
        "aggregated rules"
    );
    (safety, style)
}
