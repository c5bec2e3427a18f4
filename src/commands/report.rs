use crate::cli::Cli;
use crate::domain::models::{FileRules, Report};
use crate::services::aggregate::aggregate;
use crate::services::canary;
use crate::services::config::Config;
use crate::services::locator::locate;
use crate::services::output::print_report;
use crate::services::rules::{extract_file, RuleTable};
use std::path::Path;

/// Runs discovery, extraction and (optionally) the canary check.
pub fn build_report(
    home: Option<&Path>,
    cwd: &Path,
    config: &Config,
    check_canary: bool,
) -> anyhow::Result<Report> {
    let table = RuleTable::canonical()?;

    let files: Vec<FileRules> = locate(home, cwd, &config.discovery)
        .into_iter()
        .map(|file| {
            let (safety, style) = extract_file(&file.path, &table);
            tracing::debug!(
                path = %file.path.display(),
                safety = safety.len(),
                style = style.len(),
                "extracted"
            );
            FileRules {
                file,
                safety,
                style,
            }
        })
        .collect();

    let (safety, style) = aggregate(&files);
    let canary = check_canary.then(|| canary::report(home, &config.canary));

    Ok(Report {
        files,
        safety,
        style,
        canary,
    })
}

pub fn handle_report(
    cli: &Cli,
    home: Option<&Path>,
    cwd: &Path,
    config: &Config,
) -> anyhow::Result<()> {
    let report = build_report(home, cwd, config, cli.check_canary)?;
    print_report(cli.json, &report)
}
