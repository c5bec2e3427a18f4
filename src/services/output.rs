use crate::domain::constants::{BANNER_WIDTH, TITLE};
use crate::domain::models::{CanaryHealth, CanaryReport, JsonOut, Report};
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::io::{self, Write};

pub fn write_one<T: Serialize, W: Write>(
    w: &mut W,
    json: bool,
    data: T,
    row: impl Fn(&T) -> Result<String, fmt::Error>,
) -> anyhow::Result<()> {
    if json {
        writeln!(
            w,
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        )?;
    } else {
        w.write_all(row(&data)?.as_bytes())?;
    }
    w.flush()?;
    Ok(())
}

fn banner(out: &mut String) -> fmt::Result {
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))
}

fn numbered(out: &mut String, heading: &str, rules: &[String]) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "--- {heading} ---")?;
    for (i, rule) in rules.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, rule)?;
    }
    Ok(())
}

fn canary_section(out: &mut String, canary: &CanaryReport) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "--- CANARY CHECK ---")?;
    if let CanaryHealth::NotInstalled { install_hint } = &canary.health {
        writeln!(out, "  Canary: NOT INSTALLED")?;
        return writeln!(out, "  Install: {install_hint}");
    }
    writeln!(out, "  Installed: {}", canary.components.join(", "))?;
    match &canary.health {
        CanaryHealth::NoData => writeln!(out, "  Status: NO DATA (no checks recorded yet)"),
        CanaryHealth::Healthy => writeln!(out, "  Status: HEALTHY"),
        CanaryHealth::Degraded {
            failures,
            last_failure,
        } => {
            writeln!(out, "  Status: DEGRADED ({failures} failures)")?;
            writeln!(out, "  Last failure: {last_failure}")
        }
        CanaryHealth::NotInstalled { .. } => Ok(()),
    }
}

/// Fixed plain-text layout of a report.
pub fn render_text(report: &Report) -> Result<String, fmt::Error> {
    let mut out = String::new();
    banner(&mut out)?;
    writeln!(out, "{TITLE}")?;
    banner(&mut out)?;
    writeln!(out)?;

    writeln!(out, "Discovered {} instruction file(s)", report.files.len())?;
    for f in &report.files {
        writeln!(
            out,
            "[{}] {} -> {} safety, {} style rules",
            f.file.scope.as_str(),
            f.file.path.display(),
            f.safety.len(),
            f.style.len()
        )?;
    }

    numbered(&mut out, "SAFETY RULES", &report.safety)?;
    numbered(&mut out, "STYLE RULES", &report.style)?;

    if let Some(canary) = &report.canary {
        canary_section(&mut out, canary)?;
    }

    writeln!(out)?;
    banner(&mut out)?;
    Ok(out)
}

pub fn write_report<W: Write>(w: &mut W, json: bool, report: &Report) -> anyhow::Result<()> {
    write_one(w, json, report, |r| render_text(r))
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|io| io.kind() == io::ErrorKind::BrokenPipe)
}

/// A reader that closed stdout early (`recite | head`) is not an error.
pub fn print_report(json: bool, report: &Report) -> anyhow::Result<()> {
    match write_report(&mut io::stdout().lock(), json, report) {
        Err(e) if is_broken_pipe(&e) => {
            tracing::debug!("stdout closed early");
            Ok(())
        }
        other => other,
    }
}
