//! Scan command - list the placeholders of a template

use crate::output::print_json;
use anyhow::{Context, Result};
use colored::Colorize;
use lexform_core::{Config, Fingerprint, ScanResult, scan_template};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct ScanReport<'a> {
    template: Fingerprint,
    #[serde(flatten)]
    placeholders: &'a ScanResult,
}

/// Scan a template without creating an engagement
///
/// Placeholder syntax comes from a `lexform.toml` next to the template, if
/// there is one.
pub fn run(template: PathBuf, json: bool, verbose: bool) -> Result<()> {
    let bytes = std::fs::read(&template)
        .with_context(|| format!("Failed to read template {}", template.display()))?;
    let config = Config::load_or_default(config_dir(&template))?;
    let scan = scan_template(&bytes, &config.syntax)?;

    let report = ScanReport {
        template: Fingerprint::of(&bytes),
        placeholders: &scan,
    };

    if json {
        print_json(&report)?;
    } else {
        render_human(&template, &report, verbose);
    }
    Ok(())
}

fn config_dir(template: &Path) -> &Path {
    match template.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn render_human(path: &Path, report: &ScanReport<'_>, verbose: bool) {
    println!("{} {}", "→".cyan(), path.display());
    if verbose {
        println!("  template {}", report.template);
    }

    let scan = report.placeholders;
    if scan.is_empty() {
        println!("{} No placeholders found", "!".yellow().bold());
        return;
    }

    render_section("Variables", &scan.variables, |name| name.to_string());
    render_section("Exhibits", &scan.exhibits, |name| {
        format!(
            "{} (Exhibit {})",
            name,
            scan.exhibit_number(name).unwrap_or_default()
        )
    });
    render_section("Signatures", &scan.signatures, |name| name.to_string());
}

fn render_section(title: &str, names: &[String], label: impl Fn(&str) -> String) {
    if names.is_empty() {
        return;
    }
    println!("\n{} ({}):", title.bold(), names.len());
    for name in names {
        println!("  - {}", label(name));
    }
}
