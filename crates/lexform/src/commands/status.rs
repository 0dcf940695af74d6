//! Status command - show engagement health

use crate::context::open_engagement;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use lexform_core::{EngagementStatus, LedgerStatus};
use std::path::PathBuf;

/// Show engagement status
///
/// # Exit Code
///
/// Exits 0 whenever the engagement can be read. Mismatches and missing
/// values are reported in the output, not via exit code.
pub fn run(dir: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
    let engagement = open_engagement(dir)?;
    let status = engagement.status()?;

    if json {
        print_json(&status)?;
    } else {
        render_human(&status, verbose);
    }
    Ok(())
}

fn render_human(status: &EngagementStatus, verbose: bool) {
    println!("{} {}", "→".cyan(), status.root.display());

    render_template(status, verbose);
    render_parameters(&status.unresolved);
    render_ledger(&status.ledger, status.revisions);

    println!();
    if status.is_ready() {
        println!("{} Ready to compile", "✓".green().bold());
    } else {
        println!("{} Not ready to compile", "✗".red().bold());
    }
}

fn render_template(status: &EngagementStatus, verbose: bool) {
    if status.template_matches {
        println!("{} template matches params.toml", "✓".green());
    } else {
        println!("{} template changed since params.toml was generated", "✗".red());
        println!("  - recorded: {}", status.recorded_template);
        println!("  - actual:   {}", status.template);
        return;
    }
    if verbose {
        println!("  - {}", status.template);
    }
}

fn render_parameters(unresolved: &[String]) {
    if unresolved.is_empty() {
        println!("{} all parameters filled", "✓".green());
        return;
    }
    println!("{} {} missing parameter(s)", "✗".red(), unresolved.len());
    for name in unresolved {
        println!("  - {}", name);
    }
}

fn render_ledger(ledger: &LedgerStatus, revisions: usize) {
    match ledger {
        LedgerStatus::Empty => {
            println!("{} no revisions recorded", "!".yellow());
        }
        LedgerStatus::Current {
            fingerprint,
            recorded_at,
        } => {
            println!(
                "{} {} revision(s), latest {} matches",
                "✓".green(),
                revisions,
                recorded_at.to_rfc3339()
            );
            println!("  - {}", fingerprint);
        }
        LedgerStatus::Diverged { recorded, computed } => {
            println!(
                "{} {} revision(s), files changed since the latest",
                "!".yellow(),
                revisions
            );
            println!("  - recorded: {}", recorded);
            println!("  - computed: {}", computed);
        }
    }
}
