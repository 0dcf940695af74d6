//! Revise command - append to the revision ledger

use crate::context::open_engagement;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

pub fn run(dir: Option<PathBuf>, verbose: bool) -> Result<()> {
    let engagement = open_engagement(dir)?;

    if verbose {
        println!(
            "{} Appending to {}",
            "→".cyan(),
            engagement.ledger().path().display()
        );
    }

    let revision = engagement.revise()?;

    println!(
        "{} Recorded revision {}",
        "✓".green().bold(),
        revision.fingerprint
    );
    if verbose {
        print!("  {}", revision.entry);
    }

    Ok(())
}
