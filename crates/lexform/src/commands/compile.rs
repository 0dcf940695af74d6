//! Compile command - render the contract

use crate::context::open_engagement;
use anyhow::{bail, Result};
use colored::Colorize;
use lexform_core::{LexformError, OutputFormat};
use std::path::PathBuf;

/// Compile the engagement into `contract.<ext>`
///
/// The format is validated before anything is read from the engagement.
pub fn run(output: String, dir: Option<PathBuf>, verbose: bool) -> Result<()> {
    let format: OutputFormat = output.parse()?;
    let engagement = open_engagement(dir)?;

    if verbose {
        println!(
            "{} Compiling {} as {}",
            "→".cyan(),
            engagement.root().display(),
            format
        );
    }

    match engagement.compile(format) {
        Ok(path) => {
            println!("{} Wrote {}", "✓".green().bold(), path.display());
            Ok(())
        }
        Err(LexformError::UnresolvedPlaceholders { names }) => {
            eprintln!("{} Missing parameters:", "✗".red().bold());
            for name in &names {
                eprintln!("  - {}", name);
            }
            eprintln!(
                "\n{} Fill them in {} and compile again",
                "→".cyan(),
                engagement.params_path().display()
            );
            // The list above is the report; keep the final error line short
            bail!("compile aborted: {} missing parameter(s)", names.len())
        }
        Err(e) => Err(e.into()),
    }
}
