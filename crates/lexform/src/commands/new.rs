//! New command - create an engagement from a template

use anyhow::Result;
use colored::Colorize;
use lexform_core::Engagement;
use std::path::PathBuf;

/// Create a new engagement
///
/// # Arguments
///
/// * `dir` - Engagement directory (created if missing)
/// * `template` - Template file to copy and scan
/// * `verbose` - Enable verbose output if true
pub fn run(dir: PathBuf, template: PathBuf, verbose: bool) -> Result<()> {
    if verbose {
        println!(
            "{} Creating engagement in {} from {}",
            "→".cyan(),
            dir.display(),
            template.display()
        );
    }

    let engagement = Engagement::create(&dir, &template)?;

    println!(
        "{} Created engagement at {}",
        "✓".green().bold(),
        engagement.root().display()
    );

    println!("\n{} Next steps:", "→".cyan());
    println!("  1. Fill in {}", engagement.params_path().display());
    println!("  2. lexform compile --dir {}", dir.display());

    Ok(())
}
