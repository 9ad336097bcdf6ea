use crate::models::{PartyConfig, CONFIG_FILE};
use crate::services::Roster;
use crate::Result;
use colored::Colorize;
use std::env;
use std::path::Path;

pub fn run(force: bool) -> Result<()> {
    let project_root = env::current_dir()?;
    run_impl(&project_root, force)?;
    Ok(())
}

/// Internal implementation that accepts project_root for testability.
/// Returns false when an existing setup was left untouched.
pub fn run_impl(project_root: &Path, force: bool) -> Result<bool> {
    let config_path = project_root.join(CONFIG_FILE);
    if config_path.exists() && !force {
        println!("{}", "⚠️  Party is already initialized".yellow());
        println!("   Run with --force to overwrite {}", CONFIG_FILE);
        return Ok(false);
    }

    // Keep an existing config's roster location when re-initializing
    let config = if config_path.exists() {
        PartyConfig::load(project_root)?
    } else {
        PartyConfig::default()
    };
    config.save(project_root)?;
    println!("   ✓ {}", CONFIG_FILE);

    let roster_path = config.roster_path(project_root);
    if roster_path.exists() {
        println!("   • {} kept", roster_path.display());
    } else {
        Roster::sample().save(&roster_path)?;
        println!("   ✓ {}", roster_path.display());
    }

    println!("{}", "✅ Party initialized! Run 'party greet'.".green().bold());
    Ok(true)
}
