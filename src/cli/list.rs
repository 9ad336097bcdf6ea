use crate::models::{Category, PartyConfig};
use crate::services::{RosterLister, VisitorLister};
use crate::Result;
use colored::Colorize;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn run(category: Category, roster: Option<PathBuf>, json: bool) -> Result<()> {
    let project_root = env::current_dir()?;
    let stdout = io::stdout();
    run_impl(&project_root, category, roster.as_deref(), json, &mut stdout.lock())
}

/// Internal implementation that accepts project_root and the output sink for testability.
pub fn run_impl<W: Write>(
    project_root: &Path,
    category: Category,
    roster: Option<&Path>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let roster_path = match roster {
        Some(path) => project_root.join(path),
        None => PartyConfig::load(project_root)?.roster_path(project_root),
    };
    let visitors = RosterLister::new(&roster_path).list_visitors(category)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&visitors)?)?;
        return Ok(());
    }

    if visitors.is_empty() {
        writeln!(out, "{}", format!("No {} visitors.", category).yellow())?;
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        format!("{} {} visitors:", category.emoji(), category).green().bold()
    )?;
    for visitor in &visitors {
        writeln!(out, "   • {}", visitor.full_name())?;
    }
    writeln!(out, "\nTotal: {} visitor(s)", visitors.len())?;
    Ok(())
}
