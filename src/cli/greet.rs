use crate::models::PartyConfig;
use crate::services::{ConsoleGreeter, PartyService, RosterLister};
use crate::Result;
use colored::Colorize;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Options for `party greet`
#[derive(Debug, Clone, Default)]
pub struct GreetOptions {
    /// Skip not-nice visitors (also enabled by `just_nice` in party.toml)
    pub just_nice: bool,
    /// Roster file overriding the configured one
    pub roster: Option<PathBuf>,
    /// Print who would be greeted without greeting anyone
    pub dry_run: bool,
}

pub fn run(options: &GreetOptions) -> Result<()> {
    let project_root = env::current_dir()?;
    let stdout = io::stdout();
    run_impl(&project_root, options, &mut stdout.lock())
}

/// Internal implementation that accepts project_root and the output sink for testability.
pub fn run_impl<W: Write>(project_root: &Path, options: &GreetOptions, out: &mut W) -> Result<()> {
    let config = PartyConfig::load(project_root)?;
    let roster_path = match &options.roster {
        Some(path) => project_root.join(path),
        None => config.roster_path(project_root),
    };
    let just_nice = options.just_nice || config.just_nice;

    if options.dry_run {
        let service = PartyService::new(RosterLister::new(&roster_path), ());
        let plan = service.greeting_plan(just_nice)?;
        if plan.is_empty() {
            println!("{}", "No visitors to greet.".yellow());
        }
        for (category, full_name) in plan {
            writeln!(out, "{} {} ({})", category.emoji(), full_name, category)?;
        }
        return Ok(());
    }

    println!(
        "{}",
        format!("🎉 Greeting visitors from {}...", roster_path.display()).cyan()
    );
    let greeter = ConsoleGreeter::new(&mut *out).with_template(config.greeting.as_str());
    let service = PartyService::new(RosterLister::new(&roster_path), greeter);
    service.greet_visitors(just_nice)?;

    println!("{}", "✅ Everybody greeted".green());
    Ok(())
}
