use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use party::cli::greet::GreetOptions;
use party::{Category, Result};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "party")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Greets party visitors, nice ones first", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Greet nice visitors, then not-nice ones
    Greet {
        /// Greet only nice visitors
        #[arg(short, long)]
        just_nice: bool,

        /// Roster file (default: roster from party.toml)
        #[arg(short, long)]
        roster: Option<PathBuf>,

        /// Show who would be greeted without greeting anyone
        #[arg(long)]
        dry_run: bool,
    },

    /// List visitors of one category
    List {
        /// Category to list
        #[arg(value_enum)]
        category: Category,

        /// Roster file (default: roster from party.toml)
        #[arg(short, long)]
        roster: Option<PathBuf>,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Write party.toml and a sample guest roster
    Init {
        /// Overwrite an existing party.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Greet {
            just_nice,
            roster,
            dry_run,
        } => {
            party::cli::greet::run(&GreetOptions {
                just_nice,
                roster,
                dry_run,
            })?;
        }

        Commands::List {
            category,
            roster,
            json,
        } => {
            party::cli::list::run(category, roster, json)?;
        }

        Commands::Init { force } => {
            println!("{}", "🚀 Initializing party...".cyan());
            party::cli::init::run(force)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "party", &mut io::stdout());
        }
    }

    Ok(())
}
