// Party - greets nice visitors first, then the rest
// Visitor lists and greetings come from injected collaborators

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{Category, PartyConfig, Visitor};
pub use services::{
    ConsoleGreeter, Greeter, LookupError, PartyError, PartyService, Roster, RosterLister,
    VisitorLister,
};
