//! Service layer for party
//!
//! The party service itself plus the collaborators it is wired with: the
//! visitor lister and greeter traits, and their roster-file and console
//! implementations used by the CLI.

pub mod greeter;
pub mod lister;
pub mod party_service;
pub mod roster;

// Re-export commonly used types
pub use greeter::{ConsoleGreeter, Greeter};
pub use lister::{LookupError, VisitorLister};
pub use party_service::{PartyError, PartyService};
pub use roster::{Roster, RosterLister};
