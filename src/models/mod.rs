pub mod category;
pub mod config;
pub mod visitor;

pub use category::Category;
pub use config::{PartyConfig, CONFIG_FILE, DEFAULT_ROSTER_FILE};
pub use visitor::Visitor;
