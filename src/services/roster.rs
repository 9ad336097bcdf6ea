//! Roster service - visitor lists kept in a TOML file
//!
//! ```toml
//! [[nice]]
//! name = "Peter"
//! surname = "Parker"
//!
//! [[not_nice]]
//! name = "Helo"
//! surname = "Parker"
//! ```

use super::lister::{LookupError, VisitorLister};
use crate::models::{Category, Visitor};
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Guest lists for every category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub nice: Vec<Visitor>,

    #[serde(default)]
    pub not_nice: Vec<Visitor>,
}

impl Roster {
    /// Read a roster file
    ///
    /// # Errors
    /// Missing, unreadable or malformed files are reported as [`LookupError`].
    pub fn load(path: &Path) -> std::result::Result<Self, LookupError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LookupError::new(format!("Failed to read roster {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            LookupError::new(format!("Failed to parse roster {}: {}", path.display(), e))
        })
    }

    /// Write the roster as pretty TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write roster {}", path.display()))?;
        Ok(())
    }

    pub fn visitors(&self, category: Category) -> &[Visitor] {
        match category {
            Category::Nice => &self.nice,
            Category::NotNice => &self.not_nice,
        }
    }

    /// Roster written by `party init`
    pub fn sample() -> Self {
        Self {
            nice: vec![Visitor::new("Peter", "Parker")],
            not_nice: vec![Visitor::new("Helo", "Parker")],
        }
    }
}

impl VisitorLister for Roster {
    fn list_visitors(&self, category: Category) -> std::result::Result<Vec<Visitor>, LookupError> {
        Ok(self.visitors(category).to_vec())
    }
}

/// Lister reading a roster file on every lookup
#[derive(Debug, Clone)]
pub struct RosterLister {
    path: PathBuf,
}

impl RosterLister {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VisitorLister for RosterLister {
    fn list_visitors(&self, category: Category) -> std::result::Result<Vec<Visitor>, LookupError> {
        Roster::load(&self.path)?.list_visitors(category)
    }
}
