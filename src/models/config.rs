use crate::utils::greeting::DEFAULT_TEMPLATE;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name, relative to the project root
pub const CONFIG_FILE: &str = "party.toml";

/// Default roster file name, relative to the project root
pub const DEFAULT_ROSTER_FILE: &str = "guests.toml";

// =============================================================================
// Party Configuration
// =============================================================================

/// Party configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyConfig {
    /// Roster file with the nice and not-nice guest lists
    #[serde(default = "default_roster")]
    pub roster: PathBuf,

    /// Greet only nice visitors unless overridden on the command line
    #[serde(default)]
    pub just_nice: bool,

    /// Greeting template, `{name}` is replaced by the visitor's full name
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_roster() -> PathBuf {
    PathBuf::from(DEFAULT_ROSTER_FILE)
}

fn default_greeting() -> String {
    DEFAULT_TEMPLATE.to_string()
}

impl Default for PartyConfig {
    fn default() -> Self {
        Self {
            roster: default_roster(),
            just_nice: false,
            greeting: default_greeting(),
        }
    }
}

impl PartyConfig {
    /// Load config from party.toml
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: PartyConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        Ok(config)
    }

    /// Save config to party.toml
    pub fn save(&self, project_root: &Path) -> anyhow::Result<()> {
        std::fs::create_dir_all(project_root)?;
        let config_path = project_root.join(CONFIG_FILE);

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        Ok(())
    }

    /// Roster path, with relative paths resolved against the project root
    pub fn roster_path(&self, project_root: &Path) -> PathBuf {
        if self.roster.is_absolute() {
            self.roster.clone()
        } else {
            project_root.join(&self.roster)
        }
    }
}
