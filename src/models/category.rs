use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visitor category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Guests greeted first
    Nice,
    /// Guests greeted after every nice guest
    NotNice,
}

impl Category {
    /// Every category, in greeting order
    pub const ALL: [Category; 2] = [Category::Nice, Category::NotNice];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Nice => "nice",
            Category::NotNice => "not-nice",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Nice => "😇",
            Category::NotNice => "😈",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nice" => Ok(Category::Nice),
            "not-nice" | "not_nice" | "notnice" => Ok(Category::NotNice),
            other => anyhow::bail!(
                "Invalid category: '{}'. Supported categories: nice, not-nice",
                other
            ),
        }
    }
}
