//! Party service - greets visitors, nice ones first

use super::greeter::Greeter;
use super::lister::{LookupError, VisitorLister};
use crate::models::Category;

/// Errors returned by [`PartyService`]
#[derive(Debug, thiserror::Error)]
pub enum PartyError {
    #[error("failed to list {category} visitors: {source}")]
    Lookup {
        category: Category,
        #[source]
        source: LookupError,
    },
}

impl PartyError {
    /// Category whose lookup failed
    pub fn category(&self) -> Category {
        match self {
            PartyError::Lookup { category, .. } => *category,
        }
    }
}

/// Greets party visitors through injected collaborators
///
/// Every visitor list is resolved before the first greeting, so a lookup
/// failure in any category means nobody is greeted.
pub struct PartyService<L, G> {
    visitor_lister: L,
    greeter: G,
}

impl<L, G> PartyService<L, G> {
    pub fn new(visitor_lister: L, greeter: G) -> Self {
        Self {
            visitor_lister,
            greeter,
        }
    }

    pub fn lister(&self) -> &L {
        &self.visitor_lister
    }

    pub fn greeter(&self) -> &G {
        &self.greeter
    }

    /// Take the collaborators back
    pub fn into_parts(self) -> (L, G) {
        (self.visitor_lister, self.greeter)
    }
}

impl<L: VisitorLister, G> PartyService<L, G> {
    /// Resolve who would be greeted, in greeting order
    ///
    /// Nice visitors are listed first; not-nice visitors follow unless
    /// `just_nice` is set, in which case they are never looked up.
    ///
    /// # Errors
    /// Returns [`PartyError::Lookup`] for the first category that fails.
    pub fn greeting_plan(&self, just_nice: bool) -> Result<Vec<(Category, String)>, PartyError> {
        let categories: &[Category] = if just_nice {
            &[Category::Nice]
        } else {
            &Category::ALL
        };

        let mut plan = Vec::new();
        for &category in categories {
            let visitors = self
                .visitor_lister
                .list_visitors(category)
                .map_err(|source| PartyError::Lookup { category, source })?;
            plan.extend(visitors.iter().map(|v| (category, v.full_name())));
        }
        Ok(plan)
    }
}

impl<L: VisitorLister, G: Greeter> PartyService<L, G> {
    /// Greet nice visitors, then not-nice ones unless `just_nice` is set
    ///
    /// # Errors
    /// Returns [`PartyError::Lookup`] if any list cannot be produced; no
    /// greeting happens in that case.
    pub fn greet_visitors(&self, just_nice: bool) -> Result<(), PartyError> {
        for (_, full_name) in self.greeting_plan(just_nice)? {
            self.greeter.hello(&full_name);
        }
        Ok(())
    }
}
