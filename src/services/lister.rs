use crate::models::{Category, Visitor};

/// Failure to produce a category's visitor list.
///
/// The message is opaque to the service and reaches the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LookupError {
    message: String,
}

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Source of visitors for a category
///
/// Implementations return visitors in the order they should be greeted.
#[cfg_attr(test, mockall::automock)]
pub trait VisitorLister {
    /// List every visitor in `category`
    ///
    /// # Errors
    /// Returns a [`LookupError`] if the list cannot be produced.
    fn list_visitors(&self, category: Category) -> Result<Vec<Visitor>, LookupError>;
}

impl<T: VisitorLister + ?Sized> VisitorLister for &T {
    fn list_visitors(&self, category: Category) -> Result<Vec<Visitor>, LookupError> {
        (**self).list_visitors(category)
    }
}

impl<T: VisitorLister + ?Sized> VisitorLister for Box<T> {
    fn list_visitors(&self, category: Category) -> Result<Vec<Visitor>, LookupError> {
        (**self).list_visitors(category)
    }
}
