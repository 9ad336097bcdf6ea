//! Recording test doubles
//!
//! Every collaborator call is appended to one shared log, so tests can
//! assert the exact interleaving of lookups and greetings.

#![allow(dead_code)]

use party::{Category, Greeter, LookupError, Visitor, VisitorLister};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One collaborator call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(Category),
    Hello(String),
}

pub fn list(category: Category) -> Call {
    Call::List(category)
}

pub fn hello(name: &str) -> Call {
    Call::Hello(name.to_string())
}

/// Ordered log shared by the doubles of one test
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }
}

/// Lister answering from canned responses
///
/// Looking up a category without a response panics.
pub struct RecordingLister {
    log: CallLog,
    responses: HashMap<Category, Result<Vec<Visitor>, LookupError>>,
}

impl RecordingLister {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            responses: HashMap::new(),
        }
    }

    pub fn returning(mut self, category: Category, visitors: Vec<Visitor>) -> Self {
        self.responses.insert(category, Ok(visitors));
        self
    }

    pub fn failing(mut self, category: Category, message: &str) -> Self {
        self.responses
            .insert(category, Err(LookupError::new(message)));
        self
    }
}

impl VisitorLister for RecordingLister {
    fn list_visitors(&self, category: Category) -> Result<Vec<Visitor>, LookupError> {
        self.log.push(Call::List(category));
        self.responses
            .get(&category)
            .cloned()
            .unwrap_or_else(|| panic!("unexpected list_visitors({})", category))
    }
}

/// Greeter that only records
pub struct RecordingGreeter {
    log: CallLog,
}

impl RecordingGreeter {
    pub fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl Greeter for RecordingGreeter {
    fn hello(&self, full_name: &str) {
        self.log.push(Call::Hello(full_name.to_string()));
    }
}

pub fn visitors(names: &[(&str, &str)]) -> Vec<Visitor> {
    names
        .iter()
        .map(|(name, surname)| Visitor::new(*name, *surname))
        .collect()
}
