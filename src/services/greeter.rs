use crate::utils::greeting::{render, DEFAULT_TEMPLATE};
use colored::Colorize;
use std::cell::RefCell;
use std::io::{self, Write};

/// Receiver of greetings
#[cfg_attr(test, mockall::automock)]
pub trait Greeter {
    /// Greet one visitor by full name
    fn hello(&self, full_name: &str);
}

impl<T: Greeter + ?Sized> Greeter for &T {
    fn hello(&self, full_name: &str) {
        (**self).hello(full_name)
    }
}

impl<T: Greeter + ?Sized> Greeter for Box<T> {
    fn hello(&self, full_name: &str) {
        (**self).hello(full_name)
    }
}

/// Greeter that writes one rendered line per visitor
pub struct ConsoleGreeter<W: Write = io::Stdout> {
    writer: RefCell<W>,
    template: String,
}

impl ConsoleGreeter<io::Stdout> {
    /// Greeter printing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleGreeter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Use a custom template; `{name}` is replaced by the full name
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Consume the greeter and return its writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write> Greeter for ConsoleGreeter<W> {
    fn hello(&self, full_name: &str) {
        let line = render(&self.template, full_name);
        let mut writer = self.writer.borrow_mut();
        // Greeter has no failure channel; a broken sink only warns
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            eprintln!(
                "{}",
                format!("Warning: Failed to greet {}: {}", full_name, e).yellow()
            );
        }
    }
}
