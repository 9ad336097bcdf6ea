use serde::{Deserialize, Serialize};

/// A party visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
    /// Given name
    pub name: String,

    /// Family name
    #[serde(default)]
    pub surname: String,
}

impl Visitor {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
        }
    }

    /// Name passed to the greeter: given name and surname joined by one space.
    ///
    /// An empty part is dropped, so no stray space is produced.
    pub fn full_name(&self) -> String {
        match (self.name.is_empty(), self.surname.is_empty()) {
            (_, true) => self.name.clone(),
            (true, false) => self.surname.clone(),
            (false, false) => format!("{} {}", self.name, self.surname),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(Visitor::new("Peter", "Parker").full_name(), "Peter Parker");
        assert_eq!(Visitor::new("Helo", "Parker").full_name(), "Helo Parker");
    }

    #[test]
    fn test_full_name_missing_parts() {
        assert_eq!(Visitor::new("Peter", "").full_name(), "Peter");
        assert_eq!(Visitor::new("", "Parker").full_name(), "Parker");
        assert_eq!(Visitor::new("", "").full_name(), "");
    }

    #[test]
    fn test_surname_defaults_when_absent() {
        let visitor: Visitor = toml::from_str("name = \"Buka\"").unwrap();
        assert_eq!(visitor, Visitor::new("Buka", ""));
        assert_eq!(visitor.full_name(), "Buka");
    }
}
