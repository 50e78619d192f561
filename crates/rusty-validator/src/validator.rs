// File: src/validator.rs
// Purpose: Eager, one-shot validation of an input map against a rule specification

use crate::engine::{Engine, ErrorMap};
use crate::error::RuleError;
use crate::rule::RuleSet;
use crate::value::InputSource;

/// Result of validating one input map.
///
/// Validation happens in the constructor; afterwards only the error map is
/// kept. A field without an entry passed all of its rules.
#[derive(Debug, Clone)]
pub struct Validator {
    rules: RuleSet,
    errors: ErrorMap,
}

impl Validator {
    /// Validates `input` with the shared built-in engine.
    ///
    /// ```
    /// use rusty_validator::{Input, Validator, Value};
    ///
    /// let mut input = Input::new();
    /// input.insert("email".to_string(), Value::from("not-an-email"));
    ///
    /// let validator = Validator::new(&input, [("email", "required|email")]).unwrap();
    /// assert_eq!(validator.error("email"), Some("email is not a valid e-mail address."));
    /// assert_eq!(validator.error("name"), None);
    /// ```
    pub fn new<S, I, K, V>(input: &S, spec: I) -> Result<Self, RuleError>
    where
        S: InputSource + ?Sized,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        Self::with_engine(Engine::shared(), input, spec)
    }

    /// Validates `input` with a custom engine
    pub fn with_engine<S, I, K, V>(engine: &Engine, input: &S, spec: I) -> Result<Self, RuleError>
    where
        S: InputSource + ?Sized,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        Self::from_rule_set(engine, input, RuleSet::parse(spec))
    }

    /// Validates `input` against rules that were parsed up front
    pub fn from_rule_set<S>(engine: &Engine, input: &S, rules: RuleSet) -> Result<Self, RuleError>
    where
        S: InputSource + ?Sized,
    {
        let errors = engine.validate(input, &rules)?;
        Ok(Self { rules, errors })
    }

    /// All error messages by field
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Error message for one field, `None` if it passed or was never checked
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.is_valid()
    }

    /// The parsed rules this input was checked against
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Input, Value};

    #[test]
    fn test_valid_input() {
        let mut input = Input::new();
        input.insert("name".to_string(), Value::from("John"));

        let validator = Validator::new(&input, [("name", "required|string|max:10")]).unwrap();
        assert!(validator.is_valid());
        assert!(!validator.has_errors());
        assert_eq!(validator.rules().rule_count(), 3);
    }

    #[test]
    fn test_error_lookup_for_unknown_field() {
        let validator = Validator::new(&Input::new(), [("name", "required")]).unwrap();
        assert!(validator.has_error("name"));
        assert!(!validator.has_error("nope"));
        assert_eq!(validator.error("nope"), None);
    }

    #[test]
    fn test_into_errors() {
        let validator = Validator::new(&Input::new(), [("a", "required"), ("b", "")]).unwrap();
        let errors = validator.into_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("a"));
    }
}
