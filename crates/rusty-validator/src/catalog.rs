// File: src/catalog.rs
// Purpose: Registry mapping check names to predicates

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::builtin;
use crate::error::RuleError;
use crate::rule::{normalize_name, Rule};
use crate::value::Value;

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let mut catalog = Catalog::empty();
    builtin::register_all(&mut catalog);
    catalog
});

/// Whether a check needs the `:argument` part of its rule token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    NoArgument,
    RequiresArgument,
}

/// Everything a predicate gets to look at for one rule invocation
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub field: &'a str,
    pub rule: &'a str,
    pub value: &'a Value,
    pub argument: Option<&'a str>,
}

impl<'a> CheckContext<'a> {
    /// Textual form of the value, see [`Value::as_text`]
    pub fn text(&self) -> Option<Cow<'a, str>> {
        self.value.as_text()
    }

    /// The rule argument, or `MissingArgument` when the token was bare
    pub fn required_argument(&self) -> Result<&'a str, RuleError> {
        self.argument.ok_or_else(|| RuleError::MissingArgument {
            field: self.field.to_string(),
            rule: self.rule.to_string(),
        })
    }

    /// Shorthand for an `InvalidArgument` error on this rule
    pub fn invalid_argument(&self, reason: impl Into<String>) -> RuleError {
        RuleError::InvalidArgument {
            field: self.field.to_string(),
            rule: self.rule.to_string(),
            argument: self.argument.unwrap_or_default().to_string(),
            reason: reason.into(),
        }
    }
}

type Predicate = dyn Fn(&CheckContext<'_>) -> Result<bool, RuleError> + Send + Sync;

/// A registered predicate and its arity
#[derive(Clone)]
pub struct Check {
    arity: Arity,
    predicate: Arc<Predicate>,
}

impl Check {
    pub fn new<F>(arity: Arity, predicate: F) -> Self
    where
        F: Fn(&CheckContext<'_>) -> Result<bool, RuleError> + Send + Sync + 'static,
    {
        Self {
            arity,
            predicate: Arc::new(predicate),
        }
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Runs the predicate. `Ok(false)` is an ordinary validation failure.
    pub fn call(&self, ctx: &CheckContext<'_>) -> Result<bool, RuleError> {
        (self.predicate)(ctx)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Name-keyed registry of checks.
///
/// The built-in catalog is shared process-wide and never mutated. To add or
/// override checks, clone it (or start from [`Catalog::empty`]) and register
/// on the copy before handing it to an [`Engine`](crate::Engine).
#[derive(Debug, Clone)]
pub struct Catalog {
    checks: BTreeMap<String, Check>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self {
            checks: BTreeMap::new(),
        }
    }

    /// The shared built-in catalog
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Registers `predicate` under `name`, replacing any existing check
    pub fn register<F>(&mut self, name: &str, arity: Arity, predicate: F) -> &mut Self
    where
        F: Fn(&CheckContext<'_>) -> Result<bool, RuleError> + Send + Sync + 'static,
    {
        self.insert(name, Check::new(arity, predicate))
    }

    pub fn insert(&mut self, name: &str, check: Check) -> &mut Self {
        let name = normalize_name(name);
        tracing::trace!(check = %name, "registering check");
        self.checks.insert(name, check);
        self
    }

    /// Builder-style [`Catalog::register`]
    pub fn with<F>(mut self, name: &str, arity: Arity, predicate: F) -> Self
    where
        F: Fn(&CheckContext<'_>) -> Result<bool, RuleError> + Send + Sync + 'static,
    {
        self.register(name, arity, predicate);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Check> {
        self.checks.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.checks.contains_key(&normalize_name(name))
    }

    /// Registered check names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checks.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Looks up the check behind `rule`, enforcing its arity
    pub fn resolve(&self, field: &str, rule: &Rule) -> Result<&Check, RuleError> {
        let check = self.get(rule.name()).ok_or_else(|| RuleError::UnknownRule {
            field: field.to_string(),
            rule: if rule.name().is_empty() {
                rule.to_string()
            } else {
                rule.name().to_string()
            },
        })?;

        if check.arity() == Arity::RequiresArgument && rule.argument().is_none() {
            return Err(RuleError::MissingArgument {
                field: field.to_string(),
                rule: rule.name().to_string(),
            });
        }

        Ok(check)
    }
}

impl Default for Catalog {
    /// A private copy of the built-in catalog, ready for registration
    fn default() -> Self {
        Catalog::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let names: Vec<&str> = Catalog::builtin().names().collect();
        assert_eq!(
            names,
            vec![
                "array", "boolean", "date", "datestring", "email", "integer", "ip", "json",
                "length", "max", "min", "numeric", "regexp", "required", "string", "url",
            ]
        );
    }

    #[test]
    fn test_resolve_unknown_rule() {
        let err = Catalog::builtin()
            .resolve("name", &Rule::new("bogus", None))
            .unwrap_err();
        assert!(matches!(err, RuleError::UnknownRule { ref rule, .. } if rule == "bogus"));
    }

    #[test]
    fn test_resolve_nameless_rule() {
        let err = Catalog::builtin()
            .resolve("code", &Rule::new("", Some("5")))
            .unwrap_err();
        assert!(matches!(err, RuleError::UnknownRule { ref rule, .. } if rule == ":5"));
    }

    #[test]
    fn test_resolve_missing_argument() {
        let err = Catalog::builtin()
            .resolve("name", &Rule::new("max", None))
            .unwrap_err();
        assert!(matches!(err, RuleError::MissingArgument { .. }));
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn test_register_does_not_touch_builtin() {
        let catalog = Catalog::default().with("even", Arity::NoArgument, |ctx| {
            Ok(matches!(ctx.value, Value::Integer(n) if n % 2 == 0))
        });

        assert!(catalog.contains("Even"));
        assert!(!Catalog::builtin().contains("even"));
        assert_eq!(catalog.len(), Catalog::builtin().len() + 1);
    }

    #[test]
    fn test_register_overrides_existing() {
        let catalog = Catalog::default().with("required", Arity::NoArgument, |_| Ok(true));
        let check = catalog.resolve("x", &Rule::new("required", None)).unwrap();
        let ctx = CheckContext {
            field: "x",
            rule: "required",
            value: &Value::Null,
            argument: None,
        };
        assert!(check.call(&ctx).unwrap());
    }
}
