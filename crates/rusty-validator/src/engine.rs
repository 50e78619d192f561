// File: src/engine.rs
// Purpose: Dispatches parsed rules against input values and collects messages

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use tracing::{debug, trace, warn};

use crate::catalog::{Catalog, CheckContext};
use crate::error::RuleError;
use crate::messages::Messages;
use crate::rule::{Rule, RuleSet};
use crate::value::{InputSource, Value};

/// Field name -> message of the last rule that failed for it
pub type ErrorMap = BTreeMap<String, String>;

static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(Engine::default);

/// Value passed to checks for fields missing from the input
static ABSENT: Value = Value::Null;

/// A check catalog paired with the message table used to report failures.
///
/// An engine is immutable once built and can be shared across threads;
/// every call to [`Engine::validate`] owns its own error map.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    catalog: Catalog,
    messages: Messages,
}

impl Engine {
    pub fn new(catalog: Catalog, messages: Messages) -> Self {
        Self { catalog, messages }
    }

    /// Shared engine with the built-in catalog and English messages
    pub fn shared() -> &'static Engine {
        &DEFAULT_ENGINE
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Checks that every rule names a registered check and carries the
    /// arguments it needs, without looking at any values.
    ///
    /// Argument contents (a malformed pattern, a non-numeric bound) are
    /// only inspected when the rule runs.
    pub fn verify(&self, rules: &RuleSet) -> Result<(), RuleError> {
        for entry in rules.iter() {
            for rule in &entry.rules {
                self.catalog.resolve(&entry.field, rule)?;
            }
        }
        Ok(())
    }

    /// Runs every rule of every field, in declaration order.
    ///
    /// Fields absent from `input` are checked as [`Value::Null`]. A failing
    /// rule never stops the ones after it; when several rules of one field
    /// fail, the last failure's message is the one kept. A [`RuleError`]
    /// aborts the run and discards the partial result.
    pub fn validate<S>(&self, input: &S, rules: &RuleSet) -> Result<ErrorMap, RuleError>
    where
        S: InputSource + ?Sized,
    {
        debug!(
            fields = rules.len(),
            rules = rules.rule_count(),
            "validating input"
        );

        let mut errors = ErrorMap::new();
        for entry in rules.iter() {
            let value = input.field(&entry.field).unwrap_or(&ABSENT);

            for rule in &entry.rules {
                let passed = match self.dispatch(&entry.field, value, rule) {
                    Ok(passed) => passed,
                    Err(err) => {
                        warn!(field = %entry.field, rule = %rule, error = %err, "aborting validation");
                        return Err(err);
                    }
                };

                if !passed {
                    let message = self.messages.render(rule.name(), &entry.field, rule.argument());
                    debug!(field = %entry.field, rule = %rule, %message, "check failed");
                    errors.insert(entry.field.clone(), message);
                }
            }
        }

        debug!(failed = errors.len(), "validation finished");
        Ok(errors)
    }

    fn dispatch(&self, field: &str, value: &Value, rule: &Rule) -> Result<bool, RuleError> {
        let check = self.catalog.resolve(field, rule)?;
        trace!(field, rule = %rule, value = value.kind(), "dispatching check");

        check.call(&CheckContext {
            field,
            rule: rule.name(),
            value,
            argument: rule.argument(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Arity;
    use crate::value::Input;

    fn input(pairs: &[(&str, Value)]) -> Input {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_absent_field_is_checked_as_null() {
        let rules = RuleSet::parse([("name", "required")]);
        let errors = Engine::shared().validate(&Input::new(), &rules).unwrap();
        assert_eq!(errors["name"], "name can not be empty.");
    }

    #[test]
    fn test_later_failure_overwrites_earlier() {
        let rules = RuleSet::parse([("code", "min:5|integer")]);
        let errors = Engine::shared()
            .validate(&input(&[("code", Value::from("ab"))]), &rules)
            .unwrap();
        assert_eq!(errors["code"], "code is not an integer.");
    }

    #[test]
    fn test_later_pass_keeps_earlier_failure() {
        let rules = RuleSet::parse([("code", "integer|max:5")]);
        let errors = Engine::shared()
            .validate(&input(&[("code", Value::from("ab"))]), &rules)
            .unwrap();
        assert_eq!(errors["code"], "code is not an integer.");
    }

    #[test]
    fn test_structural_error_aborts() {
        let rules = RuleSet::parse([("a", "required"), ("b", "bogus")]);
        let err = Engine::shared().validate(&Input::new(), &rules).unwrap_err();
        assert!(matches!(err, RuleError::UnknownRule { ref field, .. } if field == "b"));
    }

    #[test]
    fn test_verify() {
        let engine = Engine::shared();
        assert!(engine.verify(&RuleSet::parse([("a", "required|max:3")])).is_ok());
        assert!(matches!(
            engine.verify(&RuleSet::parse([("a", "required|max")])),
            Err(RuleError::MissingArgument { .. })
        ));
        assert!(matches!(
            engine.verify(&RuleSet::parse([("a", "Nope")])),
            Err(RuleError::UnknownRule { .. })
        ));
    }

    #[test]
    fn test_custom_check_and_message() {
        let catalog = Catalog::default().with("starts", Arity::RequiresArgument, |ctx| {
            let prefix = ctx.required_argument()?;
            Ok(ctx.text().is_some_and(|text| text.starts_with(prefix)))
        });
        let messages = Messages::default().with("starts", "{field} must start with {arg}");
        let engine = Engine::new(catalog, messages);

        let rules = RuleSet::parse([("sku", "starts:SKU-")]);
        let errors = engine
            .validate(&input(&[("sku", Value::from("ABC-1"))]), &rules)
            .unwrap();
        assert_eq!(errors["sku"], "sku must start with SKU-");

        let errors = engine
            .validate(&input(&[("sku", Value::from("SKU-1"))]), &rules)
            .unwrap();
        assert!(errors.is_empty());
    }
}
