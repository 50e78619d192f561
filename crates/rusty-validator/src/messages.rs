// File: src/messages.rs
// Purpose: Check name -> error message template table

use std::collections::BTreeMap;

use crate::rule::normalize_name;

/// Template used when a check has no message of its own
pub const FALLBACK_TEMPLATE: &str = "{field} is invalid.";

const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    ("required", "{field} can not be empty."),
    ("string", "{field} is not a string."),
    ("integer", "{field} is not an integer."),
    ("numeric", "{field} is not a numeric value."),
    ("boolean", "{field} is not a boolean."),
    ("array", "{field} is not an array."),
    ("email", "{field} is not a valid e-mail address."),
    ("ip", "{field} is not a valid IP address."),
    ("url", "{field} is not a valid url."),
    ("json", "{field} is not valid json."),
    ("date", "{field} is not a valid date."),
    ("datestring", "{field} does not match the date format {arg}."),
    ("max", "{field} is longer than {arg} characters."),
    ("min", "{field} is shorter than {arg} characters."),
    ("length", "{field} must be exactly {arg} characters."),
    ("regexp", "{field} does not match the required format."),
];

/// Error message templates keyed by check name.
///
/// Templates may reference `{field}` and `{arg}`; both are substituted
/// verbatim when a check fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    templates: BTreeMap<String, String>,
}

impl Messages {
    /// A table with no templates; every failure renders the fallback
    pub fn empty() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Sets the template for a check, replacing any previous one
    pub fn set(&mut self, check: &str, template: impl Into<String>) -> &mut Self {
        self.templates.insert(normalize_name(check), template.into());
        self
    }

    pub fn with(mut self, check: &str, template: impl Into<String>) -> Self {
        self.set(check, template);
        self
    }

    /// Overlays every template from `other` onto this table
    pub fn extend(&mut self, other: &Messages) {
        for (check, template) in &other.templates {
            self.templates.insert(check.clone(), template.clone());
        }
    }

    pub fn template(&self, check: &str) -> Option<&str> {
        self.templates.get(check).map(String::as_str)
    }

    /// Renders the message for a failed check
    pub fn render(&self, check: &str, field: &str, argument: Option<&str>) -> String {
        let template = self.template(check).unwrap_or(FALLBACK_TEMPLATE);
        let argument = argument.unwrap_or_default();

        let mut out = String::with_capacity(template.len() + field.len() + argument.len());
        let mut rest = template;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix("{field}") {
                out.push_str(field);
                rest = after;
            } else if let Some(after) = tail.strip_prefix("{arg}") {
                out.push_str(argument);
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }
        out.push_str(rest);
        out
    }
}

impl Default for Messages {
    /// English messages for the built-in checks
    fn default() -> Self {
        Self {
            templates: DEFAULT_TEMPLATES
                .iter()
                .map(|(check, template)| (check.to_string(), template.to_string()))
                .collect(),
        }
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Messages {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut messages = Self::empty();
        for (check, template) in iter {
            messages.set(check.as_ref(), template);
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_messages() {
        let messages = Messages::default();
        assert_eq!(
            messages.render("max", "name", Some("10")),
            "name is longer than 10 characters."
        );
        assert_eq!(
            messages.render("required", "email", None),
            "email can not be empty."
        );
    }

    #[test]
    fn test_fallback_template() {
        assert_eq!(
            Messages::default().render("postcode", "zip", None),
            "zip is invalid."
        );
    }

    #[test]
    fn test_override_is_case_insensitive() {
        let messages = Messages::default().with("Required", "{field} ist erforderlich");
        assert_eq!(messages.render("required", "name", None), "name ist erforderlich");
    }

    #[test]
    fn test_placeholders_are_substituted_once() {
        let messages = Messages::default();
        assert_eq!(
            messages.render("min", "x", Some("{field}")),
            "x is shorter than {field} characters."
        );
        assert_eq!(
            messages.render("max", "{arg}", Some("3")),
            "{arg} is longer than 3 characters."
        );
    }

    #[test]
    fn test_unknown_braces_are_kept() {
        let messages = Messages::empty().with("json", "{field} must be {\"a\": 1} style");
        assert_eq!(messages.render("json", "cfg", None), "cfg must be {\"a\": 1} style");
    }
}
