// File: src/rule.rs
// Purpose: Rule-string parser ("required|max:10" -> ordered rules per field)

use std::fmt;

const RULE_SEPARATOR: char = '|';
const ARGUMENT_SEPARATOR: char = ':';

/// One `name` or `name:argument` token from a rule string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    name: String,
    argument: Option<String>,
}

impl Rule {
    pub fn new(name: &str, argument: Option<&str>) -> Self {
        Self {
            name: normalize_name(name),
            argument: argument.map(str::to_string),
        }
    }

    /// Parses a single token.
    ///
    /// Only the first colon separates the name from the argument; the
    /// argument is kept verbatim, colons and whitespace included. Returns
    /// `None` only for a blank token; `":5"` becomes a rule with an empty
    /// name, which no catalog resolves.
    pub fn parse(token: &str) -> Option<Self> {
        if token.trim().is_empty() {
            return None;
        }

        let (name, argument) = match token.split_once(ARGUMENT_SEPARATOR) {
            Some((name, argument)) => (name, Some(argument)),
            None => (token, None),
        };

        Some(Self::new(name, argument))
    }

    /// Catalog key, lowercased
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.argument {
            Some(argument) => write!(f, "{}{}{}", self.name, ARGUMENT_SEPARATOR, argument),
            None => f.write_str(&self.name),
        }
    }
}

/// Canonical catalog key for a check name
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Splits a full rule string into its ordered rules.
///
/// Blank tokens (`"required||email"`, a trailing `|`) are skipped, so an
/// empty string yields no rules.
pub fn parse_rule_string(rules: &str) -> Vec<Rule> {
    rules.split(RULE_SEPARATOR).filter_map(Rule::parse).collect()
}

/// Rules for a single field, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub field: String,
    pub rules: Vec<Rule>,
}

/// Parsed rule specification for a whole input map
///
/// Fields keep the order they were supplied in. Supplying the same field
/// twice replaces its rules in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    /// Parses a rule specification such as
    /// `[("email", "required|email"), ("name", "max:10")]`.
    pub fn parse<I, K, V>(spec: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut set = Self::default();
        for (field, rules) in spec {
            set.insert(field, parse_rule_string(rules.as_ref()));
        }
        set
    }

    /// Adds or replaces the rules of one field
    pub fn insert(&mut self, field: impl Into<String>, rules: Vec<Rule>) {
        let field = field.into();
        match self.fields.iter_mut().find(|entry| entry.field == field) {
            Some(entry) => entry.rules = rules,
            None => self.fields.push(FieldRules { field, rules }),
        }
    }

    pub fn get(&self, field: &str) -> Option<&[Rule]> {
        self.fields
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.rules.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldRules> {
        self.fields.iter()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total number of rules across all fields
    pub fn rule_count(&self) -> usize {
        self.fields.iter().map(|entry| entry.rules.len()).sum()
    }
}

impl<K: Into<String>, V: AsRef<str>> FromIterator<(K, V)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::parse(iter)
    }
}
