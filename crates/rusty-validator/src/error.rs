// File: src/error.rs
// Purpose: Structural errors raised while dispatching rules

use thiserror::Error;

/// A problem with the rules themselves, as opposed to the data.
///
/// Data that fails a check ends up in the error map; a `RuleError` means
/// the run could not be completed at all.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("unknown rule `{rule}` on field `{field}`")]
    UnknownRule { field: String, rule: String },

    #[error("rule `{rule}` on field `{field}` requires an argument")]
    MissingArgument { field: String, rule: String },

    #[error("rule `{rule}` on field `{field}` has an invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        field: String,
        rule: String,
        argument: String,
        reason: String,
    },

    #[error("malformed pattern `{pattern}` on field `{field}`")]
    MalformedPattern {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl RuleError {
    /// Field whose rule failed to dispatch
    pub fn field(&self) -> &str {
        match self {
            RuleError::UnknownRule { field, .. }
            | RuleError::MissingArgument { field, .. }
            | RuleError::InvalidArgument { field, .. }
            | RuleError::MalformedPattern { field, .. } => field,
        }
    }
}
