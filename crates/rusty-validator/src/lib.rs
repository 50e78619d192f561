//! # rusty-validator
//!
//! Declarative validation of named input values. Each field gets a rule
//! string such as `"required|max:10"`; the rules run in order and every
//! failing field ends up with one human-readable message.
//!
//! ```rust
//! use rusty_validator::{input_from_json, Validator};
//! use serde_json::json;
//!
//! let input = input_from_json(json!({ "name": "Panda", "email": "not-an-email" })).unwrap();
//! let validator = Validator::new(&input, [
//!     ("name", "required|regexp:^[a-zA-Z\\s]*$"),
//!     ("email", "required|email"),
//! ])
//! .unwrap();
//!
//! assert_eq!(validator.error("name"), None);
//! assert_eq!(validator.error("email"), Some("email is not a valid e-mail address."));
//! ```
//!
//! ## Architecture
//!
//! - [`rule`] parses rule strings into [`RuleSet`]s
//! - [`Catalog`] maps check names to predicates; the built-in catalog is
//!   shared and read-only, custom catalogs are built by registration
//! - [`Messages`] maps check names to message templates
//! - [`Engine`] dispatches rules and collects the [`ErrorMap`]
//! - [`Validator`] is the one-shot, eager front end
//!
//! The predicates themselves live in `rusty-validator-checks`.

mod builtin;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod messages;
pub mod rule;
pub mod validator;
pub mod value;

pub use catalog::{Arity, Catalog, Check, CheckContext};
pub use config::ValidatorConfig;
pub use engine::{Engine, ErrorMap};
pub use error::RuleError;
pub use messages::Messages;
pub use rule::{FieldRules, Rule, RuleSet};
pub use validator::Validator;
pub use value::{input_from_json, Input, InputSource, Value};
