// File: src/builtin.rs
// Purpose: Built-in checks, adapting rusty-validator-checks to `Value`

use rusty_validator_checks::{
    compile_pattern, is_blank, is_exact_length, is_integer_literal, is_max_length, is_min_length,
    is_numeric_literal, is_valid_email, is_valid_ip, is_valid_url, is_well_formed_json,
    matches_date_format, parse_bound,
};

use crate::catalog::{Arity, Catalog, CheckContext};
use crate::error::RuleError;
use crate::value::Value;

pub(crate) fn register_all(catalog: &mut Catalog) {
    use Arity::{NoArgument, RequiresArgument};

    catalog
        .register("required", NoArgument, required)
        .register("string", NoArgument, string)
        .register("integer", NoArgument, integer)
        .register("numeric", NoArgument, numeric)
        .register("boolean", NoArgument, boolean)
        .register("array", NoArgument, array)
        .register("email", NoArgument, |ctx| Ok(text_matches(ctx, is_valid_email)))
        .register("ip", NoArgument, |ctx| Ok(text_matches(ctx, is_valid_ip)))
        .register("url", NoArgument, |ctx| Ok(text_matches(ctx, is_valid_url)))
        .register("json", NoArgument, |ctx| Ok(text_matches(ctx, is_well_formed_json)))
        .register("date", NoArgument, date)
        .register("datestring", RequiresArgument, date_string)
        .register("max", RequiresArgument, |ctx| length_bound(ctx, is_max_length))
        .register("min", RequiresArgument, |ctx| length_bound(ctx, is_min_length))
        .register("length", RequiresArgument, |ctx| length_bound(ctx, is_exact_length))
        .register("regexp", RequiresArgument, regexp);
}

fn text_matches(ctx: &CheckContext<'_>, predicate: impl Fn(&str) -> bool) -> bool {
    ctx.text().is_some_and(|text| predicate(&text))
}

fn required(ctx: &CheckContext<'_>) -> Result<bool, RuleError> {
    Ok(match ctx.value {
        Value::Null => false,
        Value::String(s) => !is_blank(s),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
        _ => true,
    })
}

fn string(ctx: &CheckContext<'_>) -> Result<bool, RuleError> {
    Ok(matches!(ctx.value, Value::String(_)))
}

fn integer(ctx: &CheckContext<'_>) -> Result<bool, RuleError> {
    Ok(match ctx.value {
        Value::Integer(_) => true,
        Value::Float(n) => n.is_finite() && n.fract() == 0.0,
        Value::String(s) => is_integer_literal(s),
        _ => false,
    })
}

fn numeric(ctx: &CheckContext<'_>) -> Result<bool, RuleError> {
    Ok(match ctx.value {
        Value::Integer(_) => true,
        Value::Float(n) => n.is_finite(),
        Value::String(s) => is_numeric_literal(s),
        _ => false,
    })
}

/// Strict membership in `true`, `false`, `1`, `0`, `"1"`, `"0"`
fn boolean(ctx: &CheckContext<'_>) -> Result<bool, RuleError> {
    Ok(match ctx.value {
        Value::Bool(_) => true,
        Value::Integer(n) => matches!(n, 0 | 1),
        Value::String(s) => matches!(s.as_str(), "0" | "1"),
        _ => false,
    })
}

fn array(ctx: &CheckContext<'_>) -> Result<bool, RuleError> {
    Ok(matches!(ctx.value, Value::Array(_) | Value::Object(_)))
}

/// Only an already-parsed date-time passes; strings go through `datestring`
fn date(ctx: &CheckContext<'_>) -> Result<bool, RuleError> {
    Ok(matches!(ctx.value, Value::DateTime(_)))
}

fn date_string(ctx: &CheckContext<'_>) -> Result<bool, RuleError> {
    let format = ctx.required_argument()?;
    if format.is_empty() {
        return Err(ctx.invalid_argument("date format is empty"));
    }
    Ok(text_matches(ctx, |text| matches_date_format(text, format)))
}

fn length_bound(
    ctx: &CheckContext<'_>,
    within: impl Fn(&str, usize) -> bool,
) -> Result<bool, RuleError> {
    let argument = ctx.required_argument()?;
    let bound = parse_bound(argument)
        .ok_or_else(|| ctx.invalid_argument("expected a non-negative integer"))?;
    Ok(text_matches(ctx, |text| within(text, bound)))
}

fn regexp(ctx: &CheckContext<'_>) -> Result<bool, RuleError> {
    let pattern = ctx.required_argument()?;
    let regex = compile_pattern(pattern).map_err(|source| RuleError::MalformedPattern {
        field: ctx.field.to_string(),
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(text_matches(ctx, |text| regex.is_match(text)))
}
