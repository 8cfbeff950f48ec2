//! Lenient scalar inputs accepted at the API boundary.
//!
//! Browser forms and hand-written clients send flags as `true`, `1` or `"true"`.
//! Only the literal set `true/false/1/0` (as JSON bools, numbers or strings) is
//! accepted; anything else is a validation error rather than a silent `false`.

use serde::Deserialize;

use crate::shared::validation::ValidationError;

pub fn parse_bool_literal(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FlexibleBool {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl FlexibleBool {
    pub fn parse(&self, field: &'static str) -> Result<bool, ValidationError> {
        let parsed = match self {
            FlexibleBool::Bool(b) => Some(*b),
            FlexibleBool::Number(1) => Some(true),
            FlexibleBool::Number(0) => Some(false),
            FlexibleBool::Number(_) => None,
            FlexibleBool::Text(s) => parse_bool_literal(s),
        };

        parsed.ok_or_else(|| ValidationError::invalid(field, "expected true, false, 1 or 0"))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FlexibleInt {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FlexibleInt {
    pub fn parse(&self, field: &'static str) -> Result<i64, ValidationError> {
        match self {
            FlexibleInt::Int(n) => Ok(*n),
            FlexibleInt::Float(f) if f.fract() == 0.0 && f.is_finite() => Ok(*f as i64),
            FlexibleInt::Float(_) => Err(ValidationError::invalid(field, "must be a whole number")),
            FlexibleInt::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::invalid(field, "must be a whole number")),
        }
    }
}
