//! JSON serialization.
//!
//! Deflating and re-inflating a value yields a structurally equal one; ids
//! are preserved exactly, so a deduction can be stored mid-proof and
//! resumed later against the same symbol table.

use crate::deduction::Deduction;
use crate::error::SequentError;
use crate::expression::Expression;
use crate::SequentResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T) -> SequentResult<String> {
    serde_json::to_string_pretty(value).map_err(|error| SequentError::Serialization(error.to_string()))
}

pub fn from_json<T: DeserializeOwned>(json: &str) -> SequentResult<T> {
    serde_json::from_str(json).map_err(|error| SequentError::Serialization(error.to_string()))
}

pub fn expression_to_json(expression: &Expression) -> SequentResult<String> {
    to_json(expression)
}

pub fn expression_from_json(json: &str) -> SequentResult<Expression> {
    from_json(json)
}

pub fn deduction_to_json(deduction: &Deduction) -> SequentResult<String> {
    to_json(deduction)
}

pub fn deduction_from_json(json: &str) -> SequentResult<Deduction> {
    from_json(json)
}
