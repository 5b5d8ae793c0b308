//! Classification of untyped JSON data.
//!
//! An outcome travels as a two element tagged tuple, `["ok", value]` or
//! `["error", error]`, the same form `Outcome` serializes to.

use serde_json::Value;

use crate::{
    outcome::{Outcome, FAILURE_TAG, SUCCESS_TAG},
    term::Term,
};

/// True iff `value` is a tagged tuple with exactly one payload slot.
///
/// ```rust
/// use routcome::dynamic::is_outcome_value;
/// use serde_json::json;
///
/// assert!(is_outcome_value(&json!(["ok", 1])));
/// assert!(!is_outcome_value(&json!(["ok", 1, 2])));
/// assert!(!is_outcome_value(&json!({"ok": 1})));
/// ```
pub fn is_outcome_value(value: &Value) -> bool {
    matches!(
        value.as_array().map(Vec::as_slice),
        Some([Value::String(tag), _]) if tag == SUCCESS_TAG || tag == FAILURE_TAG
    )
}

impl From<Value> for Term<Value, Value> {
    fn from(value: Value) -> Self {
        let items = match value {
            Value::Array(items) => items,
            other => return Term::Value(other),
        };

        match <[Value; 2]>::try_from(items) {
            Ok([Value::String(tag), payload]) if tag == SUCCESS_TAG => {
                Term::Outcome(Outcome::Success(payload))
            }
            Ok([Value::String(tag), payload]) if tag == FAILURE_TAG => {
                Term::Outcome(Outcome::Failure(payload))
            }
            Ok(pair) => Term::Value(Value::Array(pair.into())),
            Err(items) => Term::Value(Value::Array(items)),
        }
    }
}

impl From<Term<Value, Value>> for Value {
    fn from(term: Term<Value, Value>) -> Self {
        match term {
            Term::Value(value) => value,
            Term::Outcome(outcome) => {
                let tag = Value::from(outcome.tag());
                match outcome {
                    Outcome::Success(payload) | Outcome::Failure(payload) => {
                        Value::Array(vec![tag, payload])
                    }
                }
            }
        }
    }
}
