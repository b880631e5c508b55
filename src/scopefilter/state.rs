//! # Filter State
//!
//! [`FilterState`] is the single source of truth for what the user has selected
//! across every filter of a search session. It maps a filter id to an untyped
//! JSON value, exactly as it travels on the wire:
//!
//! | Owner | Stored value |
//! |-------|--------------|
//! | `OptionSelectorFilter`, `RadioButtonsFilter` | array of option ids |
//! | `RatingFilter` | a single option id string |
//! | `SwitchFilter` | boolean |
//! | `RangeInputFilter` | `[start, end]`, either may be `null` |
//! | `ValueSliderFilter` | number |
//!
//! The state has no schema of its own. Each filter variant owns the shape under
//! its own id and decodes it on read through the typed helpers below, so a
//! mismatched slot surfaces as [`StateError::Shape`] instead of garbage.
//!
//! Filters never hold a reference into the state; callers create it empty per
//! query and thread it through every update.

use crate::error::StateError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    slots: BTreeMap<String, Value>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, filter_id: &str) -> Option<&Value> {
        self.slots.get(filter_id)
    }

    pub fn contains(&self, filter_id: &str) -> bool {
        self.slots.contains_key(filter_id)
    }

    /// Overwrite the slot for `filter_id`.
    pub fn set(&mut self, filter_id: impl Into<String>, value: Value) {
        self.slots.insert(filter_id.into(), value);
    }

    /// Remove the slot entirely. Reads afterwards report "not set".
    pub fn remove(&mut self, filter_id: &str) -> Option<Value> {
        self.slots.remove(filter_id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// The wire form: a JSON object keyed by filter id.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.slots
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a previously serialized state blob. Any JSON object is accepted;
    /// slot shapes are only checked when a filter reads them.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Decode a slot holding a list of option ids.
    pub(crate) fn string_list(&self, filter_id: &str) -> Result<Option<Vec<String>>, StateError> {
        match self.slots.get(filter_id) {
            None => Ok(None),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    _ => Err(shape(filter_id, "a list of option ids")),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(_) => Err(shape(filter_id, "a list of option ids")),
        }
    }

    /// Like [`string_list`](Self::string_list), but a slot of unexpected shape
    /// reads as empty. Used by selector updates, which overwrite the slot anyway.
    pub(crate) fn string_list_or_empty(&self, filter_id: &str) -> Vec<String> {
        self.string_list(filter_id).ok().flatten().unwrap_or_default()
    }

    pub(crate) fn string(&self, filter_id: &str) -> Result<Option<String>, StateError> {
        match self.slots.get(filter_id) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(shape(filter_id, "an option id")),
        }
    }

    pub(crate) fn boolean(&self, filter_id: &str) -> Result<Option<bool>, StateError> {
        match self.slots.get(filter_id) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(shape(filter_id, "a boolean")),
        }
    }

    pub(crate) fn number(&self, filter_id: &str) -> Result<Option<f64>, StateError> {
        match self.slots.get(filter_id) {
            None => Ok(None),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| shape(filter_id, "a number")),
            Some(_) => Err(shape(filter_id, "a number")),
        }
    }
}

fn shape(filter_id: &str, expected: &'static str) -> StateError {
    StateError::Shape {
        filter_id: filter_id.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_state_is_empty() {
        let state = FilterState::new();
        assert!(state.is_empty());
        assert_eq!(state.to_json().unwrap(), "{}");
    }

    #[test]
    fn set_and_remove_slot() {
        let mut state = FilterState::new();
        state.set("f1", json!(true));
        assert!(state.contains("f1"));
        assert_eq!(state.remove("f1"), Some(json!(true)));
        assert!(!state.contains("f1"));
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut state = FilterState::new();
        state.set("genre", json!(["a", "b"]));
        state.set("price", json!([null, 100]));
        state.set("free", json!(false));

        let parsed: Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();
        assert_eq!(
            parsed,
            json!({"genre": ["a", "b"], "price": [null, 100], "free": false})
        );
        assert_eq!(state.to_value(), parsed);
    }

    #[test]
    fn unknown_slots_survive_parsing() {
        let state = FilterState::from_json(r#"{"x": {"nested": [1, 2]}, "y": "z"}"#).unwrap();
        assert_eq!(state.get("x"), Some(&json!({"nested": [1, 2]})));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn rejects_non_object_blob() {
        assert!(FilterState::from_json("[1, 2]").is_err());
    }

    #[test]
    fn string_list_decodes_or_reports_shape() {
        let mut state = FilterState::new();
        assert_eq!(state.string_list("f1").unwrap(), None);

        state.set("f1", json!(["1", "2"]));
        assert_eq!(
            state.string_list("f1").unwrap(),
            Some(vec!["1".to_string(), "2".to_string()])
        );

        state.set("f1", json!([1, 2]));
        assert!(matches!(
            state.string_list("f1"),
            Err(StateError::Shape { .. })
        ));
        assert!(state.string_list_or_empty("f1").is_empty());
    }

    #[test]
    fn scalar_decoders_check_shape() {
        let mut state = FilterState::new();
        state.set("b", json!(true));
        state.set("n", json!(3));
        state.set("s", json!("x"));

        assert_eq!(state.boolean("b").unwrap(), Some(true));
        assert_eq!(state.number("n").unwrap(), Some(3.0));
        assert_eq!(state.string("s").unwrap(), Some("x".to_string()));

        assert!(state.boolean("n").is_err());
        assert!(state.number("s").is_err());
        assert!(state.string("b").is_err());
    }
}
