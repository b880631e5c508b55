//! Range filter with an optional start and an optional end value.
//!
//! The slot holds `[start, end]` exactly as supplied, each entry a number or
//! `null`. Reads always normalize numbers to `f64`.

use super::DisplayHints;
use crate::error::{ContractViolation, Endpoint, StateError, ValidationError};
use crate::state::FilterState;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RangeInputFilter {
    id: String,
    #[serde(default)]
    pub display_hints: DisplayHints,
    pub label: String,
    #[serde(default)]
    pub start_label: String,
    #[serde(default)]
    pub end_label: String,
    #[serde(default)]
    pub unit_label: String,
}

impl RangeInputFilter {
    pub const FILTER_TYPE: &'static str = "range_input";

    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        start_label: impl Into<String>,
        end_label: impl Into<String>,
        unit_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_hints: DisplayHints::DEFAULT,
            label: label.into(),
            start_label: start_label.into(),
            end_label: end_label.into(),
            unit_label: unit_label.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn filter_type(&self) -> &'static str {
        Self::FILTER_TYPE
    }

    /// Set the range. Each endpoint must be an integer, a float or `null`.
    ///
    /// Both `null` removes the slot. Both set requires `start < end`. On any
    /// error the state is left exactly as it was.
    pub fn update_state(
        &self,
        state: &mut FilterState,
        start: Value,
        end: Value,
    ) -> Result<(), ValidationError> {
        let start_num = self.check_endpoint(&start, Endpoint::Start)?;
        let end_num = self.check_endpoint(&end, Endpoint::End)?;

        match (start_num, end_num) {
            (None, None) => {
                tracing::trace!(filter = %self.id, "range cleared");
                state.remove(&self.id);
                return Ok(());
            }
            (Some(start), Some(end)) if start >= end => {
                return Err(ValidationError::EmptyRange {
                    filter_id: self.id.clone(),
                    start,
                    end,
                });
            }
            _ => {}
        }

        tracing::trace!(filter = %self.id, ?start_num, ?end_num, "range updated");
        state.set(self.id.clone(), Value::Array(vec![start, end]));
        Ok(())
    }

    /// Typed convenience over [`update_state`](Self::update_state).
    ///
    /// NaN and infinities have no JSON form and are rejected as bad values.
    pub fn update_bounds(
        &self,
        state: &mut FilterState,
        start: Option<f64>,
        end: Option<f64>,
    ) -> Result<(), ValidationError> {
        let start = self.finite_endpoint(start, Endpoint::Start)?;
        let end = self.finite_endpoint(end, Endpoint::End)?;
        self.update_state(state, start, end)
    }

    fn finite_endpoint(&self, bound: Option<f64>, endpoint: Endpoint) -> Result<Value, ValidationError> {
        match bound {
            Some(v) if !v.is_finite() => Err(ValidationError::BadValueType {
                filter_id: self.id.clone(),
                endpoint,
            }),
            other => Ok(Value::from(other)),
        }
    }

    pub fn start_value(&self, state: &FilterState) -> Result<Option<f64>, StateError> {
        self.read_endpoint(state, Endpoint::Start)
    }

    pub fn end_value(&self, state: &FilterState) -> Result<Option<f64>, StateError> {
        self.read_endpoint(state, Endpoint::End)
    }

    fn check_endpoint(&self, value: &Value, endpoint: Endpoint) -> Result<Option<f64>, ValidationError> {
        let bad_type = || ValidationError::BadValueType {
            filter_id: self.id.clone(),
            endpoint,
        };
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => n.as_f64().map(Some).ok_or_else(bad_type),
            _ => Err(bad_type()),
        }
    }

    fn read_endpoint(&self, state: &FilterState, endpoint: Endpoint) -> Result<Option<f64>, StateError> {
        let Some(slot) = state.get(&self.id) else {
            return Ok(None);
        };
        let Value::Array(pair) = slot else {
            return Err(StateError::Shape {
                filter_id: self.id.clone(),
                expected: "a [start, end] pair",
            });
        };
        if pair.len() != 2 {
            return Err(ContractViolation::MalformedRange {
                filter_id: self.id.clone(),
                len: pair.len(),
            }
            .into());
        }

        let index = match endpoint {
            Endpoint::Start => 0,
            Endpoint::End => 1,
        };
        match &pair[index] {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            _ => Err(ContractViolation::BadRangeValue {
                filter_id: self.id.clone(),
                endpoint,
            }
            .into()),
        }
    }
}
