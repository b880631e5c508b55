use super::DisplayHints;
use crate::error::StateError;
use crate::state::FilterState;
use serde::Deserialize;
use serde_json::Value;

/// A simple on/off switch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SwitchFilter {
    id: String,
    #[serde(default)]
    pub display_hints: DisplayHints,
    pub label: String,
}

impl SwitchFilter {
    pub const FILTER_TYPE: &'static str = "switch";

    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_hints: DisplayHints::DEFAULT,
            label: label.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn filter_type(&self) -> &'static str {
        Self::FILTER_TYPE
    }

    pub fn update_state(&self, state: &mut FilterState, on: bool) {
        state.set(self.id.clone(), Value::Bool(on));
    }

    /// An unset switch is off.
    pub fn is_on(&self, state: &FilterState) -> Result<bool, StateError> {
        Ok(state.boolean(&self.id)?.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn toggles_by_overwrite() {
        let filter = SwitchFilter::new("f1", "Options");
        assert_eq!(filter.display_hints, DisplayHints::DEFAULT);

        let mut state = FilterState::new();
        assert!(!filter.is_on(&state).unwrap());

        filter.update_state(&mut state, true);
        assert!(filter.is_on(&state).unwrap());

        filter.update_state(&mut state, true);
        filter.update_state(&mut state, false);
        filter.update_state(&mut state, true);
        assert!(filter.is_on(&state).unwrap());

        filter.update_state(&mut state, false);
        filter.update_state(&mut state, true);
        filter.update_state(&mut state, false);
        assert!(!filter.is_on(&state).unwrap());
    }

    #[test]
    fn non_boolean_slot_is_a_shape_error() {
        let filter = SwitchFilter::new("f1", "Options");
        let mut state = FilterState::new();
        state.set("f1", json!("on"));
        assert!(filter.is_on(&state).is_err());
    }
}
