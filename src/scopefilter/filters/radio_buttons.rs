//! Mutually exclusive option filter. At most one option is active at a time.

use super::{DisplayHints, OptionList};
use crate::error::{ContractViolation, StateError};
use crate::state::FilterState;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RadioButtonsFilter {
    id: String,
    #[serde(default)]
    pub display_hints: DisplayHints,
    pub label: String,
    #[serde(default)]
    options: OptionList,
}

impl RadioButtonsFilter {
    pub const FILTER_TYPE: &'static str = "radio_buttons";

    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_hints: DisplayHints::DEFAULT,
            label: label.into(),
            options: OptionList::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn filter_type(&self) -> &'static str {
        Self::FILTER_TYPE
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    pub fn add_option(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.options.add(id, label);
    }

    pub fn is_valid_option(&self, option_id: &str) -> bool {
        self.options.is_valid_option(option_id)
    }

    /// Activating replaces whatever was active. Deactivating only clears the
    /// slot when `option_id` is the active one; the slot then holds an empty list.
    pub fn update_state(
        &self,
        state: &mut FilterState,
        option_id: &str,
        active: bool,
    ) -> Result<(), ContractViolation> {
        self.options.require(&self.id, option_id)?;

        let mut selected = state.string_list_or_empty(&self.id);

        if active {
            if selected.first().map(String::as_str) == Some(option_id) {
                selected.truncate(1);
            } else {
                selected = vec![option_id.to_string()];
            }
        } else if selected.first().map(String::as_str) == Some(option_id) {
            selected.clear();
        }

        tracing::trace!(filter = %self.id, option = option_id, active, "radio buttons updated");
        state.set(self.id.clone(), Value::from(selected));
        Ok(())
    }

    /// Zero or one active option id.
    pub fn active_options(&self, state: &FilterState) -> Result<Vec<String>, StateError> {
        Ok(state.string_list(&self.id)?.unwrap_or_default())
    }

    pub fn has_active_option(&self, state: &FilterState) -> Result<bool, StateError> {
        let active = self.active_options(state)?;
        Ok(self.options.any_valid(active.iter().map(String::as_str)))
    }
}
