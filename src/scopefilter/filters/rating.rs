//! Rating filter: a single active option id stored as a plain string.
//!
//! `on_icon` / `off_icon` are carried as configuration only. They take no part
//! in selection and are not part of the describe structure.

use super::{DisplayHints, OptionList};
use crate::error::{ContractViolation, StateError};
use crate::state::FilterState;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RatingFilter {
    id: String,
    #[serde(default)]
    pub display_hints: DisplayHints,
    pub label: String,
    #[serde(default)]
    options: OptionList,
    #[serde(default)]
    pub on_icon: String,
    #[serde(default)]
    pub off_icon: String,
}

impl RatingFilter {
    pub const FILTER_TYPE: &'static str = "rating";

    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_hints: DisplayHints::DEFAULT,
            label: label.into(),
            options: OptionList::new(),
            on_icon: String::new(),
            off_icon: String::new(),
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

    /// Activating overwrites the stored rating. Deactivating removes it only
    /// when it matches `option_id` exactly.
    pub fn update_state(
        &self,
        state: &mut FilterState,
        option_id: &str,
        active: bool,
    ) -> Result<(), ContractViolation> {
        self.options.require(&self.id, option_id)?;

        if active {
            state.set(self.id.clone(), Value::from(option_id));
        } else {
            let current = state.string(&self.id).ok().flatten();
            if current.as_deref() == Some(option_id) {
                state.remove(&self.id);
            }
        }

        tracing::trace!(filter = %self.id, option = option_id, active, "rating updated");
        Ok(())
    }

    pub fn active_rating(&self, state: &FilterState) -> Result<Option<String>, StateError> {
        state.string(&self.id)
    }

    pub fn has_active_option(&self, state: &FilterState) -> Result<bool, StateError> {
        let active = self.active_rating(state)?;
        Ok(self.options.any_valid(active.as_deref()))
    }
}
