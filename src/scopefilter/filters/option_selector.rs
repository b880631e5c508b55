//! Single- or multi-select option filter.
//!
//! The selection is stored as a sorted, de-duplicated list of option ids.
//! Sorting means the order in which a user activated options is not preserved:
//! activating "3" then "1" reads back as `["1", "3"]`.

use super::{DisplayHints, OptionList};
use crate::error::{ContractViolation, StateError};
use crate::state::FilterState;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptionSelectorFilter {
    id: String,
    #[serde(default)]
    pub display_hints: DisplayHints,
    pub label: String,
    #[serde(default)]
    options: OptionList,
    #[serde(default)]
    multi_select: bool,
}

impl OptionSelectorFilter {
    pub const FILTER_TYPE: &'static str = "option_selector";

    pub fn new(id: impl Into<String>, label: impl Into<String>, multi_select: bool) -> Self {
        Self {
            id: id.into(),
            display_hints: DisplayHints::DEFAULT,
            label: label.into(),
            options: OptionList::new(),
            multi_select,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn filter_type(&self) -> &'static str {
        Self::FILTER_TYPE
    }

    pub fn multi_select(&self) -> bool {
        self.multi_select
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

    /// Activate or deactivate `option_id`.
    ///
    /// Activating on a single-select filter drops any previous selection first.
    /// The slot is always written back, so after any update it reads as a list
    /// (possibly empty) rather than absent.
    pub fn update_state(
        &self,
        state: &mut FilterState,
        option_id: &str,
        active: bool,
    ) -> Result<(), ContractViolation> {
        self.options.require(&self.id, option_id)?;

        if active && !self.multi_select {
            state.remove(&self.id);
        }

        let mut selected = state.string_list_or_empty(&self.id);
        selected.sort();
        selected.dedup();

        match selected.binary_search_by(|probe| probe.as_str().cmp(option_id)) {
            Ok(pos) if !active => {
                selected.remove(pos);
            }
            Err(pos) if active => selected.insert(pos, option_id.to_string()),
            _ => {}
        }

        tracing::trace!(filter = %self.id, option = option_id, active, "option selector updated");
        state.set(self.id.clone(), Value::from(selected));
        Ok(())
    }

    /// Currently selected option ids, in lexicographic order.
    pub fn active_options(&self, state: &FilterState) -> Result<Vec<String>, StateError> {
        Ok(state.string_list(&self.id)?.unwrap_or_default())
    }

    pub fn has_active_option(&self, state: &FilterState) -> Result<bool, StateError> {
        let active = self.active_options(state)?;
        Ok(self.options.any_valid(active.iter().map(String::as_str)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterOption;
    use serde_json::json;

    fn selector(multi_select: bool) -> OptionSelectorFilter {
        let mut filter = OptionSelectorFilter::new("f1", "Options", multi_select);
        filter.add_option("1", "Option 1");
        filter.add_option("2", "Option 2");
        filter.add_option("3", "Option 3");
        filter
    }

    #[test]
    fn construction_sets_defaults() {
        let mut filter = OptionSelectorFilter::new("f1", "Options", false);
        assert_eq!(filter.id(), "f1");
        assert_eq!(filter.label, "Options");
        assert!(!filter.multi_select());
        assert_eq!(filter.display_hints, DisplayHints::DEFAULT);
        assert_eq!(filter.filter_type(), "option_selector");

        filter.display_hints = DisplayHints::PRIMARY;
        filter.add_option("1", "Option 1");
        filter.add_option("2", "Option 2");
        assert_eq!(filter.display_hints, DisplayHints::PRIMARY);
        assert_eq!(
            filter.options().as_slice(),
            &[
                FilterOption::new("1", "Option 1"),
                FilterOption::new("2", "Option 2")
            ]
        );
    }

    #[test]
    fn single_select_replaces_previous_option() {
        let filter = selector(false);
        let mut state = FilterState::new();
        assert!(!filter.has_active_option(&state).unwrap());

        filter.update_state(&mut state, "1", true).unwrap();
        assert!(state.contains("f1"));
        assert!(filter.has_active_option(&state).unwrap());
        assert_eq!(filter.active_options(&state).unwrap(), vec!["1"]);

        filter.update_state(&mut state, "2", true).unwrap();
        assert_eq!(filter.active_options(&state).unwrap(), vec!["2"]);

        filter.update_state(&mut state, "2", false).unwrap();
        assert!(state.contains("f1"));
        assert!(filter.active_options(&state).unwrap().is_empty());
        assert!(!filter.has_active_option(&state).unwrap());
    }

    #[test]
    fn multi_select_keeps_lexicographic_order() {
        let filter = selector(true);
        let mut state = FilterState::new();

        filter.update_state(&mut state, "3", true).unwrap();
        filter.update_state(&mut state, "1", true).unwrap();
        assert_eq!(filter.active_options(&state).unwrap(), vec!["1", "3"]);

        filter.update_state(&mut state, "2", true).unwrap();
        assert_eq!(filter.active_options(&state).unwrap(), vec!["1", "2", "3"]);

        filter.update_state(&mut state, "1", false).unwrap();
        assert_eq!(filter.active_options(&state).unwrap(), vec!["2", "3"]);
    }

    #[test]
    fn activation_is_idempotent() {
        let filter = selector(true);
        let mut once = FilterState::new();
        let mut twice = FilterState::new();

        filter.update_state(&mut once, "2", true).unwrap();
        filter.update_state(&mut twice, "2", true).unwrap();
        filter.update_state(&mut twice, "2", true).unwrap();

        assert_eq!(
            filter.active_options(&once).unwrap(),
            filter.active_options(&twice).unwrap()
        );
    }

    #[test]
    fn deactivating_absent_option_is_noop() {
        let filter = selector(true);
        let mut state = FilterState::new();
        filter.update_state(&mut state, "3", true).unwrap();

        filter.update_state(&mut state, "1", false).unwrap();
        assert_eq!(filter.active_options(&state).unwrap(), vec!["3"]);

        // Never-touched slot becomes an empty list, not absent.
        let mut fresh = FilterState::new();
        filter.update_state(&mut fresh, "1", false).unwrap();
        assert_eq!(fresh.get("f1"), Some(&json!([])));
    }

    #[test]
    fn unknown_option_is_a_contract_violation() {
        let filter = selector(true);
        let mut state = FilterState::new();
        filter.update_state(&mut state, "1", true).unwrap();

        let err = filter.update_state(&mut state, "5", true).unwrap_err();
        assert_eq!(
            err,
            ContractViolation::InvalidOption {
                filter_id: "f1".into(),
                option_id: "5".into()
            }
        );
        assert!(filter.update_state(&mut state, "5", false).is_err());
        assert_eq!(filter.active_options(&state).unwrap(), vec!["1"]);
    }

    #[test]
    fn unsorted_client_state_is_normalized() {
        let filter = selector(true);
        let mut state = FilterState::new();
        state.set("f1", json!(["3", "1", "3"]));

        filter.update_state(&mut state, "2", true).unwrap();
        assert_eq!(filter.active_options(&state).unwrap(), vec!["1", "2", "3"]);
    }

    #[test]
    fn malformed_slot_is_overwritten_on_update_but_reported_on_read() {
        let filter = selector(true);
        let mut state = FilterState::new();
        state.set("f1", json!(42));

        assert!(filter.active_options(&state).is_err());
        filter.update_state(&mut state, "1", true).unwrap();
        assert_eq!(filter.active_options(&state).unwrap(), vec!["1"]);
    }

    #[test]
    fn stale_ids_do_not_count_as_active() {
        let filter = selector(true);
        let mut state = FilterState::new();
        state.set("f1", json!(["removed"]));
        assert!(!filter.has_active_option(&state).unwrap());
    }
}
