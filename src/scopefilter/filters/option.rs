//! Option registry shared by the selector-style filters.
//!
//! Options are appended in order and never deduplicated: the order is what the
//! renderer shows, and lookups return the first match.

use crate::error::ContractViolation;
use serde::{Deserialize, Serialize};

/// One selectable choice within a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionList(Vec<FilterOption>);

impl OptionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option. No validation, no dedup.
    pub fn add(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.0.push(FilterOption::new(id, label));
    }

    pub fn is_valid_option(&self, option_id: &str) -> bool {
        self.find(option_id).is_some()
    }

    pub fn find(&self, option_id: &str) -> Option<&FilterOption> {
        self.0.iter().find(|o| o.id == option_id)
    }

    /// True if any of `ids` is a registered option. Ids left in state after the
    /// options were redefined don't count.
    pub fn any_valid<'a, I>(&self, ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter().any(|id| self.is_valid_option(id))
    }

    /// Gate every state mutation on the option being known to the filter.
    pub(crate) fn require(&self, filter_id: &str, option_id: &str) -> Result<(), ContractViolation> {
        if self.is_valid_option(option_id) {
            Ok(())
        } else {
            Err(ContractViolation::InvalidOption {
                filter_id: filter_id.to_string(),
                option_id: option_id.to_string(),
            })
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterOption> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[FilterOption] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a FilterOption;
    type IntoIter = std::slice::Iter<'a, FilterOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_preserves_order() {
        let mut options = OptionList::new();
        options.add("2", "Option 2");
        options.add("1", "Option 1");

        assert_eq!(
            options.as_slice(),
            &[
                FilterOption::new("2", "Option 2"),
                FilterOption::new("1", "Option 1")
            ]
        );
    }

    #[test]
    fn duplicates_are_kept_and_first_wins() {
        let mut options = OptionList::new();
        options.add("a", "First");
        options.add("a", "Second");

        assert_eq!(options.len(), 2);
        assert_eq!(options.find("a").unwrap().label, "First");
    }

    #[test]
    fn empty_id_is_only_valid_when_added() {
        let mut options = OptionList::new();
        options.add("1", "One");
        assert!(!options.is_valid_option(""));
        assert!(options.require("f1", "").is_err());
    }

    #[test]
    fn any_valid_ignores_stale_ids() {
        let mut options = OptionList::new();
        options.add("1", "One");
        assert!(!options.any_valid(["gone"]));
        assert!(options.any_valid(["gone", "1"]));
    }

    #[test]
    fn serializes_as_array_of_pairs() {
        let mut options = OptionList::new();
        options.add("1", "One");
        assert_eq!(
            serde_json::to_string(&options).unwrap(),
            r#"[{"id":"1","label":"One"}]"#
        );
    }
}
