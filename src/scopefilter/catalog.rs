//! # Filter Catalog
//!
//! The ordered set of filters a scope exposes. Definitions are stored as a JSON
//! array in the same shape as `filters_json`, so the output of `emit` can be
//! fed straight back in as a definitions file.

use crate::error::{Result, ScopeError};
use crate::filters::{
    DisplayHints, Filter, OptionSelectorFilter, RadioButtonsFilter, RangeInputFilter,
    RatingFilter, SwitchFilter, ValueSliderFilter,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCatalog {
    filters: Vec<Filter>,
}

impl FilterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting any repeated filter id.
    pub fn from_filters(filters: Vec<Filter>) -> Result<Self> {
        let mut catalog = Self::new();
        for filter in filters {
            catalog.add(filter)?;
        }
        Ok(catalog)
    }

    pub fn add(&mut self, filter: Filter) -> Result<()> {
        if self.get(filter.id()).is_some() {
            return Err(ScopeError::DuplicateFilter(filter.id().to_string()));
        }
        self.filters.push(filter);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Filter> {
        self.filters.iter().find(|f| f.id() == id)
    }

    pub fn require(&self, id: &str) -> Result<&Filter> {
        self.get(id)
            .ok_or_else(|| ScopeError::UnknownFilter(id.to_string()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.filters.iter()
    }

    pub fn as_slice(&self) -> &[Filter] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let filters: Vec<Filter> = serde_json::from_str(json)?;
        Self::from_filters(filters)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(&self.filters)?
        } else {
            serde_json::to_string(&self.filters)?
        };
        Ok(json)
    }

    /// One filter of each kind, written by `init`.
    pub fn sample() -> Self {
        let mut genre = OptionSelectorFilter::new("genre", "Genre", true);
        genre.display_hints = DisplayHints::PRIMARY;
        genre.add_option("rock", "Rock");
        genre.add_option("jazz", "Jazz");
        genre.add_option("folk", "Folk");

        let mut sort = RadioButtonsFilter::new("sort", "Sort by");
        sort.add_option("relevance", "Relevance");
        sort.add_option("newest", "Newest");
        sort.add_option("popular", "Most popular");

        let mut rating = RatingFilter::new("rating", "Rating");
        for n in 1..=5 {
            rating.add_option(n.to_string(), format!("{}+", n));
        }

        Self {
            filters: vec![
                genre.into(),
                sort.into(),
                rating.into(),
                SwitchFilter::new("free", "Free only").into(),
                RangeInputFilter::new("price", "Price", "From", "To", "EUR").into(),
                ValueSliderFilter::new("size", "Download size", "Up to %1 MB", 1.0, 500.0).into(),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a FilterCatalog {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_definition_order() {
        let json = r#"[
            {"filter_type": "switch", "id": "b", "label": "B"},
            {"filter_type": "switch", "id": "a", "label": "A"}
        ]"#;
        let catalog = FilterCatalog::from_json(json).unwrap();
        let ids: Vec<&str> = catalog.iter().map(Filter::id).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"filter_type": "switch", "id": "a", "label": "A"},
            {"filter_type": "rating", "id": "a", "label": "A again"}
        ]"#;
        let err = FilterCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, ScopeError::DuplicateFilter(id) if id == "a"));
    }

    #[test]
    fn unknown_filter_type_is_rejected() {
        let json = r#"[{"filter_type": "checkbox", "id": "a", "label": "A"}]"#;
        assert!(matches!(
            FilterCatalog::from_json(json),
            Err(ScopeError::Serialization(_))
        ));
    }

    #[test]
    fn definition_defaults() {
        let json = r#"[
            {"filter_type": "option_selector", "id": "g", "label": "G"},
            {"filter_type": "rating", "id": "r", "label": "R", "on_icon": "on", "off_icon": "off",
             "options": [{"id": "1", "label": "One"}]}
        ]"#;
        let catalog = FilterCatalog::from_json(json).unwrap();

        let genre = catalog.require("g").unwrap();
        assert_eq!(genre.display_hints(), DisplayHints::DEFAULT);
        assert!(genre.options().unwrap().is_empty());

        match catalog.require("r").unwrap() {
            Filter::Rating(r) => {
                assert_eq!(r.on_icon, "on");
                assert_eq!(r.off_icon, "off");
                assert!(r.is_valid_option("1"));
            }
            other => panic!("expected rating, got {}", other.filter_type()),
        }
    }

    #[test]
    fn require_reports_unknown_filter() {
        let catalog = FilterCatalog::sample();
        assert!(matches!(
            catalog.require("nope"),
            Err(ScopeError::UnknownFilter(id)) if id == "nope"
        ));
    }

    #[test]
    fn sample_has_one_of_each_kind_and_reloads() {
        let catalog = FilterCatalog::sample();
        let kinds: Vec<&str> = catalog.iter().map(Filter::filter_type).collect();
        assert_eq!(
            kinds,
            [
                "option_selector",
                "radio_buttons",
                "rating",
                "switch",
                "range_input",
                "value_slider"
            ]
        );

        let reloaded = FilterCatalog::from_json(&catalog.to_json(true).unwrap()).unwrap();
        assert_eq!(reloaded, catalog);
    }
}
