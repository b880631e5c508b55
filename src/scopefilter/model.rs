use crate::error::StateError;
use crate::filters::Filter;
use crate::state::FilterState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// A persisted filter state together with the time it was last written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub updated_at: DateTime<Utc>,
    pub state: FilterState,
}

impl Session {
    pub fn new(state: FilterState) -> Self {
        Self {
            updated_at: Utc::now(),
            state,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FilterState::new())
    }
}

/// What a filter currently selects, decoded from the state.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionSummary {
    Options(Vec<String>),
    Rating(Option<String>),
    Switch(bool),
    Range(Option<f64>, Option<f64>),
    Slider(Option<f64>),
}

impl SelectionSummary {
    pub fn read(filter: &Filter, state: &FilterState) -> Result<Self, StateError> {
        let summary = match filter {
            Filter::OptionSelector(f) => SelectionSummary::Options(f.active_options(state)?),
            Filter::RadioButtons(f) => SelectionSummary::Options(f.active_options(state)?),
            Filter::Rating(f) => SelectionSummary::Rating(f.active_rating(state)?),
            Filter::Switch(f) => SelectionSummary::Switch(f.is_on(state)?),
            Filter::RangeInput(f) => {
                SelectionSummary::Range(f.start_value(state)?, f.end_value(state)?)
            }
            Filter::ValueSlider(f) => SelectionSummary::Slider(f.value(state)?),
        };
        Ok(summary)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SelectionSummary::Options(ids) => ids.is_empty(),
            SelectionSummary::Rating(r) => r.is_none(),
            SelectionSummary::Switch(on) => !on,
            SelectionSummary::Range(start, end) => start.is_none() && end.is_none(),
            SelectionSummary::Slider(v) => v.is_none(),
        }
    }
}

/// One row of the `list` output.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterView {
    pub id: String,
    pub label: String,
    pub filter_type: &'static str,
    pub primary: bool,
    pub selection: SelectionSummary,
    /// `None` for variants without options.
    pub has_active_option: Option<bool>,
}

impl FilterView {
    pub fn read(filter: &Filter, state: &FilterState) -> Result<Self, StateError> {
        let has_active_option = match filter {
            Filter::OptionSelector(f) => Some(f.has_active_option(state)?),
            Filter::RadioButtons(f) => Some(f.has_active_option(state)?),
            Filter::Rating(f) => Some(f.has_active_option(state)?),
            Filter::Switch(_) | Filter::RangeInput(_) | Filter::ValueSlider(_) => None,
        };

        Ok(Self {
            id: filter.id().to_string(),
            label: filter.label().to_string(),
            filter_type: filter.filter_type(),
            primary: filter.display_hints().is_primary(),
            selection: SelectionSummary::read(filter, state)?,
            has_active_option,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{OptionSelectorFilter, RangeInputFilter, SwitchFilter};
    use serde_json::json;

    #[test]
    fn summary_of_unset_filters_is_empty() {
        let state = FilterState::new();
        let switch = Filter::from(SwitchFilter::new("free", "Free"));
        let range = Filter::from(RangeInputFilter::new("p", "P", "", "", ""));

        let summary = SelectionSummary::read(&switch, &state).unwrap();
        assert_eq!(summary, SelectionSummary::Switch(false));
        assert!(summary.is_empty());
        assert!(SelectionSummary::read(&range, &state).unwrap().is_empty());
    }

    #[test]
    fn view_reports_active_options() {
        let mut genre = OptionSelectorFilter::new("genre", "Genre", true);
        genre.add_option("rock", "Rock");
        let mut state = FilterState::new();
        genre.update_state(&mut state, "rock", true).unwrap();

        let view = FilterView::read(&genre.into(), &state).unwrap();
        assert_eq!(view.selection, SelectionSummary::Options(vec!["rock".into()]));
        assert_eq!(view.has_active_option, Some(true));
        assert!(!view.primary);
    }

    #[test]
    fn corrupt_slot_surfaces_as_state_error() {
        let mut state = FilterState::new();
        state.set("free", json!([1]));
        let switch = Filter::from(SwitchFilter::new("free", "Free"));
        assert!(FilterView::read(&switch, &state).is_err());
    }

    #[test]
    fn session_serializes_timestamp_and_state() {
        let mut state = FilterState::new();
        state.set("free", json!(true));
        let session = Session::new(state);

        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["state"], json!({"free": true}));
        assert!(value["updated_at"].is_string());

        let back: Session = serde_json::from_value(value).unwrap();
        assert_eq!(back, session);
    }
}
