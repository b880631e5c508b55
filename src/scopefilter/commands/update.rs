use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ScopeError};
use crate::filters::Filter;
use crate::model::{FilterView, Scope};
use crate::state::FilterState;
use crate::store::StateStore;

/// A single change to one filter's selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Select(String),
    Deselect(String),
    Switch(bool),
    Range { start: Option<f64>, end: Option<f64> },
    Slider(f64),
}

impl Selection {
    fn expected_type(&self) -> &'static str {
        match self {
            Selection::Select(_) | Selection::Deselect(_) => {
                "an option_selector, radio_buttons or rating filter"
            }
            Selection::Switch(_) => "a switch filter",
            Selection::Range { .. } => "a range_input filter",
            Selection::Slider(_) => "a value_slider filter",
        }
    }
}

/// Apply `selection` to the named filter and persist the new state.
///
/// The persisted state is only rewritten when the update succeeds; a rejected
/// value or unknown option leaves it as it was.
pub fn run<S: StateStore>(
    store: &mut S,
    scope: Scope,
    filter_id: &str,
    selection: Selection,
) -> Result<CmdResult> {
    let catalog = store.load_definitions(scope)?;
    let filter = catalog.require(filter_id)?;
    let mut state = store.load_state(scope)?;

    apply(filter, &mut state, &selection)?;
    store.save_state(&state, scope)?;
    tracing::debug!(filter = filter_id, ?selection, "selection saved");

    let view = FilterView::read(filter, &state)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(describe_change(filter, &selection)));
    Ok(result.with_filters(vec![view]))
}

pub(crate) fn apply(filter: &Filter, state: &mut FilterState, selection: &Selection) -> Result<()> {
    match (filter, selection) {
        (Filter::OptionSelector(f), Selection::Select(id)) => f.update_state(state, id, true)?,
        (Filter::OptionSelector(f), Selection::Deselect(id)) => f.update_state(state, id, false)?,
        (Filter::RadioButtons(f), Selection::Select(id)) => f.update_state(state, id, true)?,
        (Filter::RadioButtons(f), Selection::Deselect(id)) => f.update_state(state, id, false)?,
        (Filter::Rating(f), Selection::Select(id)) => f.update_state(state, id, true)?,
        (Filter::Rating(f), Selection::Deselect(id)) => f.update_state(state, id, false)?,
        (Filter::Switch(f), Selection::Switch(on)) => f.update_state(state, *on),
        (Filter::RangeInput(f), Selection::Range { start, end }) => {
            f.update_bounds(state, *start, *end)?
        }
        (Filter::ValueSlider(f), Selection::Slider(value)) => f.update_state(state, *value)?,
        (filter, selection) => {
            return Err(ScopeError::WrongFilterType {
                id: filter.id().to_string(),
                actual: filter.filter_type(),
                expected: selection.expected_type(),
            })
        }
    }
    Ok(())
}

fn describe_change(filter: &Filter, selection: &Selection) -> String {
    let id = filter.id();
    match selection {
        Selection::Select(option) => format!("{}: selected {}", id, option_label(filter, option)),
        Selection::Deselect(option) => {
            format!("{}: deselected {}", id, option_label(filter, option))
        }
        Selection::Switch(on) => format!("{}: {}", id, if *on { "on" } else { "off" }),
        Selection::Range { start, end } => format!(
            "{}: range set to {} .. {}",
            id,
            endpoint(*start),
            endpoint(*end)
        ),
        Selection::Slider(value) => format!("{}: set to {}", id, value),
    }
}

fn option_label<'a>(filter: &'a Filter, option_id: &'a str) -> &'a str {
    filter
        .options()
        .and_then(|options| options.find(option_id))
        .map(|option| option.label.as_str())
        .unwrap_or(option_id)
}

fn endpoint(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "*".to_string())
}
