use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ScopeError};
use crate::model::Scope;
use crate::store::StateStore;

/// Clear one filter's slot, or the whole state when `filter_id` is `None`.
pub fn run<S: StateStore>(store: &mut S, scope: Scope, filter_id: Option<&str>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(id) = filter_id else {
        store.clear_state(scope)?;
        result.add_message(CmdMessage::success("Cleared all filter selections"));
        return Ok(result);
    };

    let catalog = store.load_definitions(scope)?;
    let mut state = store.load_state(scope)?;

    // Slots of filters that were since removed from the definitions can still be reset.
    if catalog.get(id).is_none() && !state.contains(id) {
        return Err(ScopeError::UnknownFilter(id.to_string()));
    }

    if state.remove(id).is_some() {
        store.save_state(&state, scope)?;
        result.add_message(CmdMessage::success(format!("{}: selection cleared", id)));
    } else {
        result.add_message(CmdMessage::info(format!("{}: nothing selected", id)));
    }
    Ok(result)
}
