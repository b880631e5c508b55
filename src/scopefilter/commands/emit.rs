use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Scope;
use crate::reply::FilterReply;
use crate::store::StateStore;

/// Build the `filters_json` / `state_json` pair for the display client.
pub fn run<S: StateStore>(store: &S, scope: Scope, pretty: bool) -> Result<CmdResult> {
    let catalog = store.load_definitions(scope)?;
    let state = store.load_state(scope)?;

    let reply = if pretty {
        FilterReply::pretty(catalog.as_slice(), &state)?
    } else {
        FilterReply::new(catalog.as_slice(), &state)?
    };
    tracing::debug!(filters = catalog.len(), slots = state.len(), "emitting reply");

    Ok(CmdResult::default().with_reply(reply))
}
