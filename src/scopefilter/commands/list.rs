use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{FilterView, Scope};
use crate::store::StateStore;

pub fn run<S: StateStore>(store: &S, scope: Scope) -> Result<CmdResult> {
    let catalog = store.load_definitions(scope)?;
    let session = store.load_session(scope)?;
    let updated_at = session.as_ref().map(|s| s.updated_at);
    let state = session.map(|s| s.state).unwrap_or_default();

    let views = catalog
        .iter()
        .map(|filter| FilterView::read(filter, &state))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut result = CmdResult::default()
        .with_filters(views)
        .with_updated_at(updated_at);

    if catalog.is_empty() {
        result.add_message(CmdMessage::info(
            "No filters defined. Run `scopefilter init` to create sample definitions.",
        ));
    }

    let orphaned: Vec<&str> = state
        .ids()
        .filter(|id| catalog.get(id).is_none())
        .collect();
    if !orphaned.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "State holds values for undefined filters: {}",
            orphaned.join(", ")
        )));
    }

    Ok(result)
}
