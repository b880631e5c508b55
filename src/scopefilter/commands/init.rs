use crate::catalog::FilterCatalog;
use crate::commands::{CmdMessage, CmdResult, ScopePaths};
use crate::error::Result;
use crate::model::Scope;
use crate::store::StateStore;
use std::fs;

pub fn run<S: StateStore>(store: &mut S, paths: &ScopePaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    fs::create_dir_all(&dir)?;
    let mut result = CmdResult::default();

    if store.has_definitions(scope)? {
        result.add_message(CmdMessage::warning(format!(
            "Filter definitions already exist in {}",
            dir.display()
        )));
        return Ok(result);
    }

    let catalog = FilterCatalog::sample();
    store.save_definitions(&catalog, scope)?;
    result.add_message(CmdMessage::success(format!(
        "Initialized {} sample filters in {}",
        catalog.len(),
        dir.display()
    )));
    Ok(result)
}
