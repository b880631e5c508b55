//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! scopefilter operation, whatever the UI.
//!
//! The facade dispatches to the matching command function and returns
//! structured `Result<CmdResult>` values. It holds no business logic, performs
//! no terminal I/O and formats nothing for display.
//!
//! `FilterApi<S: StateStore>` is generic over the storage backend:
//! `FilterApi<FileStore>` in production, `FilterApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::Scope;
use crate::store::StateStore;

pub use commands::config::ConfigAction;
pub use commands::update::Selection;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ScopePaths};

pub struct FilterApi<S: StateStore> {
    store: S,
    paths: ScopePaths,
}

impl<S: StateStore> FilterApi<S> {
    pub fn new(store: S, paths: ScopePaths) -> Self {
        Self { store, paths }
    }

    pub fn list_filters(&self, scope: Scope) -> Result<CmdResult> {
        commands::list::run(&self.store, scope)
    }

    pub fn select_option(&mut self, scope: Scope, filter_id: &str, option_id: &str) -> Result<CmdResult> {
        self.update(scope, filter_id, Selection::Select(option_id.to_string()))
    }

    pub fn deselect_option(
        &mut self,
        scope: Scope,
        filter_id: &str,
        option_id: &str,
    ) -> Result<CmdResult> {
        self.update(scope, filter_id, Selection::Deselect(option_id.to_string()))
    }

    pub fn set_switch(&mut self, scope: Scope, filter_id: &str, on: bool) -> Result<CmdResult> {
        self.update(scope, filter_id, Selection::Switch(on))
    }

    pub fn set_range(
        &mut self,
        scope: Scope,
        filter_id: &str,
        start: Option<f64>,
        end: Option<f64>,
    ) -> Result<CmdResult> {
        self.update(scope, filter_id, Selection::Range { start, end })
    }

    pub fn set_slider(&mut self, scope: Scope, filter_id: &str, value: f64) -> Result<CmdResult> {
        self.update(scope, filter_id, Selection::Slider(value))
    }

    pub fn update(&mut self, scope: Scope, filter_id: &str, selection: Selection) -> Result<CmdResult> {
        commands::update::run(&mut self.store, scope, filter_id, selection)
    }

    pub fn reset(&mut self, scope: Scope, filter_id: Option<&str>) -> Result<CmdResult> {
        commands::reset::run(&mut self.store, scope, filter_id)
    }

    pub fn emit(&self, scope: Scope, pretty: bool) -> Result<CmdResult> {
        commands::emit::run(&self.store, scope, pretty)
    }

    pub fn init(&mut self, scope: Scope) -> Result<CmdResult> {
        commands::init::run(&mut self.store, &self.paths, scope)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn state_path(&self, scope: Scope) -> Result<std::path::PathBuf> {
        self.store.state_path(scope)
    }
}
