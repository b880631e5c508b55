use super::StateStore;
use crate::catalog::FilterCatalog;
use crate::error::Result;
use crate::model::{Scope, Session};
use crate::state::FilterState;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Default)]
pub struct InMemoryStore {
    definitions: HashMap<Scope, FilterCatalog>,
    sessions: HashMap<Scope, Session>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a scope with definitions.
    pub fn with_definitions(mut self, catalog: FilterCatalog, scope: Scope) -> Self {
        self.definitions.insert(scope, catalog);
        self
    }
}

impl StateStore for InMemoryStore {
    fn load_definitions(&self, scope: Scope) -> Result<FilterCatalog> {
        Ok(self.definitions.get(&scope).cloned().unwrap_or_default())
    }

    fn save_definitions(&mut self, catalog: &FilterCatalog, scope: Scope) -> Result<()> {
        self.definitions.insert(scope, catalog.clone());
        Ok(())
    }

    fn has_definitions(&self, scope: Scope) -> Result<bool> {
        Ok(self.definitions.contains_key(&scope))
    }

    fn load_session(&self, scope: Scope) -> Result<Option<Session>> {
        Ok(self.sessions.get(&scope).cloned())
    }

    fn save_state(&mut self, state: &FilterState, scope: Scope) -> Result<()> {
        self.sessions.insert(scope, Session::new(state.clone()));
        Ok(())
    }

    fn clear_state(&mut self, scope: Scope) -> Result<()> {
        self.sessions.remove(&scope);
        Ok(())
    }

    fn state_path(&self, scope: Scope) -> Result<PathBuf> {
        Ok(PathBuf::from(format!("memory://{:?}/state.json", scope)))
    }
}
