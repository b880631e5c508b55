use super::StateStore;
use crate::catalog::FilterCatalog;
use crate::config::ScopeConfig;
use crate::error::{Result, ScopeError};
use crate::model::{Scope, Session};
use crate::state::FilterState;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    project_root: Option<PathBuf>,
    global_root: PathBuf,
    definitions_file: String,
    state_file: String,
}

impl FileStore {
    pub fn new(project_root: Option<PathBuf>, global_root: PathBuf) -> Self {
        let defaults = ScopeConfig::default();
        Self {
            project_root,
            global_root,
            definitions_file: defaults.definitions_file,
            state_file: defaults.state_file,
        }
    }

    /// Use the file names configured for the active scope.
    pub fn with_config(mut self, config: &ScopeConfig) -> Self {
        self.definitions_file = config.definitions_file.clone();
        self.state_file = config.state_file.clone();
        self
    }

    pub fn definitions_path(&self, scope: Scope) -> Result<PathBuf> {
        Ok(self.get_store_path(scope)?.join(&self.definitions_file))
    }

    fn get_store_path(&self, scope: Scope) -> Result<PathBuf> {
        let root = match scope {
            Scope::Project => self.project_root.as_ref().ok_or_else(|| {
                ScopeError::Store("No project scope available".to_string())
            })?,
            Scope::Global => &self.global_root,
        };
        Ok(root.clone())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}

impl StateStore for FileStore {
    fn load_definitions(&self, scope: Scope) -> Result<FilterCatalog> {
        let path = self.definitions_path(scope)?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no definitions file");
            return Ok(FilterCatalog::new());
        }
        let content = fs::read_to_string(&path)?;
        let catalog = FilterCatalog::from_json(&content)?;
        tracing::debug!(path = %path.display(), filters = catalog.len(), "loaded definitions");
        Ok(catalog)
    }

    fn save_definitions(&mut self, catalog: &FilterCatalog, scope: Scope) -> Result<()> {
        let path = self.definitions_path(scope)?;
        self.write_file(&path, &catalog.to_json(true)?)?;
        tracing::debug!(path = %path.display(), filters = catalog.len(), "saved definitions");
        Ok(())
    }

    fn has_definitions(&self, scope: Scope) -> Result<bool> {
        Ok(self.definitions_path(scope)?.exists())
    }

    fn load_session(&self, scope: Scope) -> Result<Option<Session>> {
        let path = self.state_path(scope)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let session: Session = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), slots = session.state.len(), "loaded state");
        Ok(Some(session))
    }

    fn save_state(&mut self, state: &FilterState, scope: Scope) -> Result<()> {
        let path = self.state_path(scope)?;
        let session = Session::new(state.clone());
        self.write_file(&path, &serde_json::to_string_pretty(&session)?)?;
        tracing::debug!(path = %path.display(), slots = state.len(), "saved state");
        Ok(())
    }

    fn clear_state(&mut self, scope: Scope) -> Result<()> {
        let path = self.state_path(scope)?;
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!(path = %path.display(), "removed state");
        }
        Ok(())
    }

    fn state_path(&self, scope: Scope) -> Result<PathBuf> {
        Ok(self.get_store_path(scope)?.join(&self.state_file))
    }
}
