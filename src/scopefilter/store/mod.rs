//! # Storage Layer
//!
//! The [`StateStore`] trait abstracts where filter definitions and the
//! persisted filter state live, so commands can run against the filesystem in
//! production and against memory in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one directory per scope
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Scope Pattern
//!
//! Every operation takes a [`Scope`]:
//! - `Scope::Project`: `.scopefilter/` under the current directory
//! - `Scope::Global`: the user data directory (or `$SCOPEFILTER_HOME`)
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! .scopefilter/
//! ├── filters.json    # Filter definitions (same shape as filters_json)
//! ├── state.json      # { "updated_at": ..., "state": { <id>: <value> } }
//! └── config.json     # Scope configuration
//! ```

use crate::catalog::FilterCatalog;
use crate::error::Result;
use crate::model::{Scope, Session};
use crate::state::FilterState;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait StateStore {
    /// Filter definitions for a scope. A scope without definitions yields an
    /// empty catalog.
    fn load_definitions(&self, scope: Scope) -> Result<FilterCatalog>;

    fn save_definitions(&mut self, catalog: &FilterCatalog, scope: Scope) -> Result<()>;

    fn has_definitions(&self, scope: Scope) -> Result<bool>;

    /// The last saved session, if any.
    fn load_session(&self, scope: Scope) -> Result<Option<Session>>;

    /// Replace the saved state, stamping it with the current time.
    fn save_state(&mut self, state: &FilterState, scope: Scope) -> Result<()>;

    fn clear_state(&mut self, scope: Scope) -> Result<()>;

    /// Where the state lives, for display.
    fn state_path(&self, scope: Scope) -> Result<PathBuf>;

    /// The saved state, or an empty one.
    fn load_state(&self, scope: Scope) -> Result<FilterState> {
        Ok(self
            .load_session(scope)?
            .map(|session| session.state)
            .unwrap_or_default())
    }
}
