use crate::config::ScopeConfig;
use crate::error::{Result, ScopeError};
use crate::model::{FilterView, Scope};
use crate::reply::FilterReply;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub mod config;
pub mod emit;
pub mod init;
pub mod list;
pub mod reset;
pub mod update;

#[derive(Debug, Clone)]
pub struct ScopePaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl ScopePaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| ScopeError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub filters: Vec<FilterView>,
    pub reply: Option<FilterReply>,
    pub config: Option<ScopeConfig>,
    pub updated_at: Option<DateTime<Utc>>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_filters(mut self, filters: Vec<FilterView>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_reply(mut self, reply: FilterReply) -> Self {
        self.reply = Some(reply);
        self
    }

    pub fn with_config(mut self, config: ScopeConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_updated_at(mut self, updated_at: Option<DateTime<Utc>>) -> Self {
        self.updated_at = updated_at;
        self
    }
}
