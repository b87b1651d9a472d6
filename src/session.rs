//! Session state and command handling
//!
//! The [`Session`] owns every page, selection, form and notice field. Views
//! read it and emit [`Command`]s; [`Session::dispatch`] applies them one at a
//! time, calling the API where needed.
//!
//! ## Module Structure
//! - `types.rs`: Session, Command, Notice, DeleteReport
//! - `pure/`: Pure functions (prompt parsing, form validation)
//! - `operations.rs`: Atomic API operations (refresh, credential check, prompt load)
//! - `pipelines/`: Multi-step workflows (create project, batch delete, prompts, uploads)
//! - `commands.rs`: Command dispatch

mod commands;
mod operations;
mod pipelines;
pub mod pure;
mod types;

pub use types::{Command, DeleteReport, MAX_NOTICES, Notice, NoticeLevel, Session};

use crate::api::{Credentials, Project};
use crate::router::{NavContext, find_project, is_selection_stale};
use tracing::info;

impl Session {
    /// Fresh session on the landing page
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Self::default()
        }
    }

    pub fn notify(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notices.push(Notice {
            level,
            text: text.into(),
        });
        if self.notices.len() > MAX_NOTICES {
            let excess = self.notices.len() - MAX_NOTICES;
            self.notices.drain(..excess);
        }
    }

    pub fn notify_info(&mut self, text: impl Into<String>) {
        self.notify(NoticeLevel::Info, text);
    }

    pub fn notify_success(&mut self, text: impl Into<String>) {
        self.notify(NoticeLevel::Success, text);
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notify(NoticeLevel::Error, text);
    }

    /// The selected project, if it still exists
    pub fn selected(&self) -> Option<&Project> {
        self.selected_project
            .as_deref()
            .and_then(|name| find_project(&self.projects, name))
    }

    pub fn nav_context(&self) -> NavContext {
        NavContext {
            has_selection: self.selected().is_some(),
            has_projects: !self.projects.is_empty(),
        }
    }

    /// Select a project by name. Switching projects drops the prompt cache
    /// and the file selection.
    pub fn select_project(&mut self, name: &str) {
        if self.selected_project.as_deref() == Some(name) {
            return;
        }
        info!(project = name, "project selected");
        self.selected_project = Some(name.to_string());
        self.clear_project_cache();
    }

    /// Clear a selection naming a deleted project
    pub(crate) fn clear_stale_selection(&mut self) {
        if is_selection_stale(&self.projects, self.selected_project.as_deref()) {
            info!(project = ?self.selected_project, "clearing stale project selection");
            self.selected_project = None;
            self.clear_project_cache();
        }
    }

    fn clear_project_cache(&mut self) {
        self.questions.clear();
        self.questions_for = None;
        self.questions_failed_for = None;
        self.selected_files.clear();
        self.prompt_input.clear();
    }
}
