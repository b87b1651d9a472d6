//! Session type definitions

use crate::api::{Credentials, FileRecord, Project, Question};
use crate::router::Page;
use std::path::PathBuf;

/// Oldest notices are dropped past this count
pub const MAX_NOTICES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// User-visible message shown above the current page until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Outcome of a batch delete. Partial success is a valid outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub requested: Vec<String>,
    pub deleted: Vec<String>,
    pub failed: Vec<String>,
}

impl DeleteReport {
    pub fn success_count(&self) -> usize {
        self.deleted.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectFormError {
    #[error("project name must not be empty")]
    EmptyName,

    #[error("a project named \"{0}\" already exists")]
    DuplicateName(String),
}

/// Every user interaction, applied synchronously by [`Session::dispatch`]
///
/// [`Session::dispatch`]: crate::session::Session::dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(crate::router::NavAction),
    CheckCredentials,
    Refresh,
    /// Submit the new-project form buffers
    CreateProject,
    SelectProject(String),
    ToggleFile(String),
    ToggleDeleteCandidate(String),
    SetDeleteConfirmed(bool),
    DeleteSelectedProjects,
    /// Load prompts unless already cached for the selected project
    LoadQuestions,
    /// Discard cached prompts and fetch them again
    ReloadQuestions,
    /// Append the prompt input buffer to the prompt list
    AddQuestions,
    RemoveQuestion(usize),
    AnswerQuestion(usize),
    SaveQuestions,
    UploadFiles(Vec<PathBuf>),
    UploadManualText,
    DismissNotice(usize),
}

/// Per-session state, threaded through the router, the command handlers
/// and every view.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub current_page: Page,
    /// Name of the selected project
    pub selected_project: Option<String>,
    pub projects: Vec<Project>,
    pub files: Vec<FileRecord>,
    pub questions: Vec<Question>,
    /// Id of the project the cached questions were loaded for
    pub questions_for: Option<i64>,
    /// Id of the project whose prompt load failed; cleared by a reload
    pub questions_failed_for: Option<i64>,
    /// Names of files used as reference when answering
    pub selected_files: Vec<String>,

    pub credentials: Credentials,
    pub credentials_ok: bool,

    // Form buffers
    pub project_name: String,
    pub project_description: String,
    pub manual_text: String,
    pub prompt_input: String,
    pub show_upload_panel: bool,

    // Batch delete state
    pub projects_to_delete: Vec<String>,
    pub delete_confirmed: bool,
    pub last_delete_report: Option<DeleteReport>,

    pub notices: Vec<Notice>,
}
