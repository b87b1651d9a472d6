//! Router type definitions

use crate::api::Project;
use std::fmt;

/// Application page. Exactly one is current at any time.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default, Hash)]
pub enum Page {
    #[default]
    Landing,
    NewProject,
    Archived,
    ProjectWorkspace,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Landing,
        Page::NewProject,
        Page::Archived,
        Page::ProjectWorkspace,
    ];

    /// Stable key used in logs
    pub fn key(&self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::NewProject => "new_project",
            Page::Archived => "archived",
            Page::ProjectWorkspace => "project_workspace",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Landing => "Home",
            Page::NewProject => "Create Project",
            Page::Archived => "Projects",
            Page::ProjectWorkspace => "Workspace",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// User-triggered navigation input
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum NavAction {
    /// "New Project" on the landing page
    NewProject,
    /// "Work on an Archived Project" on the landing page
    OpenArchived,
    /// "Back to Home"
    BackToHome,
    /// "Back to Projects" from the workspace
    BackToProjects,
    /// "Open Project Workspace" on the archive page
    OpenWorkspace,
    /// The create-project form succeeded
    ProjectCreated,
}

impl NavAction {
    pub const ALL: [NavAction; 6] = [
        NavAction::NewProject,
        NavAction::OpenArchived,
        NavAction::BackToHome,
        NavAction::BackToProjects,
        NavAction::OpenWorkspace,
        NavAction::ProjectCreated,
    ];
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NavAction::NewProject => "start a new project",
            NavAction::OpenArchived => "open the project archive",
            NavAction::BackToHome => "go back home",
            NavAction::BackToProjects => "go back to projects",
            NavAction::OpenWorkspace => "open the workspace",
            NavAction::ProjectCreated => "open the created project",
        };
        f.write_str(label)
    }
}

/// Session facts the transition guards look at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavContext {
    /// A project is selected and still present in the project list
    pub has_selection: bool,
    pub has_projects: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("cannot {action} from the {from} page")]
    InvalidTransition { from: Page, action: NavAction },

    #[error("select a project first")]
    NoSelection,

    #[error("projects exist, go back to the project list instead")]
    ProjectsExist,
}

/// What the workspace page can show for the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceView<'a> {
    /// No projects at all: offer Back to Home
    NoProjects,
    /// Selection unset or stale: prompt re-selection
    InvalidSelection,
    Ready(&'a Project),
}
