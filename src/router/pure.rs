//! Page transitions and selection guards (pure functions)

use crate::api::Project;
use crate::router::types::{NavAction, NavContext, Page, RouterError, WorkspaceView};

/// Compute the page reached by `action` from `from`.
///
/// Never yields a page outside [`Page::ALL`]; rejected actions leave the
/// caller's page untouched.
pub fn transition(from: Page, action: NavAction, ctx: NavContext) -> Result<Page, RouterError> {
    match (from, action) {
        (Page::Landing, NavAction::NewProject) => Ok(Page::NewProject),
        (Page::Landing, NavAction::OpenArchived) => Ok(Page::Archived),
        (Page::NewProject | Page::Archived, NavAction::BackToHome) => Ok(Page::Landing),
        (Page::Archived, NavAction::OpenWorkspace)
        | (Page::NewProject, NavAction::ProjectCreated) => {
            if ctx.has_selection {
                Ok(Page::ProjectWorkspace)
            } else {
                Err(RouterError::NoSelection)
            }
        }
        (Page::ProjectWorkspace, NavAction::BackToProjects) => Ok(Page::Archived),
        (Page::ProjectWorkspace, NavAction::BackToHome) => {
            if ctx.has_projects {
                Err(RouterError::ProjectsExist)
            } else {
                Ok(Page::Landing)
            }
        }
        (from, action) => Err(RouterError::InvalidTransition { from, action }),
    }
}

/// Look a project up by its name (the selection key)
pub fn find_project<'a>(projects: &'a [Project], name: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.name == name)
}

/// A selection is stale when it names a project that no longer exists
pub fn is_selection_stale(projects: &[Project], selected: Option<&str>) -> bool {
    selected.is_some_and(|name| find_project(projects, name).is_none())
}

/// Resolve the workspace guard for the current selection
pub fn resolve_workspace<'a>(projects: &'a [Project], selected: Option<&str>) -> WorkspaceView<'a> {
    if projects.is_empty() {
        return WorkspaceView::NoProjects;
    }
    match selected.and_then(|name| find_project(projects, name)) {
        Some(project) => WorkspaceView::Ready(project),
        None => WorkspaceView::InvalidSelection,
    }
}
