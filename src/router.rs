//! Page router
//!
//! Four pages, one current at a time, moved between only by user actions.
//! The workspace guard is a rendering decision and never moves the page.

mod pure;
mod types;

pub use pure::{find_project, is_selection_stale, resolve_workspace, transition};
pub use types::{NavAction, NavContext, Page, RouterError, WorkspaceView};
