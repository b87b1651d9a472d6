//! Create-project pipeline

use crate::api::ProjectApi;
use crate::router::{NavAction, find_project};
use crate::session::Session;
use crate::session::pure::validate_project_form;
use tracing::{info, warn};

/// Submit the new-project form.
///
/// On success the project list is refreshed, the new project selected by
/// name, the form cleared and the workspace opened. On failure the form
/// keeps its contents.
pub fn create_project(session: &mut Session, api: &dyn ProjectApi) -> bool {
    let name = session.project_name.trim().to_string();
    let description = session.project_description.trim().to_string();

    if let Err(e) = validate_project_form(&name, &session.projects) {
        session.notify_error(format!("Failed to create project. Please try again. ({e})"));
        return false;
    }

    let project = match api.create_project(&name, &description, &session.credentials) {
        Ok(project) => project,
        Err(e) => {
            warn!(project = %name, error = %e, "project creation failed");
            session.notify_error(format!("Failed to create project. Please try again. ({e})"));
            return false;
        }
    };
    info!(project = %project.name, id = project.id, "project created");

    session.refresh(api);
    if find_project(&session.projects, &project.name).is_none() {
        session.projects.push(project.clone());
    }

    session.select_project(&project.name);
    session.project_name.clear();
    session.project_description.clear();
    session.navigate(NavAction::ProjectCreated).is_ok()
}
