//! Batch project deletion pipeline

use crate::api::ProjectApi;
use crate::router::find_project;
use crate::session::{DeleteReport, Session};
use tracing::{info, warn};

/// Delete every project in `projects_to_delete`.
///
/// Each failure gets its own error notice; successes are counted
/// separately. The selection is cleared only when the selected project was
/// actually deleted.
pub fn delete_selected_projects(session: &mut Session, api: &dyn ProjectApi) -> DeleteReport {
    let requested = session.projects_to_delete.clone();
    let mut report = DeleteReport {
        requested: requested.clone(),
        ..DeleteReport::default()
    };

    if requested.is_empty() || !session.delete_confirmed {
        session.notify_info("Select projects and confirm before deleting.");
        return report;
    }

    for name in &requested {
        let outcome = match find_project(&session.projects, name) {
            Some(project) => api.delete_project(project.id).map_err(|e| e.to_string()),
            None => Ok(false),
        };
        match outcome {
            Ok(true) => {
                info!(project = %name, "project deleted");
                report.deleted.push(name.clone());
            }
            Ok(false) => {
                warn!(project = %name, "project deletion refused");
                session.notify_error(format!("Failed to delete project \"{name}\""));
                report.failed.push(name.clone());
            }
            Err(e) => {
                warn!(project = %name, error = %e, "project deletion failed");
                session.notify_error(format!("Failed to delete project \"{name}\": {e}"));
                report.failed.push(name.clone());
            }
        }
    }

    if report.success_count() > 0 {
        session.notify_success(format!(
            "Successfully deleted {} project(s)!",
            report.success_count()
        ));
        let selected_deleted = session
            .selected_project
            .as_ref()
            .is_some_and(|selected| report.deleted.contains(selected));
        if selected_deleted {
            session.selected_project = None;
            session.clear_project_cache();
        }
        session
            .projects
            .retain(|p| !report.deleted.contains(&p.name));
        session.projects_to_delete.clear();
    }

    session.delete_confirmed = false;
    session.refresh(api);
    session.last_delete_report = Some(report.clone());
    report
}
