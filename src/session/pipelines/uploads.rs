//! Document upload workflows

use crate::api::ProjectApi;
use crate::session::Session;
use std::path::PathBuf;
use tracing::{info, warn};

/// Upload picked pdf/txt files, then refresh the file list
pub fn upload_files(session: &mut Session, api: &dyn ProjectApi, paths: &[PathBuf]) {
    if paths.is_empty() {
        return;
    }
    let Some(project) = session.selected().cloned() else {
        session.notify_error("Please select a valid project.");
        return;
    };

    match api.upload_files(&project, paths) {
        Ok(()) => {
            info!(project = %project.name, count = paths.len(), "files uploaded");
            session.notify_success(format!("Uploaded {} file(s).", paths.len()));
            session.refresh(api);
        }
        Err(e) => {
            warn!(project = %project.name, error = %e, "file upload failed");
            session.notify_error(format!("Upload failed: {e}"));
        }
    }
}

/// Upload the manual text buffer as a supporting document
pub fn upload_manual_text(session: &mut Session, api: &dyn ProjectApi) {
    let text = session.manual_text.trim().to_string();
    if text.is_empty() {
        session.notify_info("Please add some supporting text first.");
        return;
    }
    let Some(project) = session.selected().cloned() else {
        session.notify_error("Please select a valid project.");
        return;
    };

    match api.upload_text(&project, &text) {
        Ok(()) => {
            info!(project = %project.name, chars = text.len(), "supporting text uploaded");
            session.manual_text.clear();
            session.notify_success("Supporting text added.");
            session.refresh(api);
        }
        Err(e) => {
            warn!(project = %project.name, error = %e, "text upload failed");
            session.notify_error(format!("Upload failed: {e}"));
        }
    }
}
