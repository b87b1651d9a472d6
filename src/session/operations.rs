//! Atomic API operations on the session

use super::Session;
use super::pure::retain_known_files;
use crate::api::{Project, ProjectApi};
use tracing::{info, warn};

impl Session {
    /// Verify the session credentials before any page renders
    pub(crate) fn check_credentials(&mut self, api: &dyn ProjectApi) -> bool {
        if !self.credentials.is_complete() {
            self.credentials_ok = false;
            return false;
        }
        self.credentials_ok = match api.check_credentials(&self.credentials) {
            Ok(true) => true,
            Ok(false) => {
                self.notify_error("The API rejected these credentials.");
                false
            }
            Err(e) => {
                warn!(error = %e, "credential check failed");
                self.notify_error(format!("Could not verify credentials: {e}"));
                false
            }
        };
        info!(ok = self.credentials_ok, "credentials checked");
        self.credentials_ok
    }

    /// Replace the cached project and file lists. On failure the previous
    /// lists are kept.
    pub(crate) fn refresh(&mut self, api: &dyn ProjectApi) -> bool {
        match api.fetch_data(&self.credentials) {
            Ok(data) => {
                info!(
                    projects = data.projects.len(),
                    files = data.files.len(),
                    "project data refreshed"
                );
                self.projects = data.projects;
                self.files = data.files;
                retain_known_files(&mut self.selected_files, &self.files);
                self.projects_to_delete
                    .retain(|name| self.projects.iter().any(|p| &p.name == name));
                self.clear_stale_selection();
                true
            }
            Err(e) => {
                warn!(error = %e, "project data refresh failed");
                self.notify_error(format!("Could not load projects: {e}"));
                false
            }
        }
    }

    /// Make sure the prompt cache holds the selected project's prompts.
    ///
    /// Returns false when nothing valid is selected or the prompts could not
    /// be loaded. After a failure nothing is fetched until a reload.
    pub(crate) fn load_questions(&mut self, api: &dyn ProjectApi) -> bool {
        let Some(project) = self.selected().cloned() else {
            return false;
        };
        if self.questions_for == Some(project.id) {
            return true;
        }
        if self.questions_failed_for == Some(project.id) {
            return false;
        }
        // Cached prompts of any other project are not this project's data
        self.questions.clear();
        self.fetch_questions(api, &project)
    }

    /// Fetch the selected project's prompts even when cached. A failed
    /// reload keeps a cache that still belongs to the project.
    pub(crate) fn reload_questions(&mut self, api: &dyn ProjectApi) -> bool {
        let Some(project) = self.selected().cloned() else {
            return false;
        };
        self.questions_failed_for = None;
        if self.questions_for != Some(project.id) {
            self.questions.clear();
        }
        self.fetch_questions(api, &project)
    }

    fn fetch_questions(&mut self, api: &dyn ProjectApi, project: &Project) -> bool {
        match api.get_questions(project) {
            Ok(questions) => {
                info!(project = %project.name, count = questions.len(), "prompts loaded");
                self.questions = questions;
                self.questions_for = Some(project.id);
                self.questions_failed_for = None;
                true
            }
            Err(e) => {
                warn!(project = %project.name, error = %e, "prompt load failed");
                if self.questions_for != Some(project.id) {
                    self.questions_failed_for = Some(project.id);
                }
                self.notify_error(format!("Could not load prompts: {e}"));
                false
            }
        }
    }
}
