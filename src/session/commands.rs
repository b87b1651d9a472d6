//! Command dispatch

use super::pipelines;
use super::pure::toggle_name;
use super::{Command, Session};
use crate::api::ProjectApi;
use crate::router::{NavAction, Page, RouterError, transition};
use tracing::{debug, info};

impl Session {
    /// Apply one command and return the page current afterwards
    pub fn dispatch(&mut self, api: &dyn ProjectApi, command: Command) -> Page {
        debug!(?command, page = %self.current_page, "dispatch");
        match command {
            Command::Navigate(action) => {
                let _ = self.navigate(action);
            }
            Command::CheckCredentials => {
                if self.check_credentials(api) {
                    self.refresh(api);
                }
            }
            Command::Refresh => {
                self.refresh(api);
            }
            Command::CreateProject => {
                pipelines::create_project(self, api);
            }
            Command::SelectProject(name) => self.select_project(&name),
            Command::ToggleFile(name) => {
                if self.files.iter().any(|f| f.name == name) {
                    toggle_name(&mut self.selected_files, &name);
                }
            }
            Command::ToggleDeleteCandidate(name) => {
                toggle_name(&mut self.projects_to_delete, &name);
                if self.projects_to_delete.is_empty() {
                    self.delete_confirmed = false;
                }
            }
            Command::SetDeleteConfirmed(confirmed) => self.delete_confirmed = confirmed,
            Command::DeleteSelectedProjects => {
                pipelines::delete_selected_projects(self, api);
            }
            Command::LoadQuestions => {
                self.load_questions(api);
            }
            Command::ReloadQuestions => {
                self.reload_questions(api);
            }
            Command::AddQuestions => {
                pipelines::add_questions(self, api);
            }
            Command::RemoveQuestion(index) => pipelines::remove_question(self, index),
            Command::AnswerQuestion(index) => pipelines::answer_question(self, api, index),
            Command::SaveQuestions => {
                pipelines::save_questions(self, api);
            }
            Command::UploadFiles(paths) => pipelines::upload_files(self, api, &paths),
            Command::UploadManualText => pipelines::upload_manual_text(self, api),
            Command::DismissNotice(index) => {
                if index < self.notices.len() {
                    self.notices.remove(index);
                }
            }
        }
        self.current_page
    }

    /// Move to the page `action` leads to. Rejected actions keep the page.
    pub(crate) fn navigate(&mut self, action: NavAction) -> Result<Page, RouterError> {
        let from = self.current_page;
        match transition(from, action, self.nav_context()) {
            Ok(to) => {
                info!(from = %from, to = %to, "navigate");
                self.current_page = to;
                Ok(to)
            }
            Err(e) => {
                debug!(from = %from, %action, error = %e, "navigation rejected");
                self.notify_info(capitalize(&e.to_string()));
                Err(e)
            }
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
