mod files;
mod prompts;

use super::Sliverhand;
use super::app::section_heading;
use crate::router::{NavAction, WorkspaceView, resolve_workspace};
use crate::session::Command;
use crate::ui::theme;

use eframe::egui::{RichText, Ui};

impl Sliverhand {
    pub fn display_page_workspace(&mut self, ui: &mut Ui) {
        self.back_button(ui, "Back to Projects", NavAction::BackToProjects);

        let view = resolve_workspace(
            &self.session.projects,
            self.session.selected_project.as_deref(),
        );
        let project = match view {
            WorkspaceView::Ready(project) => project.clone(),
            WorkspaceView::NoProjects => {
                ui.add_space(8.0);
                ui.label("No projects found. Please create a new project first.");
                self.back_button(ui, "Back to Home", NavAction::BackToHome);
                return;
            }
            WorkspaceView::InvalidSelection => {
                ui.add_space(8.0);
                ui.label("Please select a valid project.");
                return;
            }
        };

        let cached = self.session.questions_for == Some(project.id);
        let failed = self.session.questions_failed_for == Some(project.id);
        if !cached && !failed {
            self.queue(Command::LoadQuestions);
        }

        section_heading(ui, &format!("Project: {}", project.name));
        if !project.description.is_empty() {
            ui.label(RichText::new(project.description.as_str()).color(theme::TEXT_MUTED));
        }

        ui.separator();
        self.display_workspace_files(ui);
        ui.separator();
        self.display_workspace_prompts(ui);
    }
}
