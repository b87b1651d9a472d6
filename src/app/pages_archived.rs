mod manage;

use super::Sliverhand;
use super::app::section_heading;
use crate::router::NavAction;
use crate::session::Command;
use crate::ui::responsive;
use crate::ui::theme;

use eframe::egui::{self, RichText, Ui};

impl Sliverhand {
    pub fn display_page_archived(&mut self, ui: &mut Ui) {
        self.back_button(ui, "Back to Home", NavAction::BackToHome);

        if self.session.projects.is_empty() {
            ui.add_space(8.0);
            ui.label("No projects found. Please create a new project first.");
            return;
        }

        section_heading(ui, "Select project");
        let names: Vec<String> = self.session.projects.iter().map(|p| p.name.clone()).collect();
        let selected_text = self
            .session
            .selected_project
            .clone()
            .unwrap_or_else(|| "Select your project".to_string());
        let width = responsive::combo_width(ui, 260.0, 140.0);

        let mut picked = None;
        egui::ComboBox::from_id_salt("project_select")
            .width(width)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for name in &names {
                    let is_current =
                        self.session.selected_project.as_deref() == Some(name.as_str());
                    if ui.selectable_label(is_current, name.as_str()).clicked() {
                        picked = Some(name.clone());
                    }
                }
            });
        if let Some(name) = picked {
            self.queue(Command::SelectProject(name));
        }

        if let Some(project) = self.session.selected().cloned() {
            ui.add_space(8.0);
            ui.label(RichText::new("Project Description:").strong());
            if project.description.is_empty() {
                ui.label(RichText::new("No description").color(theme::TEXT_MUTED));
            } else {
                ui.label(project.description.as_str());
            }
            ui.add_space(8.0);
            if ui.button("Open Project Workspace").clicked() {
                self.queue(Command::Navigate(NavAction::OpenWorkspace));
            }
        }

        ui.add_space(12.0);
        ui.separator();
        section_heading(ui, "Manage Projects");
        self.display_project_management(ui);
    }
}
