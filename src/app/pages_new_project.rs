use super::Sliverhand;
use super::app::section_heading;
use crate::router::NavAction;
use crate::session::Command;
use crate::ui::responsive;

use eframe::egui::{self, Ui};

impl Sliverhand {
    pub fn display_page_new_project(&mut self, ui: &mut Ui) {
        self.back_button(ui, "Back to Home", NavAction::BackToHome);
        section_heading(ui, "Create Project");

        let width = responsive::text_input_width(ui, 0.0, 240.0);

        ui.label("Enter your project name here");
        let name_edit = ui.add(
            egui::TextEdit::singleline(&mut self.session.project_name)
                .hint_text("Project name")
                .desired_width(width),
        );
        ui.add_space(8.0);

        ui.label("Enter your project description here");
        ui.add(
            egui::TextEdit::multiline(&mut self.session.project_description)
                .desired_rows(5)
                .desired_width(width),
        );
        ui.add_space(8.0);

        let enter_pressed =
            name_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Create").clicked() || enter_pressed {
            self.queue(Command::CreateProject);
        }
    }
}
