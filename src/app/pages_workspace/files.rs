//! Source file selection and uploads

use crate::app::Sliverhand;
use crate::app::app::section_heading;
use crate::session::Command;
use crate::ui::responsive::truncate_text;
use crate::ui::theme;

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

const FILE_LABEL_LEN: usize = 40;

impl Sliverhand {
    pub(super) fn display_workspace_files(&mut self, ui: &mut Ui) {
        section_heading(ui, "Select what files you want to use");

        if self.session.files.is_empty() {
            ui.label("No files found, please upload files.");
        } else {
            ui.label(
                RichText::new(
                    "Select your files that have been uploaded to use as your knowledge base",
                )
                .color(theme::TEXT_MUTED),
            );
            let names: Vec<String> = self.session.files.iter().map(|f| f.name.clone()).collect();
            ui.horizontal_wrapped(|ui| {
                for name in &names {
                    let mut checked = self.session.selected_files.contains(name);
                    let response = ui
                        .checkbox(&mut checked, truncate_text(name, FILE_LABEL_LEN))
                        .on_hover_text(name.as_str());
                    if response.changed() {
                        self.queue(Command::ToggleFile(name.clone()));
                    }
                }
            });
        }

        ui.add_space(8.0);
        ui.label(RichText::new("Want more files to work with?").strong());
        let toggle_text = match self.session.show_upload_panel {
            true => "Hide",
            false => "Add New",
        };
        if ui.button(toggle_text).clicked() {
            self.session.show_upload_panel = !self.session.show_upload_panel;
        }
        if self.session.show_upload_panel {
            self.display_upload_panel(ui);
        }
    }

    fn display_upload_panel(&mut self, ui: &mut Ui) {
        ui.add_space(6.0);
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label("Please upload your files");
            if ui.button(format!("{} Choose files...", icons::UPLOAD_SIMPLE)).clicked() {
                let picked = rfd::FileDialog::new()
                    .set_title("Select files to upload")
                    .add_filter("Documents", &["pdf", "txt"])
                    .pick_files();
                if let Some(paths) = picked {
                    self.queue(Command::UploadFiles(paths));
                }
            }

            ui.add_space(8.0);
            ui.label("Please add supporting text");
            ui.add(
                egui::TextEdit::multiline(&mut self.session.manual_text)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            if ui.button("Submit").clicked() {
                self.queue(Command::UploadManualText);
            }
        });
    }
}
