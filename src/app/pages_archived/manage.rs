//! Batch delete controls on the archived page

use crate::app::Sliverhand;
use crate::session::Command;
use crate::ui::theme;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_phosphor::regular as icons;

const CONFIRM_TEXT: &str =
    "I understand that this action cannot be undone and I want to delete the selected projects";

impl Sliverhand {
    pub(super) fn display_project_management(&mut self, ui: &mut Ui) {
        egui::CollapsingHeader::new("Project Management")
            .default_open(false)
            .show(ui, |ui| {
                ui.label("Select projects to delete");
                let names: Vec<String> =
                    self.session.projects.iter().map(|p| p.name.clone()).collect();
                for name in &names {
                    let mut checked = self.session.projects_to_delete.contains(name);
                    if ui.checkbox(&mut checked, name.as_str()).changed() {
                        self.queue(Command::ToggleDeleteCandidate(name.clone()));
                    }
                }

                let has_candidates = !self.session.projects_to_delete.is_empty();
                if has_candidates {
                    ui.add_space(6.0);
                    let mut confirmed = self.session.delete_confirmed;
                    if ui.checkbox(&mut confirmed, CONFIRM_TEXT).changed() {
                        self.queue(Command::SetDeleteConfirmed(confirmed));
                    }
                }

                ui.add_space(6.0);
                let enabled = has_candidates && self.session.delete_confirmed;
                let (text_color, fill) = match enabled {
                    true => (Color32::WHITE, theme::ERROR),
                    false => (theme::TEXT_MUTED, theme::BG_LIGHT),
                };
                let delete_btn = egui::Button::new(
                    RichText::new(format!("{} Delete Selected Projects", icons::TRASH))
                        .color(text_color),
                )
                .fill(fill);
                if ui.add_enabled(enabled, delete_btn).clicked() {
                    self.queue(Command::DeleteSelectedProjects);
                }

                if let Some(report) = &self.session.last_delete_report {
                    if report.failure_count() > 0 {
                        ui.label(
                            RichText::new(format!(
                                "{} of {} deletion(s) failed",
                                report.failure_count(),
                                report.requested.len()
                            ))
                            .small()
                            .color(theme::ERROR),
                        );
                    }
                }
            });
    }
}
