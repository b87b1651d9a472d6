use super::Sliverhand;
use crate::router::NavAction;
use crate::session::Command;
use crate::ui::responsive::{self, LayoutMode};
use crate::ui::theme;

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

impl Sliverhand {
    pub fn display_page_landing(&mut self, ui: &mut Ui) {
        let narrow = LayoutMode::from_ui(ui).is_narrow();

        ui.vertical_centered(|ui| {
            ui.add_space(if narrow { 16.0 } else { 48.0 });
            ui.label(
                RichText::new("Start a new essay project or pick up an existing one.")
                    .color(theme::TEXT_MUTED),
            );
            ui.add_space(16.0);

            let width = responsive::button_width(ui, 320.0, 180.0);
            let new_btn = ui.add(
                egui::Button::new(RichText::new(format!("{} New Project", icons::PLUS)).size(16.0))
                    .min_size(egui::vec2(width, 40.0)),
            );
            if new_btn.clicked() {
                self.queue(Command::Navigate(NavAction::NewProject));
            }

            ui.add_space(12.0);
            let archived_btn = ui.add(
                egui::Button::new(
                    RichText::new(format!("{} Work on an Archived Project", icons::ARCHIVE))
                        .size(16.0),
                )
                .min_size(egui::vec2(width, 40.0)),
            );
            if archived_btn.clicked() {
                self.queue(Command::Navigate(NavAction::OpenArchived));
            }
        });
    }
}
