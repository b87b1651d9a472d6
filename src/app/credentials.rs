use super::Sliverhand;
use super::app::section_heading;
use crate::ui::responsive;
use crate::ui::theme;

use eframe::egui::{self, RichText, Ui};

const MAX_FIELD_WIDTH: f32 = 420.0;

impl Sliverhand {
    /// Shown until the API accepts the stored credentials
    pub fn display_credentials_panel(&mut self, ui: &mut Ui) {
        section_heading(ui, "Sign in");
        ui.label(
            RichText::new(format!("API: {}", self.options.api_base_url))
                .small()
                .color(theme::TEXT_MUTED),
        );
        ui.add_space(8.0);

        let width = responsive::text_input_width(ui, 0.0, 240.0).min(MAX_FIELD_WIDTH);

        ui.label("Username");
        ui.add(
            egui::TextEdit::singleline(&mut self.credentials_draft.username).desired_width(width),
        );
        ui.add_space(4.0);
        ui.label("API key");
        let key_edit = ui.add(
            egui::TextEdit::singleline(&mut self.credentials_draft.api_key)
                .password(true)
                .desired_width(width),
        );
        ui.add_space(8.0);

        let ready = self.credentials_draft.is_complete();
        let enter_pressed = key_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let save_clicked = ui
            .add_enabled(ready, egui::Button::new("Save and continue"))
            .clicked();
        if save_clicked || (ready && enter_pressed) {
            self.save_credentials();
        }
    }
}
