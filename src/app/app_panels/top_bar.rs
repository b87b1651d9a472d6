use crate::app::Sliverhand;
use crate::session::Command;
use crate::ui::responsive::LayoutMode;
use crate::ui::theme;

use eframe::egui::RichText;
use eframe::egui::{self, Ui};
use egui_phosphor::regular as icons;

impl Sliverhand {
    pub fn display_panel_top(&mut self, ui: &mut Ui) {
        let title = match LayoutMode::from_ui(ui).is_narrow() {
            true => "Sliverhand",
            false => "Sliverhand - Your Customized AI Essay Writer",
        };

        ui.horizontal(|ui| {
            ui.add_space(4.0);
            ui.label(RichText::new(title).strong().size(18.0).color(theme::ACCENT));

            // === Right Side: Close, Version, Refresh ===
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let close_btn = ui
                    .add(egui::Button::new(icons::X).min_size(egui::vec2(28.0, 28.0)))
                    .on_hover_text("Close");
                if close_btn.clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }

                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .small()
                        .weak(),
                );

                if self.session.credentials_ok {
                    ui.add_space(8.0);
                    let refresh_btn = ui
                        .add(
                            egui::Button::new(icons::ARROW_CLOCKWISE)
                                .min_size(egui::vec2(28.0, 28.0)),
                        )
                        .on_hover_text("Refresh projects and files");
                    if refresh_btn.clicked() {
                        self.queue(Command::Refresh);
                    }

                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(self.session.current_page.title()).color(theme::TEXT_MUTED),
                    );
                }
            });
        });
    }
}
