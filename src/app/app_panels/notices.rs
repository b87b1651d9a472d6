use crate::app::Sliverhand;
use crate::session::Command;
use crate::ui::theme;

use eframe::egui::{self, RichText, Stroke, Ui};
use egui_phosphor::regular as icons;

impl Sliverhand {
    /// Banner list above the page; each entry can be dismissed
    pub fn display_notices(&mut self, ui: &mut Ui) {
        if self.session.notices.is_empty() {
            return;
        }

        let mut dismissed = None;
        for (i, notice) in self.session.notices.iter().enumerate() {
            let color = theme::notice_color(notice.level);
            theme::card_frame()
                .stroke(Stroke::new(1.0, color))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&notice.text).color(color));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button(icons::X).on_hover_text("Dismiss").clicked() {
                                dismissed = Some(i);
                            }
                        });
                    });
                });
            ui.add_space(4.0);
        }
        ui.add_space(8.0);

        if let Some(i) = dismissed {
            self.queue(Command::DismissNotice(i));
        }
    }
}
