//! eframe::App implementation for Sliverhand

use super::Sliverhand;
use crate::router::Page;
use crate::ui::theme;
use eframe::egui;

impl eframe::App for Sliverhand {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title_panel")
            .frame(
                egui::Frame::NONE
                    .fill(theme::BG_MID)
                    .inner_margin(egui::Margin::symmetric(12, 6)),
            )
            .show(ctx, |ui| {
                self.display_panel_top(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(theme::BG_DARK)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                self.display_notices(ui);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        // Nothing renders until the API accepted the credentials
                        if !self.session.credentials_ok {
                            self.display_credentials_panel(ui);
                            return;
                        }
                        match self.session.current_page {
                            Page::Landing => self.display_page_landing(ui),
                            Page::NewProject => self.display_page_new_project(ui),
                            Page::Archived => self.display_page_archived(ui),
                            Page::ProjectWorkspace => self.display_page_workspace(ui),
                        }
                    });
            });

        // Widgets only queue commands; state changes happen here, after the frame is laid out
        if self.flush_commands() {
            ctx.request_repaint();
        }
    }
}
