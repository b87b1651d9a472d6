//! Helper methods for Sliverhand

use super::Sliverhand;
use crate::router::NavAction;
use crate::session::Command;
use eframe::egui::{RichText, Ui};
use egui_phosphor::regular as icons;

impl Sliverhand {
    /// "← Label" button that queues a navigation action
    pub(crate) fn back_button(&mut self, ui: &mut Ui, label: &str, action: NavAction) {
        if ui.button(format!("{} {}", icons::ARROW_LEFT, label)).clicked() {
            self.queue(Command::Navigate(action));
        }
    }
}

pub(crate) fn section_heading(ui: &mut Ui, text: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(text).strong().size(18.0));
    ui.add_space(4.0);
}
