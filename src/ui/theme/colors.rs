//! Color palette and frame helpers

use crate::session::NoticeLevel;
use eframe::egui::{self, Color32, Margin, Stroke};

pub const BG_DARK: Color32 = Color32::from_rgb(22, 24, 29);
pub const BG_MID: Color32 = Color32::from_rgb(30, 33, 40);
pub const BG_LIGHT: Color32 = Color32::from_rgb(44, 48, 58);
pub const ACCENT: Color32 = Color32::from_rgb(120, 170, 255);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(140, 146, 158);
pub const SUCCESS: Color32 = Color32::from_rgb(110, 200, 130);
pub const ERROR: Color32 = Color32::from_rgb(230, 95, 95);

pub fn notice_color(level: NoticeLevel) -> Color32 {
    match level {
        NoticeLevel::Info => ACCENT,
        NoticeLevel::Success => SUCCESS,
        NoticeLevel::Error => ERROR,
    }
}

/// Rounded panel used for prompt cards and notices
pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(BG_MID)
        .corner_radius(6)
        .inner_margin(Margin::symmetric(12, 8))
        .stroke(Stroke::new(1.0, BG_LIGHT))
}

pub fn apply_theme(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_DARK;
    visuals.window_fill = BG_MID;
    visuals.extreme_bg_color = BG_DARK;
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals.hyperlink_color = ACCENT;
    ctx.set_visuals(visuals);
}
