//! Responsive layout utilities for adapting UI to available width
//!
//! Provides breakpoint-based layout decisions for egui UI elements.

use eframe::egui::Ui;

/// Layout mode based on available width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// >600px - full layout, generous spacing
    Wide,
    /// 400-600px - reduced spacing
    Medium,
    /// <400px - minimal spacing, shortened labels
    Narrow,
}

impl LayoutMode {
    /// Determine layout mode from pixel width
    pub fn from_width(width: f32) -> Self {
        if width > 600.0 {
            LayoutMode::Wide
        } else if width > 400.0 {
            LayoutMode::Medium
        } else {
            LayoutMode::Narrow
        }
    }

    /// Determine layout mode from UI's available width
    pub fn from_ui(ui: &Ui) -> Self {
        Self::from_width(ui.available_width())
    }

    pub fn is_narrow(&self) -> bool {
        matches!(self, LayoutMode::Narrow)
    }
}

fn combo_width_for(available: f32, ideal: f32, min: f32) -> f32 {
    match LayoutMode::from_width(available) {
        LayoutMode::Wide => ideal,
        LayoutMode::Medium => (ideal * 0.8).max(min),
        LayoutMode::Narrow => (available * 0.6).clamp(min, ideal),
    }
}

fn button_width_for(available: f32, ideal: f32, min: f32) -> f32 {
    match LayoutMode::from_width(available) {
        LayoutMode::Wide => ideal,
        LayoutMode::Medium => (ideal * 0.85).max(min),
        LayoutMode::Narrow => min,
    }
}

/// Calculate responsive width for a ComboBox
///
/// - Wide: returns ideal width
/// - Medium: returns 80% of ideal (clamped to min)
/// - Narrow: returns 60% of available width (clamped between min and ideal)
pub fn combo_width(ui: &Ui, ideal: f32, min: f32) -> f32 {
    combo_width_for(ui.available_width(), ideal, min)
}

/// Calculate responsive width for a button
pub fn button_width(ui: &Ui, ideal: f32, min: f32) -> f32 {
    button_width_for(ui.available_width(), ideal, min)
}

/// Width that fills available space minus reserved space for labels
pub fn text_input_width(ui: &Ui, label_reserve: f32, min: f32) -> f32 {
    (ui.available_width() - label_reserve).max(min)
}

/// Truncate text to max characters with ellipsis if needed
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else if max_len > 3 {
        let kept: String = text.chars().take(max_len - 3).collect();
        format!("{kept}...")
    } else {
        text.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_breakpoints() {
        assert_eq!(LayoutMode::from_width(800.0), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_width(600.0), LayoutMode::Medium);
        assert_eq!(LayoutMode::from_width(401.0), LayoutMode::Medium);
        assert_eq!(LayoutMode::from_width(400.0), LayoutMode::Narrow);
        assert!(LayoutMode::Narrow.is_narrow());
    }

    #[test]
    fn test_widths_by_mode() {
        assert_eq!(button_width_for(900.0, 320.0, 180.0), 320.0);
        assert_eq!(button_width_for(500.0, 320.0, 180.0), 272.0);
        assert_eq!(button_width_for(300.0, 320.0, 180.0), 180.0);
        assert_eq!(combo_width_for(900.0, 260.0, 140.0), 260.0);
        assert_eq!(combo_width_for(300.0, 260.0, 140.0), 180.0);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("notes.txt", 20), "notes.txt");
        assert_eq!(truncate_text("a-very-long-file-name.pdf", 10), "a-very-...");
        assert_eq!(truncate_text("résumé-final.pdf", 8), "résum...");
        assert_eq!(truncate_text("abcdef", 2), "ab");
    }
}
