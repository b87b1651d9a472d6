pub mod colors;

// Re-export the palette and frame helpers
pub use colors::{
    ACCENT, BG_DARK, BG_LIGHT, BG_MID, ERROR, TEXT_MUTED, apply_theme, card_frame, notice_color,
};
