//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 12, 16); // Terminal background
pub const CARD_BG: Color = Color::Rgb(18, 21, 28); // Panel/card backgrounds
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Modal/popup backgrounds
pub const GUTTER_BG: Color = Color::Rgb(14, 17, 22); // Line number gutter

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(45, 51, 59); // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Rgb(88, 166, 255); // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(88, 166, 255); // Primary accent
pub const ACCENT_DIM: Color = Color::Rgb(56, 107, 163); // Dimmed accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(201, 209, 217);
pub const TEXT_SECONDARY: Color = Color::Rgb(125, 133, 144);
pub const TEXT_MUTED: Color = Color::Rgb(72, 79, 88);
pub const TEXT_BRIGHT: Color = Color::Rgb(240, 246, 252);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129); // Success / copied
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94); // Errors
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8); // Key hints
pub const STATUS_BLUE: Color = Color::Rgb(56, 189, 248); // Info

// --- Selection ---
pub const SELECTED_ROW_BG: Color = Color::Rgb(33, 45, 64);
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- File type accents ---
pub const LANG_PYTHON: Color = Color::Rgb(255, 212, 59);
pub const LANG_JSON: Color = Color::Rgb(250, 204, 21);
pub const LANG_MARKDOWN: Color = Color::Rgb(56, 189, 248);
pub const LANG_WEB: Color = Color::Rgb(251, 146, 60); // html/css/js
pub const LANG_YAML: Color = Color::Rgb(192, 132, 252);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_colors_differ() {
        assert_ne!(BORDER_DIM, BORDER_ACTIVE);
        assert_ne!(SELECTED_ROW_BG, CARD_BG);
    }
}
