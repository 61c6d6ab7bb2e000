//! Custom widgets for the TUI

mod code_viewer;
mod error_panel;
mod file_explorer;
mod header;
mod prompt_panel;
mod status_bar;

pub use code_viewer::CodeViewer;
pub use error_panel::ErrorPanel;
pub use file_explorer::FileExplorer;
pub use header::MainHeader;
pub use prompt_panel::{wrap_to_width, PromptPanel};
pub use status_bar::StatusBar;

/// Truncate `s` to at most `max_chars` characters on a char boundary
pub(crate) fn truncate_str(s: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 3), "hel");
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("héllo", 2), "hé");
        assert_eq!(truncate_str("hello", 0), "");
    }
}
