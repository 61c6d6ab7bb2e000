//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use pyarch_app::config::IconMode;
use pyarch_core::Language;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn logo(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{e73c}", // nf-dev-python
            IconMode::Unicode => "\u{25c6}",   // ◆
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f120}", // nf-fa-terminal
            IconMode::Unicode => "\u{276f}",   // ❯
        }
    }

    // --- Explorer ---

    pub fn folder(&self, expanded: bool) -> &'static str {
        match (self.mode, expanded) {
            (IconMode::NerdFonts, true) => "\u{f07c}", // nf-fa-folder_open
            (IconMode::NerdFonts, false) => "\u{f07b}", // nf-fa-folder
            (IconMode::Unicode, true) => "\u{25be}",   // ▾
            (IconMode::Unicode, false) => "\u{25b8}",  // ▸
        }
    }

    pub fn file(&self, language: Language) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => match language {
                Language::Python => "\u{e606}",     // nf-seti-python
                Language::Json => "\u{e60b}",       // nf-seti-json
                Language::Markdown => "\u{e609}",   // nf-seti-markdown
                Language::Html => "\u{e60e}",       // nf-seti-html
                Language::Css => "\u{e614}",        // nf-seti-css
                Language::Javascript => "\u{e60c}", // nf-seti-javascript
                Language::Yaml => "\u{e6a8}",       // nf-seti-yml
                Language::Text => "\u{f15c}",       // nf-fa-file_text
            },
            IconMode::Unicode => match language {
                Language::Python => "py",
                Language::Json => "{}",
                Language::Markdown => "md",
                Language::Html => "<>",
                Language::Css => "#",
                Language::Javascript => "js",
                Language::Yaml => "ym",
                Language::Text => "\u{00b7}", // ·
            },
        }
    }

    // --- Viewer actions ---

    pub fn copy(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c5}", // nf-fa-copy
            IconMode::Unicode => "\u{29c9}",   // ⧉
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn download(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f019}", // nf-fa-download
            IconMode::Unicode => "\u{2193}",   // ↓
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_icons_are_not_private_use() {
        let icons = IconSet::new(IconMode::Unicode);
        let all = [
            icons.logo(),
            icons.prompt(),
            icons.folder(true),
            icons.folder(false),
            icons.file(Language::Python),
            icons.copy(),
            icons.check(),
            icons.download(),
            icons.alert(),
        ];
        for icon in all {
            assert!(
                icon.chars().all(|c| !('\u{e000}'..='\u{f8ff}').contains(&c)),
                "{:?} is a private-use glyph",
                icon
            );
        }
    }

    #[test]
    fn test_folder_icon_tracks_expansion() {
        let icons = IconSet::new(IconMode::NerdFonts);
        assert_ne!(icons.folder(true), icons.folder(false));
    }

    #[test]
    fn test_file_icons_per_language() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.file(Language::Python), "py");
        assert_eq!(icons.file(Language::Markdown), "md");
    }
}
