//! Path classification
//!
//! Maps a file path to a coarse content-type label by suffix. Matching is
//! case-sensitive and rules are checked in order; anything unmatched is text.

use serde::Serialize;

/// Content-type label for a generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Json,
    Markdown,
    Text,
    Html,
    Css,
    Javascript,
    Yaml,
}

const SUFFIX_RULES: &[(&str, Language)] = &[
    (".py", Language::Python),
    (".json", Language::Json),
    (".md", Language::Markdown),
    (".txt", Language::Text),
    (".html", Language::Html),
    (".css", Language::Css),
    (".js", Language::Javascript),
    (".yml", Language::Yaml),
    (".yaml", Language::Yaml),
];

/// Classify a path by its suffix
pub fn classify(path: &str) -> Language {
    SUFFIX_RULES
        .iter()
        .find(|(suffix, _)| path.ends_with(suffix))
        .map(|(_, language)| *language)
        .unwrap_or(Language::Text)
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::Text => "text",
            Language::Html => "html",
            Language::Css => "css",
            Language::Javascript => "javascript",
            Language::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
