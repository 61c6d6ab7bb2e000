//! Generated project model
//!
//! The generation service returns a project as a flat list of files. These
//! types mirror that wire shape (`projectName`, `description`, `files`) and
//! are replaced wholesale on every successful generation.

use serde::{Deserialize, Serialize};

use crate::file_tree::normalize_path;

/// Name used when a path has no usable final segment
pub const DOWNLOAD_FALLBACK_NAME: &str = "download";

/// A single generated file: a relative `/`-separated path and its full text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Name to use when saving this file on its own
    pub fn download_name(&self) -> &str {
        download_file_name(&self.path)
    }
}

/// Result of one generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStructure {
    /// Slugified project name, used as the export folder name
    pub project_name: String,

    /// Short summary of what was generated
    #[serde(default)]
    pub description: String,

    /// Files in the order the service returned them
    pub files: Vec<GeneratedFile>,
}

impl ProjectStructure {
    /// File to show first after a generation.
    ///
    /// The first file (in list order) whose path contains `readme` in any
    /// case, else the first file, else `None`.
    pub fn initial_file(&self) -> Option<&GeneratedFile> {
        self.files
            .iter()
            .find(|f| f.path.to_lowercase().contains("readme"))
            .or_else(|| self.files.first())
    }

    /// Look up a file by path, ignoring empty segments. Duplicates resolve
    /// to the first entry.
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        let wanted = normalize_path(path);
        self.files.iter().find(|f| normalize_path(&f.path) == wanted)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Final path segment, or `"download"` when the path ends in `/` or is empty.
pub fn download_file_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => DOWNLOAD_FALLBACK_NAME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(paths: &[&str]) -> ProjectStructure {
        ProjectStructure {
            project_name: "demo".to_string(),
            description: String::new(),
            files: paths
                .iter()
                .map(|p| GeneratedFile::new(*p, format!("# {p}")))
                .collect(),
        }
    }

    #[test]
    fn test_initial_file_prefers_readme() {
        let p = project(&["main.py", "docs/README.md"]);
        assert_eq!(p.initial_file().unwrap().path, "docs/README.md");
    }

    #[test]
    fn test_initial_file_readme_match_is_case_insensitive() {
        let p = project(&["src/app.py", "ReadMe.txt"]);
        assert_eq!(p.initial_file().unwrap().path, "ReadMe.txt");
    }

    #[test]
    fn test_initial_file_first_readme_in_list_order() {
        let p = project(&["b/README.md", "a/README.md"]);
        assert_eq!(p.initial_file().unwrap().path, "b/README.md");
    }

    #[test]
    fn test_initial_file_falls_back_to_first() {
        let p = project(&["setup.py", "main.py"]);
        assert_eq!(p.initial_file().unwrap().path, "setup.py");
    }

    #[test]
    fn test_initial_file_none_for_empty_project() {
        let p = project(&[]);
        assert!(p.initial_file().is_none());
        assert!(p.is_empty());
    }

    #[test]
    fn test_file_lookup_returns_first_duplicate() {
        let mut p = project(&[]);
        p.files.push(GeneratedFile::new("x.py", "v1"));
        p.files.push(GeneratedFile::new("x.py", "v2"));
        assert_eq!(p.file("x.py").unwrap().content, "v1");
        assert!(p.file("y.py").is_none());
    }

    #[test]
    fn test_file_lookup_ignores_empty_segments() {
        let p = project(&["docs//README.md"]);
        assert!(p.file("docs/README.md").is_some());
        assert!(p.file("/docs/README.md").is_some());
    }

    #[test]
    fn test_download_file_name() {
        assert_eq!(download_file_name("src/pkg/main.py"), "main.py");
        assert_eq!(download_file_name("README.md"), "README.md");
        assert_eq!(download_file_name("src/"), "download");
        assert_eq!(download_file_name(""), "download");
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "projectName": "todo-app",
            "description": "A todo list",
            "files": [{"path": "README.md", "content": "hi"}]
        }"#;
        let p: ProjectStructure = serde_json::from_str(json).unwrap();
        assert_eq!(p.project_name, "todo-app");
        assert_eq!(p.description, "A todo list");
        assert_eq!(p.files[0].download_name(), "README.md");
    }

    #[test]
    fn test_deserialize_without_description() {
        let json = r#"{"projectName": "x", "files": []}"#;
        let p: ProjectStructure = serde_json::from_str(json).unwrap();
        assert!(p.description.is_empty());
    }

    #[test]
    fn test_deserialize_requires_files() {
        let json = r#"{"projectName": "x", "description": "y"}"#;
        assert!(serde_json::from_str::<ProjectStructure>(json).is_err());
    }
}
