//! Writing generated files to disk
//!
//! Two operations: saving the selected file on its own (the "download"),
//! and writing the whole project as a directory tree. Existing files are
//! never overwritten; a numbered name is picked instead.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use pyarch_core::prelude::*;
use pyarch_core::{build_file_tree, FileNode, NodeKind, ProjectStructure};

/// Folder name used when the project name has no usable characters
pub const FALLBACK_PROJECT_DIR: &str = "project";

static UNSAFE_DIR_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("Invalid directory name regex"));

/// Filesystem-safe folder name for a project
pub fn project_dir_name(project_name: &str) -> String {
    let replaced = UNSAFE_DIR_CHARS.replace_all(project_name.trim(), "-");
    let trimmed = replaced.trim_matches(|c| c == '-' || c == '.');
    if trimmed.is_empty() {
        FALLBACK_PROJECT_DIR.to_string()
    } else {
        trimmed.to_string()
    }
}

/// First of `path`, `stem (1).ext`, `stem (2).ext`, ... that does not exist
pub fn unique_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    (1..)
        .map(|n| parent.join(format!("{} ({}){}", stem, n, ext)))
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

/// Reject paths that could escape the export directory
pub fn validate_relative_path(path: &str) -> Result<()> {
    let escapes = path.starts_with('/')
        || path.contains('\\')
        || has_drive_prefix(path)
        || path
            .split('/')
            .any(|segment| segment == "." || segment == "..");
    if escapes {
        return Err(Error::unsafe_path(path));
    }
    Ok(())
}

/// `C:` style prefix on the first segment
fn has_drive_prefix(path: &str) -> bool {
    matches!(path.as_bytes(), [letter, b':', ..] if letter.is_ascii_alphabetic())
}

fn ensure_dir(directory: &Path) -> Result<()> {
    if !directory.is_dir() {
        return Err(Error::ExportDirNotFound {
            path: directory.to_path_buf(),
        });
    }
    Ok(())
}

/// Save one file's content as `directory/file_name`
pub fn export_file(directory: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    ensure_dir(directory)?;
    validate_relative_path(file_name)?;
    if file_name.contains('/') {
        return Err(Error::unsafe_path(file_name));
    }

    let target = unique_path(&directory.join(file_name));
    std::fs::write(&target, content)
        .map_err(|e| Error::export(format!("Failed to write {}: {}", target.display(), e)))?;

    info!("Saved {}", target.display());
    Ok(target)
}

/// Write the project tree under `directory/<project name>`.
///
/// Returns the created root and the number of files written. Paths that
/// the tree builder drops (duplicates, file/directory collisions) are not
/// written.
pub fn export_project(directory: &Path, project: &ProjectStructure) -> Result<(PathBuf, usize)> {
    ensure_dir(directory)?;
    for file in &project.files {
        validate_relative_path(&file.path)?;
    }

    let root = unique_path(&directory.join(project_dir_name(&project.project_name)));
    std::fs::create_dir_all(&root)
        .map_err(|e| Error::export(format!("Failed to create {}: {}", root.display(), e)))?;

    let tree = build_file_tree(&project.files);
    let written = write_nodes(&root, &tree)?;

    info!(
        "Exported {} of {} files to {}",
        written,
        project.file_count(),
        root.display()
    );
    Ok((root, written))
}

fn write_nodes(parent: &Path, nodes: &[FileNode]) -> Result<usize> {
    let mut written = 0;
    for node in nodes {
        let target = parent.join(&node.name);
        match node.kind {
            NodeKind::Directory => {
                std::fs::create_dir_all(&target).map_err(|e| {
                    Error::export(format!("Failed to create {}: {}", target.display(), e))
                })?;
                written += write_nodes(&target, &node.children)?;
            }
            NodeKind::File => {
                let content = node.content.as_deref().unwrap_or_default();
                std::fs::write(&target, content).map_err(|e| {
                    Error::export(format!("Failed to write {}: {}", target.display(), e))
                })?;
                written += 1;
            }
        }
    }
    Ok(written)
}
