//! Flat file list to hierarchical tree conversion
//!
//! The generation service returns files as `(path, content)` records. The
//! explorer needs a forest of directory and file nodes instead. Construction
//! is a single pass in input order followed by a recursive sort:
//!
//! - a segment is a file iff it is the last segment of its path
//! - lookups at each level are by exact name, so the first node created for
//!   a name wins (duplicate paths keep the first content)
//! - every directory's children end up directories-first, then by name
//!
//! [`build_file_tree_strict`] is the opt-in alternative that rejects duplicate
//! and file/directory-colliding paths instead of resolving them silently.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::LazyLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

use crate::error::{Error, Result};
use crate::language::{classify, Language};
use crate::types::GeneratedFile;

/// Whether a node is a leaf file or a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

/// One node of the file forest.
///
/// `path` is always the `/`-join of the ancestor names plus `name`. Files
/// carry content and no children; directories carry children and no content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
    pub path: String,
    pub kind: NodeKind,
    pub children: Vec<FileNode>,
    pub content: Option<String>,
}

impl FileNode {
    fn directory(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind: NodeKind::Directory,
            children: Vec::new(),
            content: None,
        }
    }

    fn file(name: &str, path: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind: NodeKind::File,
            children: Vec::new(),
            content: Some(content.to_string()),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn language(&self) -> Language {
        classify(&self.path)
    }

    /// Find a descendant (or self) by full path
    pub fn find(&self, path: &str) -> Option<&FileNode> {
        if self.path == path {
            return Some(self);
        }
        if !self.is_dir() || !path.starts_with(&self.path) {
            return None;
        }
        self.children.iter().find_map(|child| child.find(path))
    }
}

/// Find a node anywhere in a forest by full path
pub fn find_in_forest<'a>(forest: &'a [FileNode], path: &str) -> Option<&'a FileNode> {
    forest.iter().find_map(|node| node.find(path))
}

/// Count file (leaf) nodes in a forest
pub fn count_files(forest: &[FileNode]) -> usize {
    forest
        .iter()
        .map(|node| match node.kind {
            NodeKind::File => 1,
            NodeKind::Directory => count_files(&node.children),
        })
        .sum()
}

/// Build a sorted forest from a flat file list.
///
/// Duplicate paths keep the first entry's content. A path that would descend
/// through an existing file, or end on an existing directory, is dropped so
/// every node's path stays consistent with its position.
pub fn build_file_tree(files: &[GeneratedFile]) -> Vec<FileNode> {
    let mut forest = Vec::new();
    for file in files {
        insert_file(&mut forest, file);
    }
    sort_forest(&mut forest);
    forest
}

/// Like [`build_file_tree`], but fails on the first duplicate or conflicting path.
pub fn build_file_tree_strict(files: &[GeneratedFile]) -> Result<Vec<FileNode>> {
    if let Some(conflict) = find_path_conflicts(files).into_iter().next() {
        return Err(conflict.into());
    }
    Ok(build_file_tree(files))
}

fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// The path a file's node ends up under: empty segments dropped, `/`-joined.
///
/// `"docs//README.md"` and `"/docs/README.md"` both map to `"docs/README.md"`.
pub fn normalize_path(path: &str) -> String {
    path_segments(path).join("/")
}

fn insert_file(forest: &mut Vec<FileNode>, file: &GeneratedFile) {
    let segments = path_segments(&file.path);
    if segments.is_empty() {
        tracing::warn!("Skipping generated file with empty path");
        return;
    }

    let last = segments.len() - 1;
    let mut level = forest;
    let mut current_path = String::new();

    for (i, segment) in segments.iter().enumerate() {
        if !current_path.is_empty() {
            current_path.push('/');
        }
        current_path.push_str(segment);

        let is_last = i == last;
        let index = match level.iter().position(|node| node.name == *segment) {
            Some(index) => index,
            None => {
                let node = if is_last {
                    FileNode::file(segment, &current_path, &file.content)
                } else {
                    FileNode::directory(segment, &current_path)
                };
                level.push(node);
                if is_last {
                    return;
                }
                level.len() - 1
            }
        };

        let existing_kind = level[index].kind;
        if is_last {
            match existing_kind {
                NodeKind::File => {
                    tracing::debug!("Duplicate path {}, keeping first content", file.path)
                }
                NodeKind::Directory => tracing::warn!(
                    "File {} collides with an existing directory, dropping it",
                    file.path
                ),
            }
            return;
        }

        if existing_kind == NodeKind::File {
            tracing::warn!(
                "Path {} descends through existing file {}, dropping it",
                file.path,
                current_path
            );
            return;
        }

        level = &mut level[index].children;
    }
}

fn sort_forest(nodes: &mut [FileNode]) {
    nodes.sort_by(compare_nodes);
    for node in nodes.iter_mut().filter(|n| n.is_dir()) {
        sort_forest(&mut node.children);
    }
}

/// Directories before files, then locale-aware by name
pub fn compare_nodes(a: &FileNode, b: &FileNode) -> Ordering {
    match (a.kind, b.kind) {
        (NodeKind::Directory, NodeKind::File) => Ordering::Less,
        (NodeKind::File, NodeKind::Directory) => Ordering::Greater,
        _ => locale_compare(&a.name, &b.name),
    }
}

/// Root-locale collation of two names, the ordering a browser's
/// `localeCompare` gives without a locale argument.
///
/// Punctuation is significant and sorts before digits and letters, accents
/// fold to their base letter at the primary level, and lowercase sorts before
/// uppercase on a tie. Names equal under collation fall back to code point.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    match ROOT_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b).then_with(|| a.cmp(b)),
        None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
    }
}

static ROOT_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .map_err(|e| tracing::warn!("Root collator unavailable, sorting by lowercase name: {e}"))
        .ok()
});

// ─────────────────────────────────────────────────────────────────
// Conflict detection
// ─────────────────────────────────────────────────────────────────

/// A path the lenient builder would resolve silently
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathConflict {
    /// The same path appears more than once
    Duplicate { path: String },
    /// A path is used both as a file and as a directory
    FileDirectory { path: String },
}

impl PathConflict {
    pub fn path(&self) -> &str {
        match self {
            PathConflict::Duplicate { path } | PathConflict::FileDirectory { path } => path,
        }
    }
}

impl From<PathConflict> for Error {
    fn from(conflict: PathConflict) -> Self {
        match conflict {
            PathConflict::Duplicate { path } => Error::DuplicatePath { path },
            PathConflict::FileDirectory { path } => Error::PathConflict { path },
        }
    }
}

/// Report every duplicate and file/directory collision, in input order
pub fn find_path_conflicts(files: &[GeneratedFile]) -> Vec<PathConflict> {
    let mut file_paths: HashSet<String> = HashSet::new();
    let mut dir_paths: HashSet<String> = HashSet::new();
    let mut conflicts = Vec::new();

    for file in files {
        let segments = path_segments(&file.path);
        if segments.is_empty() {
            continue;
        }
        let full = segments.join("/");

        if file_paths.contains(&full) {
            conflicts.push(PathConflict::Duplicate { path: full });
            continue;
        }
        if dir_paths.contains(&full) {
            conflicts.push(PathConflict::FileDirectory { path: full });
            continue;
        }

        let mut prefix = String::new();
        let mut collided = false;
        for segment in &segments[..segments.len() - 1] {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            if file_paths.contains(&prefix) {
                conflicts.push(PathConflict::FileDirectory {
                    path: prefix.clone(),
                });
                collided = true;
                break;
            }
            dir_paths.insert(prefix.clone());
        }

        if !collided {
            file_paths.insert(full);
        }
    }

    conflicts
}
