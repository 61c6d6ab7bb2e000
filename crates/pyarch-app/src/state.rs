//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use rand::Rng;

use pyarch_core::prelude::*;
use pyarch_core::{
    build_file_tree, find_in_forest, find_path_conflicts, normalize_path, FileNode,
    ProjectStructure,
};

use crate::config::Settings;
use crate::explorer::ExplorerState;

// ─────────────────────────────────────────────────────────────────────────────
// Generation lifecycle
// ─────────────────────────────────────────────────────────────────────────────

/// Where the app is in the prompt → project lifecycle
#[derive(Debug, Default)]
pub enum GenerationState {
    /// Waiting for a prompt
    #[default]
    Idle,

    /// A request is in flight
    Generating { prompt: String, started_at: Instant },

    /// A project was generated and is being browsed
    Ready(Box<ProjectView>),

    /// The last request failed
    Failed { message: String },
}

impl GenerationState {
    pub fn is_generating(&self) -> bool {
        matches!(self, GenerationState::Generating { .. })
    }

    /// Prompt submission is allowed from the prompt and failure screens
    pub fn can_submit(&self) -> bool {
        matches!(self, GenerationState::Idle | GenerationState::Failed { .. })
    }

    pub fn project_view(&self) -> Option<&ProjectView> {
        match self {
            GenerationState::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn project_view_mut(&mut self) -> Option<&mut ProjectView> {
        match self {
            GenerationState::Ready(view) => Some(view),
            _ => None,
        }
    }

    /// Short name for logs
    pub fn label(&self) -> &'static str {
        match self {
            GenerationState::Idle => "idle",
            GenerationState::Generating { .. } => "generating",
            GenerationState::Ready(_) => "ready",
            GenerationState::Failed { .. } => "failed",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Project view
// ─────────────────────────────────────────────────────────────────────────────

/// Which panel receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Explorer,
    Viewer,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Explorer => Focus::Viewer,
            Focus::Viewer => Focus::Explorer,
        }
    }
}

/// The file shown in the viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub path: String,
    pub content: String,
}

impl Selection {
    pub fn file_name(&self) -> &str {
        pyarch_core::download_file_name(&self.path)
    }
}

/// Scroll position of the code viewer
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    /// First visible line
    pub scroll: usize,

    /// Lines visible in the last render (set by the TUI)
    pub viewport_height: usize,
}

impl ViewerState {
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize, total_lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll(total_lines));
    }

    pub fn scroll_to_bottom(&mut self, total_lines: usize) {
        self.scroll = self.max_scroll(total_lines);
    }

    pub fn page(&self) -> usize {
        self.viewport_height.saturating_sub(1).max(1)
    }

    fn max_scroll(&self, total_lines: usize) -> usize {
        total_lines.saturating_sub(self.viewport_height.max(1))
    }
}

/// A generated project being browsed
#[derive(Debug)]
pub struct ProjectView {
    pub project: ProjectStructure,
    pub tree: Vec<FileNode>,
    pub explorer: ExplorerState,
    pub selection: Option<Selection>,
    pub viewer: ViewerState,
    pub focus: Focus,

    /// When the selection was last copied; drives the "Copied" label
    pub copied_at: Option<Instant>,
}

impl ProjectView {
    /// Build the tree and pick the initial file
    pub fn new(project: ProjectStructure) -> Self {
        for conflict in find_path_conflicts(&project.files) {
            warn!("Generated project has conflicting path: {:?}", conflict);
        }

        let tree = build_file_tree(&project.files);
        let initial = project.initial_file().map(|f| f.path.clone());

        let mut view = Self {
            project,
            tree,
            explorer: ExplorerState::new(),
            selection: None,
            viewer: ViewerState::default(),
            focus: Focus::default(),
            copied_at: None,
        };

        if let Some(path) = initial {
            view.select(&path);
        }
        view
    }

    /// Show the file at `path` in the viewer.
    ///
    /// `path` is matched the way the tree stores it, so `docs//README.md`
    /// selects the `docs/README.md` node. Returns false if no file has that path.
    pub fn select(&mut self, path: &str) -> bool {
        let path = normalize_path(path);
        let content = match find_in_forest(&self.tree, &path) {
            Some(node) if !node.is_dir() => node.content.clone().unwrap_or_default(),
            _ => {
                // Paths dropped from the tree still come from the flat list
                match self.project.file(&path) {
                    Some(file) => file.content.clone(),
                    None => return false,
                }
            }
        };

        self.explorer.reveal(&self.tree, &path);
        self.selection = Some(Selection { path, content });
        self.viewer.scroll = 0;
        self.copied_at = None;
        true
    }

    pub fn selected_path(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.path.as_str())
    }

    pub fn selected_line_count(&self) -> usize {
        self.selection
            .as_ref()
            .map(|s| s.content.lines().count())
            .unwrap_or(0)
    }

    pub fn visible_row_count(&self) -> usize {
        self.explorer.visible_rows(&self.tree).len()
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Whether the "Copied" label should show at `now`
    pub fn copy_feedback_active(&self, now: Instant, feedback: Duration) -> bool {
        self.copied_at
            .map(|at| now.saturating_duration_since(at) < feedback)
            .unwrap_or(false)
    }

    /// Clear the copy confirmation once it has been shown long enough
    pub fn expire_copy_feedback(&mut self, now: Instant, feedback: Duration) {
        if self.copied_at.is_some() && !self.copy_feedback_active(now, feedback) {
            self.copied_at = None;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading & notices
// ─────────────────────────────────────────────────────────────────────────────

const LOADING_MESSAGES: &[&str] = &[
    "Architecting Solution...",
    "Analyzing requirements...",
    "Designing folder structure...",
    "Writing Python code...",
    "Drafting the README...",
    "Choosing sensible dependencies...",
    "Naming things carefully...",
    "Adding type hints...",
    "Sketching the entry point...",
    "Reviewing the module layout...",
];

/// Loading screen state
#[derive(Debug, Clone)]
pub struct LoadingState {
    /// Current loading message
    pub message: String,
    /// Animation frame counter for spinner
    pub animation_frame: u64,
    /// Current index into LOADING_MESSAGES for cycling
    message_index: usize,
}

impl LoadingState {
    pub fn new() -> Self {
        // Start at a random index for variety
        let start_index = rand::thread_rng().gen_range(0..LOADING_MESSAGES.len());

        Self {
            message: LOADING_MESSAGES[start_index].to_string(),
            animation_frame: 0,
            message_index: start_index,
        }
    }

    /// Tick animation frame; cycles the message every 15 frames
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        if self.animation_frame % 15 == 0 {
            self.message_index = (self.message_index + 1) % LOADING_MESSAGES.len();
            self.message = LOADING_MESSAGES[self.message_index].to_string();
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line status message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub generation: GenerationState,

    /// Prompt text as typed; kept across resets
    pub prompt: String,

    pub settings: Settings,

    /// Spinner state while generating
    pub loading_state: Option<LoadingState>,

    pub notice: Option<Notice>,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            generation: GenerationState::Idle,
            prompt: String::new(),
            settings,
            loading_state: None,
            notice: None,
            quitting: false,
        }
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn project_view(&self) -> Option<&ProjectView> {
        self.generation.project_view()
    }

    pub fn project_view_mut(&mut self) -> Option<&mut ProjectView> {
        self.generation.project_view_mut()
    }

    /// Prompt has non-whitespace text and submission is allowed
    pub fn can_submit_prompt(&self) -> bool {
        self.generation.can_submit() && !self.prompt.trim().is_empty()
    }
}
