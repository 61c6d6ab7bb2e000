//! Main render/view function (View in TEA pattern)


use std::time::Instant;

use super::{layout, widgets};
use pyarch_app::state::{AppState, Focus, GenerationState, LoadingState, ProjectView};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme::{icons::IconSet, palette, styles};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it should not modify state
/// except for widget state that tracks rendering info (cursor scroll,
/// viewport height).
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    let project_name = state
        .project_view()
        .map(|view| view.project.project_name.as_str());
    frame.render_widget(widgets::MainHeader::new(project_name, icons), areas.header);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    let can_submit = state.can_submit_prompt();
    let ui = state.settings.ui.clone();
    let model = state.settings.generation.model.clone();

    match &mut state.generation {
        GenerationState::Idle => {
            frame.render_widget(
                widgets::PromptPanel::new(&state.prompt, icons).can_submit(can_submit),
                areas.body,
            );
        }
        GenerationState::Generating { started_at, .. } => {
            if let Some(loading) = &state.loading_state {
                render_loading_screen(frame, loading, *started_at, &model, areas.body);
            }
        }
        GenerationState::Failed { message } => {
            frame.render_widget(widgets::ErrorPanel::new(message, icons), areas.body);
        }
        GenerationState::Ready(boxed) => {
            let view: &mut ProjectView = &mut **boxed;
            let copied = view.copy_feedback_active(Instant::now(), ui.copy_feedback());
            let panels = layout::split_project(areas.body);

            let explorer = widgets::FileExplorer::new(&view.tree, icons)
                .selected_path(view.selection.as_ref().map(|s| s.path.as_str()))
                .focused(view.focus == Focus::Explorer);
            frame.render_stateful_widget(explorer, panels.explorer, &mut view.explorer);

            let viewer = widgets::CodeViewer::new(view.selection.as_ref(), icons)
                .focused(view.focus == Focus::Viewer)
                .line_numbers(ui.show_line_numbers)
                .copied(copied);
            frame.render_stateful_widget(viewer, panels.viewer, &mut view.viewer);
        }
    }
}

/// Render the modal shown while the model is working
///
/// Displays:
/// - Title
/// - Animated spinner with the cycling message
/// - What is being generated and for how long
fn render_loading_screen(
    frame: &mut Frame,
    loading: &LoadingState,
    started_at: Instant,
    model: &str,
    area: Rect,
) {
    // Braille spinner characters for smooth animation
    const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

    let spinner_idx = (loading.animation_frame as usize) % SPINNER.len();
    let spinner_char = SPINNER[spinner_idx];

    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Length(10),
        Constraint::Percentage(30),
    ])
    .areas(area);
    let [_, center_area, _] = Layout::horizontal([
        Constraint::Percentage(20),
        Constraint::Percentage(60),
        Constraint::Percentage(20),
    ])
    .areas(middle);

    // Only clear the modal area, not the entire screen
    frame.render_widget(Clear, center_area);

    let elapsed = started_at.elapsed().as_secs();
    let lines = vec![
        Line::from(Span::styled(
            "Architecting Solution...",
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner_char, styles::accent_bold()),
            Span::raw(" "),
            Span::styled(loading.message.as_str(), styles::text_secondary()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Analyzing requirements, designing folder structure, and writing Python code...",
            styles::text_muted(),
        )),
        Line::from(Span::styled(
            format!("{} · {}s", model, elapsed),
            styles::text_muted(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_inactive())
        .style(Style::default().bg(palette::DEEPEST_BG));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, center_area);
}
