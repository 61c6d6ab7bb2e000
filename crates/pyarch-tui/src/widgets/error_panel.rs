//! Generation failure modal

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::wrap_to_width;
use crate::theme::{icons::IconSet, palette, styles};

const MAX_WIDTH: u16 = 70;

/// Centered modal showing why generation failed
pub struct ErrorPanel<'a> {
    message: &'a str,
    icons: IconSet,
}

impl<'a> ErrorPanel<'a> {
    pub fn new(message: &'a str, icons: IconSet) -> Self {
        Self { message, icons }
    }
}

impl Widget for ErrorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.saturating_sub(4).min(MAX_WIDTH);
        let text_width = width.saturating_sub(4) as usize;
        let wrapped: Vec<String> = self
            .message
            .lines()
            .flat_map(|line| wrap_to_width(line, text_width))
            .collect();

        // Title, blank, message, blank, actions, plus borders
        let height = (wrapped.len() as u16 + 6).min(area.height);
        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, modal, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(column);

        Clear.render(modal, buf);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(self.icons.alert(), styles::status_red()),
                Span::raw(" "),
                Span::styled(
                    "Generation Failed",
                    Style::default()
                        .fg(palette::STATUS_RED)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
        ];
        lines.extend(
            wrapped
                .into_iter()
                .map(|row| Line::from(Span::styled(row, styles::text_primary()))),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" Try Again", styles::text_secondary()),
            Span::styled("  ·  ", styles::text_muted()),
            Span::styled("q", styles::keybinding()),
            Span::styled(" Quit", styles::text_secondary()),
        ]));

        Paragraph::new(lines)
            .block(
                styles::modal_block().border_style(Style::default().fg(palette::STATUS_RED)),
            )
            .alignment(Alignment::Center)
            .render(modal, buf);
    }
}
