//! Prompt screen: hero text, the prompt input and the three-step overview

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::{icons::IconSet, palette, styles};

const PLACEHOLDER: &str = "e.g., A FastAPI backend for a Todo application with SQLite database, \
                           Pydantic models, and CRUD endpoints.";

const STEPS: [(&str, &str, &str); 3] = [
    (
        "01",
        "Describe",
        "Simply tell the AI what you want to build using natural language.",
    ),
    (
        "02",
        "Generate",
        "Gemini models architect the file structure and write the source code.",
    ),
    (
        "03",
        "Export",
        "Browse the file tree, review the code, and export to your machine.",
    ),
];

/// Content is centered and capped at this width
const MAX_WIDTH: u16 = 90;

/// Cursor drawn after the prompt text
const CURSOR: char = '\u{258f}'; // ▏

/// Hard-wrap `text` into rows of at most `width` display columns
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let mut rows = vec![String::new()];
    if width == 0 {
        return rows;
    }

    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            rows.push(String::new());
            used = 0;
        }
        if let Some(row) = rows.last_mut() {
            row.push(c);
        }
        used += w;
    }
    rows
}

/// Idle screen with the prompt input
pub struct PromptPanel<'a> {
    prompt: &'a str,
    icons: IconSet,
    can_submit: bool,
}

impl<'a> PromptPanel<'a> {
    pub fn new(prompt: &'a str, icons: IconSet) -> Self {
        Self {
            prompt,
            icons,
            can_submit: false,
        }
    }

    pub fn can_submit(mut self, can_submit: bool) -> Self {
        self.can_submit = can_submit;
        self
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(
                format!(" {} Describe your Python project ", self.icons.prompt()),
                styles::accent(),
            ))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.prompt.is_empty() {
            let placeholder = Line::from(vec![
                Span::styled(CURSOR.to_string(), styles::accent()),
                Span::styled(PLACEHOLDER, styles::text_muted()),
            ]);
            Paragraph::new(placeholder)
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        // Show the tail so the cursor stays visible
        let text = format!("{}{}", self.prompt, CURSOR);
        let rows = wrap_to_width(&text, inner.width as usize);
        let skip = rows.len().saturating_sub(inner.height as usize);
        for (offset, row) in rows.iter().skip(skip).enumerate() {
            let y = inner.y + offset as u16;
            if let Some(body) = row.strip_suffix(CURSOR) {
                let line = Line::from(vec![
                    Span::styled(body, styles::text_primary()),
                    Span::styled(CURSOR.to_string(), styles::accent()),
                ]);
                buf.set_line(inner.x, y, &line, inner.width);
            } else {
                buf.set_stringn(
                    inner.x,
                    y,
                    row,
                    inner.width as usize,
                    styles::text_primary(),
                );
            }
        }
    }

    fn render_submit_hint(&self, area: Rect, buf: &mut Buffer) {
        let (key_style, label_style) = if self.can_submit {
            (styles::keybinding(), styles::accent_bold())
        } else {
            (styles::text_muted(), styles::text_muted())
        };
        let line = Line::from(vec![
            Span::styled("Enter", key_style),
            Span::styled("  Generate Codebase", label_style),
        ])
        .alignment(Alignment::Right);
        Paragraph::new(line).render(area, buf);
    }

    fn render_steps(&self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .spacing(2)
        .split(area);

        let number_colors = [palette::STATUS_BLUE, palette::LANG_YAML, palette::STATUS_GREEN];
        for ((number, title, text), (column, color)) in STEPS
            .iter()
            .zip(columns.iter().zip(number_colors.iter()))
        {
            let lines = vec![
                Line::from(vec![
                    Span::styled(
                        *number,
                        Style::default().fg(*color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        *title,
                        Style::default()
                            .fg(palette::TEXT_PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(*text, styles::text_muted())),
            ];
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .render(*column, buf);
        }
    }
}

impl Widget for PromptPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.min(MAX_WIDTH);
        let area = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };

        let [_, title, subtitle, _, input, hint, _, steps, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1), // Title
            Constraint::Length(2), // Subtitle
            Constraint::Length(1),
            Constraint::Length(7), // Prompt input
            Constraint::Length(1), // Submit hint
            Constraint::Length(1),
            Constraint::Length(5), // Steps
            Constraint::Min(0),
        ])
        .areas(area);

        Paragraph::new(Line::from(Span::styled(
            "Turn ideas into production code.",
            Style::default()
                .fg(palette::TEXT_BRIGHT)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(title, buf);

        Paragraph::new(Span::styled(
            "Describe your Python project needs, and watch as a complete, structured \
             codebase is architected for you in seconds.",
            styles::text_secondary(),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(subtitle, buf);

        self.render_input(input, buf);
        self.render_submit_hint(hint, buf);
        self.render_steps(steps, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use pyarch_app::config::IconMode;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_wrap_to_width() {
        assert_eq!(wrap_to_width("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_to_width("", 4), vec![""]);
        assert_eq!(wrap_to_width("abcd", 4), vec!["abcd"]);
    }

    #[test]
    fn test_wrap_to_width_wide_chars() {
        // Each CJK char is two columns
        assert_eq!(wrap_to_width("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn test_renders_hero_and_steps() {
        let mut term = TestTerminal::with_size(100, 24);
        term.render_widget(PromptPanel::new("", icons()), term.area());

        assert!(term.buffer_contains("Turn ideas into production code."));
        assert!(term.buffer_contains("01 Describe"));
        assert!(term.buffer_contains("02 Generate"));
        assert!(term.buffer_contains("03 Export"));
        assert!(term.buffer_contains("e.g., A FastAPI backend"));
    }

    #[test]
    fn test_renders_prompt_text() {
        let mut term = TestTerminal::new();
        term.render_widget(
            PromptPanel::new("A CLI todo app", icons()).can_submit(true),
            term.area(),
        );

        assert!(term.buffer_contains("A CLI todo app"));
        assert!(!term.buffer_contains("e.g., A FastAPI"));
        assert!(term.buffer_contains("Generate Codebase"));
    }

    #[test]
    fn test_long_prompt_shows_tail() {
        let mut term = TestTerminal::new();
        let prompt = format!("{}END", "word ".repeat(200));
        term.render_widget(PromptPanel::new(&prompt, icons()), term.area());

        assert!(term.buffer_contains("END"));
    }
}
