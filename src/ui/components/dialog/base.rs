//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub color: Color,
    /// Message content, word-wrapped to the dialog width
    pub message: &'a str,
    /// Hint text shown at the bottom
    pub hint: Vec<Span<'a>>,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let width = 60.min(area.width.saturating_sub(4)).max(20);
    // Rough height: borders, title, blank, wrapped message, blank, hint.
    let message_lines = (config.message.len() as u16 / width.saturating_sub(4).max(1)) + 1;
    let height = (message_lines + 6).min(area.height);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let mut content = vec![Line::from(""), Line::from(config.message.to_string())];
    content.push(Line::from(""));
    content.push(Line::from(config.hint));

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", config.title),
                    Style::default()
                        .fg(config.color)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.color))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(dialog, dialog_area);
}
