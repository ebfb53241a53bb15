//! Cancel confirmation dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a confirmation dialog overlay centered on the screen
pub fn render_confirm_dialog(frame: &mut Frame, title: &str, message: &str) {
    let bold_cyan = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("y", bold_cyan),
        Span::raw("/"),
        Span::styled("Enter", bold_cyan),
        Span::raw(": discard   "),
        Span::styled("n", bold_cyan),
        Span::raw("/"),
        Span::styled("Esc", bold_cyan),
        Span::raw(": keep editing"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title,
            color: Color::Yellow,
            message,
            hint,
        },
    );
}
