//! Top-level layout: header, content area, status bar

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, main content, and status bar areas
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the active conference and connection state
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " Confero ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
    ];

    match app.active.get() {
        Some(conference) => {
            spans.push(Span::raw("Active: "));
            spans.push(Span::styled(
                conference.display_name(),
                Style::default().fg(Color::Green),
            ));
        }
        None => spans.push(Span::styled(
            "No active conference",
            Style::default().fg(Color::DarkGray),
        )),
    }

    let connection = if app.state.backend_connected {
        Span::styled("  ● connected", Style::default().fg(Color::Green))
    } else {
        Span::styled("  ○ offline", Style::default().fg(Color::Red))
    };
    spans.push(connection);

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Draw the status bar: a transient status message or per-view key help
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(message) = &app.state.status_message {
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {}", key_help(app.state.current_view)),
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn key_help(view: View) -> &'static str {
    match view {
        View::Conferences => "↑/↓: select  Enter: open  n: new conference  r: refresh  q: quit",
        View::ConferenceDetail => "e: edit  t: new track  r: refresh  Esc: back",
        View::ConferenceCreate | View::ConferenceEdit | View::TrackCreate => {
            "Tab: field  Space: toggle/cycle  Ctrl+T: scope  Ctrl+B: back  Enter: next/submit  Esc: cancel"
        }
    }
}
