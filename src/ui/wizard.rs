//! Stepped configuration form rendering
//!
//! One row per field of the current step: focus marker, label, value, scope
//! badge. Invalid fields turn red and show their reason on the next line.

use crate::app::App;
use crate::wizard::{FieldKind, Wizard};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the active wizard, or the edit-flow loading screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(wizard) = &app.state.wizard else {
        if app.state.loading {
            let loading = Paragraph::new("Loading conference data...")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(loading, area);
        }
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", wizard.schema.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // progress
            Constraint::Length(2), // step title
            Constraint::Min(1),    // fields
            Constraint::Length(2), // buttons
        ])
        .margin(1)
        .split(inner);

    frame.render_widget(progress_line(wizard), chunks[0]);

    let title = Paragraph::new(Line::from(Span::styled(
        wizard.current_step().title,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[1]);

    draw_fields(frame, chunks[2], wizard);
    frame.render_widget(button_row(wizard), chunks[3]);
}

/// Numbered circles joined by connectors, filled up to the current step
fn progress_line(wizard: &Wizard) -> Paragraph<'static> {
    let current = wizard.nav.step();
    let mut spans = Vec::new();
    for index in 0..wizard.schema.step_count() {
        let reached = index <= current;
        let style = if reached {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("({})", index + 1), style));
        if index + 1 < wizard.schema.step_count() {
            let connector_style = if index < current {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled("──", connector_style));
        }
    }
    Paragraph::new(Line::from(spans))
}

fn draw_fields(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    let mut lines: Vec<Line> = Vec::new();
    let mut active_line = 0;

    for (index, name) in wizard.current_step().fields.iter().enumerate() {
        let Some(descriptor) = wizard.schema.descriptor(name) else {
            continue;
        };
        let Some(state) = wizard.model.get(name) else {
            continue;
        };

        let is_active = index == wizard.active_field;
        let invalid = wizard.nav.invalid_reason(name);
        if is_active {
            active_line = lines.len();
        }

        let marker = if is_active { "▶ " } else { "  " };
        let label_style = if invalid.is_some() {
            Style::default().fg(Color::Red)
        } else if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:<32}", descriptor.label()), label_style),
            Span::raw(value_display(descriptor.kind, state.value.display())),
        ];
        if is_active && !descriptor.read_only {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
        if descriptor.read_only {
            spans.push(Span::styled(
                "  (read-only)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        if let Some(scope) = state.scope {
            spans.push(Span::styled(
                format!("  [{}]", scope.as_str()),
                Style::default().fg(Color::Magenta),
            ));
        }
        lines.push(Line::from(spans));

        if let Some(flagged) = invalid {
            lines.push(Line::from(Span::styled(
                format!("    {}", flagged.reason.message()),
                Style::default().fg(Color::Red),
            )));
        }
    }

    // Scroll so the focused field stays visible on short terminals.
    let visible = area.height as usize;
    let offset = if visible == 0 {
        0
    } else {
        active_line.saturating_sub(visible.saturating_sub(1))
    };

    frame.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), area);
}

fn value_display(kind: FieldKind, raw: String) -> String {
    match kind {
        FieldKind::Toggle | FieldKind::Choice(_) => format!("‹ {raw} ›"),
        _ if raw.is_empty() => "(empty)".to_string(),
        _ => raw,
    }
}

fn button_row(wizard: &Wizard) -> Paragraph<'static> {
    let back_style = if wizard.nav.step() == 0 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let primary_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    Paragraph::new(Line::from(vec![
        Span::styled("[ Back ]", back_style),
        Span::raw("  "),
        Span::styled(format!("[ {} ]", wizard.primary_label()), primary_style),
    ]))
}
