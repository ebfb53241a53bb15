//! Conference list and detail views

use crate::app::App;
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the conference list
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Conferences ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.state.conferences.is_empty() {
        let hint = if app.state.backend_connected {
            "No conferences yet. Press 'n' to create one."
        } else {
            "Backend unreachable. Press 'r' to retry."
        };
        let paragraph = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let active_id = app.active.id();
    let items: Vec<ListItem> = app
        .state
        .conferences
        .iter()
        .map(|conference| {
            let is_active = active_id == Some(conference.id.as_str());
            let marker = if is_active { "● " } else { "  " };
            let style = if is_active {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::styled(conference.display_name(), style),
                Span::styled(
                    format!("  {}", conference.city),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    render_scrollable_list(frame, area, list, app.state.selected_index);
}

/// Draw the active conference detail view
pub fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(conference) = app.active.get() else {
        let paragraph = Paragraph::new("No active conference selected.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(8)])
        .split(area);

    let label_style = Style::default().fg(Color::DarkGray);
    let info_lines = vec![
        info_line("Name", &conference.name, label_style),
        info_line("Acronym", &conference.acronym, label_style),
        info_line("Website", &conference.website, label_style),
        info_line(
            "Location",
            &format!("{}, {}", conference.city, conference.country),
            label_style,
        ),
        info_line("Venue", &conference.venue, label_style),
        info_line("License expiry", &conference.license_expiry, label_style),
        info_line(
            "Contact",
            &conference.contact_emails.join(", "),
            label_style,
        ),
        info_line(
            "Reviewers per paper",
            &conference.reviewers_per_paper.as_i64().to_string(),
            label_style,
        ),
        info_line(
            "Assignment mode",
            conference.use_bidding_or_relevance.as_text(),
            label_style,
        ),
    ];

    let detail = Paragraph::new(info_lines).block(
        Block::default()
            .title(format!(" {} ", conference.display_name()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(detail, chunks[0]);

    let track_lines: Vec<Line> = if conference.tracks.is_empty() {
        vec![Line::from(Span::styled(
            "No tracks yet. Press 't' to create one.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        conference
            .tracks
            .iter()
            .map(|track| {
                Line::from(vec![
                    Span::raw("• "),
                    Span::raw(track.track_name.clone()),
                    Span::styled(
                        format!("  {} papers", track.papers.len()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect()
    };

    let tracks = Paragraph::new(track_lines).block(
        Block::default()
            .title(" Tracks ")
            .borders(Borders::ALL),
    );
    frame.render_widget(tracks, chunks[1]);
}

fn info_line<'a>(label: &'a str, value: &str, label_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:>20}: "), label_style),
        Span::raw(value.to_string()),
    ])
}
