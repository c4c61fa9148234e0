//! Rendering for the resume analyzer page.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::analyzer::MAX_SCORE;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BUTTON_PRIMARY, GAUGE_TRACK, GLOBAL_BORDER, HEADER_TEXT,
    POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};

use super::state::{PickerState, UploadState};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const PICKER_WIDTH: u16 = 64;

pub fn render_upload(frame: &mut Frame, area: Rect, state: &UploadState, accept: &[String]) {
    let card = Block::default()
        .title(Span::styled(
            " Resume ATS Analyzer ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let score_height = if state.has_results() { 4 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(score_height),
            Constraint::Min(0),
        ])
        .split(inner);

    let upload_hint = if accept.is_empty() {
        "[o] Upload Resume".to_string()
    } else {
        format!("[o] Upload Resume ({})", accept.join(", "))
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            upload_hint,
            Style::default().fg(BUTTON_PRIMARY),
        )))
        .alignment(Alignment::Center),
        rows[1],
    );

    if let Some(file) = &state.file {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Selected File: ", Style::default().fg(HEADER_TEXT)),
                Span::styled(file.name.as_str(), Style::default().fg(STATUS_OK)),
            ]))
            .alignment(Alignment::Center),
            rows[2],
        );
    }

    frame.render_widget(
        Paragraph::new(review_button(state)).alignment(Alignment::Center),
        rows[4],
    );

    if let Some(score) = state.score {
        render_score(frame, rows[5], score);
    }

    if !state.suggestions.is_empty() {
        render_suggestions(frame, rows[6], &state.suggestions);
    }

    if let Some(picker) = &state.picker {
        render_picker(frame, area, picker, accept);
    }
}

fn review_button(state: &UploadState) -> Line<'static> {
    if state.loading {
        let spinner = SPINNER_FRAMES[(state.animation_tick as usize) % SPINNER_FRAMES.len()];
        return Line::from(Span::styled(
            format!(" {} Reviewing... ", spinner),
            Style::default().fg(STATUS_OK),
        ));
    }

    let style = if state.can_submit() {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
    };
    Line::from(Span::styled(" [Enter] Review Resume ", style))
}

fn render_score(frame: &mut Frame, area: Rect, score: u8) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("ATS Score: {}/{}", score, MAX_SCORE),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        rows[1],
    );

    let gauge_area = centered_rect_by_size(rows[2], rows[2].width.min(50), 1);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(STATUS_OK).bg(GAUGE_TRACK))
        .percent(u16::from(score.min(MAX_SCORE)))
        .label(format!("{}%", score));
    frame.render_widget(gauge, gauge_area);
}

fn render_suggestions(frame: &mut Frame, area: Rect, suggestions: &[String]) {
    let block = Block::default()
        .title(" Suggestions for Improvement ")
        .borders(Borders::TOP)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let items: Vec<ListItem> = suggestions
        .iter()
        .map(|s| {
            ListItem::new(Line::from(vec![
                Span::styled("  • ", Style::default().fg(ACCENT)),
                Span::styled(s.as_str(), Style::default().fg(HEADER_TEXT)),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn render_picker(frame: &mut Frame, area: Rect, picker: &PickerState, accept: &[String]) {
    let height = if picker.error.is_some() { 6 } else { 5 };
    let popup = centered_rect_by_size(area, PICKER_WIDTH.min(area.width), height);
    frame.render_widget(Clear, popup);

    let title = if accept.is_empty() {
        " Select resume ".to_string()
    } else {
        format!(" Select resume ({}) ", accept.join(", "))
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let mut lines = vec![
        Line::from(vec![
            Span::styled("> ", Style::default().fg(ACCENT)),
            Span::styled(picker.input.as_str(), Style::default().fg(HEADER_TEXT)),
            Span::styled("▏", Style::default().fg(ACCENT)),
        ]),
        Line::from(""),
    ];
    if let Some(error) = &picker.error {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Enter: Select  Esc: Cancel",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
    )));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        popup,
    );
}
