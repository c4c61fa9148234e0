//! Counter page rendering.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::theme::{ACTIVE_HIGHLIGHT, BUTTON_PRIMARY, BUTTON_SECONDARY, HEADER_TEXT, STATUS_ERROR};

use super::intent::CounterIntent;

/// Buttons on the counter page, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterButton {
    #[default]
    Increment,
    Decrement,
    Reset,
}

impl CounterButton {
    pub const ALL: [CounterButton; 3] = [
        CounterButton::Increment,
        CounterButton::Decrement,
        CounterButton::Reset,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CounterButton::Increment => "Increment",
            CounterButton::Decrement => "Decrement",
            CounterButton::Reset => "Reset",
        }
    }

    pub fn intent(self) -> CounterIntent {
        match self {
            CounterButton::Increment => CounterIntent::Increment,
            CounterButton::Decrement => CounterIntent::Decrement,
            CounterButton::Reset => CounterIntent::Reset,
        }
    }

    /// Move focus by `delta`, wrapping at both ends.
    pub fn shift(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let idx = Self::ALL.iter().position(|b| *b == self).unwrap_or(0) as isize;
        Self::ALL[(idx + delta).rem_euclid(len) as usize]
    }
}

pub fn render_counter(frame: &mut Frame, area: Rect, value: i64, focused: CounterButton) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!("Counter: {}", value),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[1]);

    let mut spans = Vec::new();
    for (idx, button) in CounterButton::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("    "));
        }
        let color = match button {
            CounterButton::Increment => BUTTON_PRIMARY,
            CounterButton::Decrement => BUTTON_SECONDARY,
            CounterButton::Reset => STATUS_ERROR,
        };
        let mut style = Style::default().fg(color);
        if *button == focused {
            style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(format!(" {} ", button.label()), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        rows[3],
    );

    let hint = Paragraph::new(Line::from(Span::styled(
        "+ / - / 0   or   ←/→ + Enter",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, rows[4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(CounterButton::Increment.shift(-1), CounterButton::Reset);
        assert_eq!(CounterButton::Reset.shift(1), CounterButton::Increment);
        assert_eq!(CounterButton::Increment.shift(1), CounterButton::Decrement);
    }

    #[test]
    fn buttons_map_to_intents() {
        assert_eq!(CounterButton::Reset.intent(), CounterIntent::Reset);
        assert_eq!(CounterButton::Decrement.intent(), CounterIntent::Decrement);
    }
}
