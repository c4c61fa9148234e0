use crate::config::PageKind;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: page tabs plus a busy marker while an upload is in flight.
pub struct Header {
    page: PageKind,
    busy: bool,
}

impl Header {
    pub fn new(page: PageKind, busy: bool) -> Self {
        Self { page, busy }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let active_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled("  ", text_style)];
        for (idx, page) in [PageKind::Counter, PageKind::Analyzer].into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  │  ", separator_style));
            }
            let style = if page == self.page {
                active_style
            } else {
                text_style
            };
            spans.push(Span::styled(page.title(), style));
        }
        if self.busy {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("uploading", Style::default().fg(STATUS_OK)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
