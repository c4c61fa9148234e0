use crate::config::PageKind;
use crate::ui::app::App;
use crate::ui::counter::render_counter;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};
use crate::ui::upload::{render_upload, Notice};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(
        Header::new(app.page(), app.upload().loading).widget(),
        header,
    );
    frame.render_widget(Clear, body);
    match app.page() {
        PageKind::Counter => render_counter(frame, body, app.counter_value(), app.counter_focus()),
        PageKind::Analyzer => render_upload(frame, body, app.upload(), app.accept()),
    }
    frame.render_widget(Footer::new(app.page()).widget(footer), footer);

    if let Some(notice) = app.notice() {
        render_notice(frame, body, notice);
    }
}

fn render_notice(frame: &mut Frame<'_>, body: Rect, notice: Notice) {
    let message = notice.message();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(HEADER_TEXT))),
        Line::from(""),
        Line::from(Span::styled(
            " OK ",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::REVERSED),
        )),
    ];

    let width = (message.chars().count() as u16).saturating_add(6).max(30);
    let height = lines.len() as u16 + 2;
    let area = centered_rect_by_size(body, width, height);

    let title_color = match notice {
        Notice::NoFileSelected => ACCENT,
        Notice::AnalysisFailed => STATUS_ERROR,
    };
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", notice.title()),
            Style::default().fg(title_color),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
