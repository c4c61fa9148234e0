use crate::config::PageKind;
use crate::ui::app::App;
use crate::ui::counter::CounterIntent;
use crate::ui::upload::UploadIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Notices are modal until acknowledged.
    if app.notice().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_notice();
        }
        return;
    }

    if app.upload().is_picking() {
        handle_picker_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            app.next_page();
            return;
        }
        KeyCode::Char('q') => {
            app.request_quit();
            return;
        }
        _ => {}
    }

    match app.page() {
        PageKind::Counter => handle_counter_key(app, key),
        PageKind::Analyzer => handle_analyzer_key(app, key),
    }
}

fn handle_counter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') => app.dispatch_counter(CounterIntent::Increment),
        KeyCode::Char('-') => app.dispatch_counter(CounterIntent::Decrement),
        KeyCode::Char('0') | KeyCode::Char('r') => app.dispatch_counter(CounterIntent::Reset),
        KeyCode::Left => app.move_counter_focus(-1),
        KeyCode::Right => app.move_counter_focus(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.press_counter_focus(),
        _ => {}
    }
}

fn handle_analyzer_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('o') => app.open_picker(),
        KeyCode::Enter => {
            let outcome = app.submit();
            tracing::trace!(?outcome, "review pressed");
        }
        _ => {}
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_upload(UploadIntent::ClosePicker),
        KeyCode::Enter => app.confirm_picker(),
        KeyCode::Backspace => app.dispatch_upload(UploadIntent::PickerBackspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_upload(UploadIntent::PickerInput(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
