use crate::analyzer::{AnalyzerClient, SelectedFile};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the TUI until the user quits.
///
/// Blocks the calling thread; uploads are spawned onto `runtime`.
pub fn run(
    config: &Config,
    client: AnalyzerClient,
    runtime: Handle,
    initial_file: Option<SelectedFile>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(config, client, runtime, events.sender());
    if let Some(file) = initial_file {
        app.select_file(file);
    }

    let (mut terminal, guard) = setup_terminal()?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Layout is recomputed on the next draw.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::AnalysisFinished { session, result }) => {
                app.on_analysis_finished(session, result)
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
