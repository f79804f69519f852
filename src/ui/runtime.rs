use crate::model::CardRecord;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::Theme;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Drives the viewer until the user quits or every event source is gone.
///
/// Blocking; call from a dedicated thread (`spawn_blocking`) so the store
/// worker keeps running on the tokio runtime.
pub fn run<R: CardRecord>(
    mut app: App<R>,
    events: EventHandler<R>,
    theme: Theme,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    app.request_fetch();

    loop {
        terminal.draw(|frame| draw(frame, &app, &theme))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Routes one queued event into the app. Ticks and resizes only force a redraw.
pub fn apply_event<R: CardRecord>(app: &mut App<R>, event: AppEvent<R>) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Paste(text) => handle_paste(app, &text),
        AppEvent::Store(event) => app.on_store_event(event),
        AppEvent::Tick | AppEvent::Resize(..) => {}
    }
}
