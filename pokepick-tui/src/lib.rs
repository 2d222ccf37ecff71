//! pokepick-tui - terminal Pokémon picker.
//!
//! Fetches one page of Pokémon names on startup and lets the user pick one
//! through a substring-filtered autocomplete widget. Committing a row raises
//! a notification modal with the selected name.

pub mod app;
pub mod event;
pub mod modal;
pub mod ui;
pub mod widgets;

use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, EventStream};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use log::debug;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app::App;
use crate::event::AppEvent;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Terminal or rendering I/O failure.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// Interval driving the loading spinner.
const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Run the application until the user quits.
///
/// Takes over the terminal for the duration: raw mode, the alternate
/// screen, and mouse capture. All three are released again before this
/// returns, whether the loop ended normally or with an error, and from the
/// panic hook when a draw call panics mid-frame.
pub async fn run() -> Result<(), Error> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));

    enable_raw_mode()?;
    if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture) {
        // Raw mode is already on at this point; undo it before bailing
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new();
    let result = event_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    result
}

/// One frame per iteration: draw the current state, then block until the
/// next event arrives from the input stream, the fetch channel, or the tick
/// timer.
async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<(), Error> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    app::spawn_options_fetch(pokepick_api::Client::new(), tx);

    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(TICK_INTERVAL);
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    debug!("entering event loop");
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        let event = tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(raw)) => event::convert_event(raw),
                    Some(Err(e)) => {
                        log::error!("event stream error: {e}");
                        None
                    }
                    None => break,
                }
            }
            Some(msg) = rx.recv() => Some(msg),
            _ = tick.tick() => Some(AppEvent::Tick),
        };

        if let Some(event) = event {
            app.handle_event(event);
        }
    }

    debug!("quit requested");
    Ok(())
}
