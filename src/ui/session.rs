//! # Interactive Session
//!
//! Terminal setup/teardown and the read-dispatch-render loop.
//!
//! The picker draws on **stderr** so that stdout carries nothing but the
//! final selection. The loop is strictly sequential: draw the current state,
//! block for one event, apply it, repeat until the model reports it is
//! finished.

use anyhow::{bail, Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, IsTerminal, Stderr};
use std::panic;

use crate::ui::app::App;

pub type PickerTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Source of terminal events (allows dependency injection for testing).
pub trait EventReader {
    /// Block until the next event is available.
    fn read_event(&mut self) -> Result<Event>;
}

/// Production event reader backed by crossterm.
pub struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self) -> Result<Event> {
        event::read().context("Failed to read terminal event")
    }
}

/// Drive `app` until it is confirmed or cancelled.
///
/// `draw` renders the current state; it is called once before every read.
pub fn run_session<R, D>(app: &mut App, events: &mut R, mut draw: D) -> Result<()>
where
    R: EventReader + ?Sized,
    D: FnMut(&App) -> Result<()>,
{
    while !app.is_finished() {
        draw(app)?;
        let event = events.read_event()?;
        app.handle_event(&event);
    }
    Ok(())
}

/// Switch stderr into raw mode on the alternate screen.
pub fn setup_terminal() -> Result<PickerTerminal> {
    if !io::stderr().is_terminal() {
        bail!("stderr is not an interactive terminal");
    }

    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stderr = io::stderr();
    if let Err(e) = execute!(stderr, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to setup terminal");
    }

    let backend = CrosstermBackend::new(stderr);
    match Terminal::new(backend) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stderr(), LeaveAlternateScreen);
            Err(e).context("Failed to create terminal")
        }
    }
}

/// Restore the terminal to its normal state.
pub fn restore_terminal(terminal: &mut PickerTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Make sure a panic does not leave the terminal in raw mode.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        original_hook(panic_info);
    }));
}
