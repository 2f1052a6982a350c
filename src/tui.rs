//! Terminal lifecycle wrapper.
//!
//! Owns the ratatui terminal and the raw-mode/alternate-screen transitions.
//! Event polling uses a short timeout so the frame loop keeps ticking (and
//! animations keep sliding) while the user is idle.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self { terminal })
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore the terminal. Also done by the panic hook on crashes.
    pub fn exit(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        crossterm::execute!(io::stdout(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Poll for the next input event, returning `None` on timeout.
    pub fn poll_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll terminal events")? {
            let ev = event::read().context("Failed to read terminal event")?;
            return Ok(Some(ev));
        }
        Ok(None)
    }
}
