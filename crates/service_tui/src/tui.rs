//! Terminal lifecycle and the blotter event loop.

use crate::app::BlotterApp;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::Duration;

/// Terminal wrapper owning raw mode and the alternate screen.
///
/// [`Drop`] restores the terminal, so a panic in the event loop still
/// leaves the shell usable.
pub struct Tui {
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    /// Take over the terminal
    pub fn new() -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal })
    }

    /// Run the blotter event loop until the user quits
    pub async fn run(&mut self, app: &mut BlotterApp, tick: Duration) -> Result<()> {
        loop {
            app.poll_feed();

            // Take a snapshot of the state for rendering
            let state = app.render_state();

            self.terminal.draw(|frame| {
                BlotterApp::draw(frame, &state);
            })?;

            // Handle events with timeout so feed polling keeps ticking
            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if app.should_quit() {
                return Ok(());
            }
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
