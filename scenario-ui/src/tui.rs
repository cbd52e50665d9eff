//! Terminal lifecycle and event loop for the interactive comparator.

use std::{io, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

use crate::{app::Session, logging, views};

/// Owns the terminal while the comparator runs and restores it on drop.
///
/// Stdout logging is switched off for the manager's lifetime; the caller
/// decides whether to switch it back on.
pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    session: Session,
}

impl TuiManager {
    pub fn new(session: Session) -> Result<Self> {
        // Log lines would tear through the alternate screen.
        if let Err(error) = logging::set_stdout_enabled(false) {
            warn!(%error, "could not silence stdout logging");
        }

        enable_raw_mode().context("enabling raw mode")?;
        let terminal = restore_on_failure(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
                Terminal::new(CrosstermBackend::new(stdout)).context("creating terminal")
            },
            || {
                let raw_mode = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                raw_mode
            },
        )?;

        Ok(Self { terminal, session })
    }

    pub fn run(&mut self) -> Result<()> {
        debug!("terminal UI started");
        loop {
            self.terminal
                .draw(|frame| views::render(frame, &self.session))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }
                    if self.session.handle_key(key) {
                        break;
                    }
                }
            }
        }

        self.cleanup()?;
        debug!("terminal UI closed");
        Ok(())
    }

    /// The session as it stood when the loop ended.
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Runs the rest of terminal setup, undoing raw mode if any step fails.
///
/// [`Drop`] only covers a fully built manager.
fn restore_on_failure<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    setup().inspect_err(|_| {
        if let Err(error) = restore() {
            warn!(%error, "could not restore terminal after failed setup");
        }
    })
}
