//! Terminal frontend (ratatui + crossterm)
//!
//! Owns the terminal lifecycle: raw mode, alternate screen, mouse capture,
//! and the reverse of all three on teardown (including Drop, so a panic
//! still restores the terminal). Native crossterm events are converted into
//! the app-facing [`FrontendEvent`] shape so the rest of the code handles one
//! event type.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;
use std::time::Duration;

/// Frontend-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Mouse input
    Mouse {
        kind: MouseEventKind,
        x: u16,
        y: u16,
    },
    /// Terminal resize
    Resize { width: u16, height: u16 },
}

/// Terminal frontend wrapper.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
    cleaned_up: bool,
}

impl Tui {
    /// Initialize the terminal in raw mode with mouse capture on the
    /// alternate screen.
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(16), // ~60 FPS
            cleaned_up: false,
        })
    }

    /// Drain all pending input events, waiting at most one frame.
    pub fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        while event::poll(self.poll_timeout)? {
            if let Ok(ev) = event::read() {
                if let Some(frontend_event) = Self::convert_event(ev) {
                    events.push(frontend_event);
                }
            }
        }

        Ok(events)
    }

    /// Convert a crossterm event to a FrontendEvent.
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only key presses; repeats and releases are ignored
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::Key {
                    code: key_event.code,
                    modifiers: key_event.modifiers,
                })
            }
            Event::Mouse(mouse_event) => Some(FrontendEvent::Mouse {
                kind: mouse_event.kind,
                x: mouse_event.column,
                y: mouse_event.row,
            }),
            Event::Resize(w, h) => Some(FrontendEvent::Resize {
                width: w,
                height: h,
            }),
            _ => None,
        }
    }

    /// Draw one frame.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Current terminal size in character cells.
    pub fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn cleanup(&mut self) -> Result<()> {
        if self.cleaned_up {
            return Ok(());
        }
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        self.cleaned_up = true;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure the terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseButton, MouseEvent};

    #[test]
    fn test_key_press_converts() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE));
        assert_eq!(
            Tui::convert_event(ev),
            Some(FrontendEvent::Key {
                code: KeyCode::Char('g'),
                modifiers: KeyModifiers::NONE,
            })
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(Tui::convert_event(Event::Key(key)), None);
    }

    #[test]
    fn test_mouse_and_resize_convert() {
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        });
        assert!(matches!(
            Tui::convert_event(mouse),
            Some(FrontendEvent::Mouse { x: 4, y: 9, .. })
        ));

        assert_eq!(
            Tui::convert_event(Event::Resize(120, 40)),
            Some(FrontendEvent::Resize {
                width: 120,
                height: 40
            })
        );
    }
}
