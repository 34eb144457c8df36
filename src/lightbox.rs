//! Lightbox overlay state machine
//!
//! Closed/Open(item) with the side effects the overlay owns: entering any
//! Open state locks page scrolling and activates the Escape scope; reaching
//! Closed releases both, unconditionally, even after several direct
//! Open-to-Open switches. Releases are idempotent and also run on teardown so
//! nothing leaks across view changes.

use ratatui::layout::{Position, Rect};

use crate::catalog::GalleryItem;

/// Page scroll lock. Acquire/release are idempotent; `release` is safe to
/// call any number of times, including after teardown.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self) {
        if !self.locked {
            self.locked = true;
            tracing::debug!("page scroll locked");
        }
    }

    pub fn release(&mut self) {
        if self.locked {
            self.locked = false;
            tracing::debug!("page scroll restored");
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

/// Scope for the global Escape listener: active only while an overlay is
/// open, deactivated on dismiss and on teardown.
#[derive(Debug, Clone, Default)]
struct EscapeScope {
    active: bool,
}

impl EscapeScope {
    fn activate(&mut self) {
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open(GalleryItem),
}

/// Full-screen preview controller for one selected gallery item.
#[derive(Debug, Clone)]
pub struct LightboxController {
    state: LightboxState,
    scroll_lock: ScrollLock,
    escape: EscapeScope,
}

impl LightboxController {
    pub fn new() -> Self {
        Self {
            state: LightboxState::Closed,
            scroll_lock: ScrollLock::new(),
            escape: EscapeScope::default(),
        }
    }

    /// Open the preview on `item`. Works from Closed and from any other Open
    /// state (direct switch, no intermediate Closed).
    pub fn select(&mut self, item: GalleryItem) {
        self.scroll_lock.acquire();
        self.escape.activate();
        tracing::debug!(id = item.id, title = %item.title, "lightbox open");
        self.state = LightboxState::Open(item);
    }

    /// Close the preview from any Open state. Restores scrolling and drops
    /// the Escape scope unconditionally; a no-op when already Closed.
    pub fn dismiss(&mut self) {
        if self.state != LightboxState::Closed {
            tracing::debug!("lightbox dismissed");
        }
        self.state = LightboxState::Closed;
        self.scroll_lock.release();
        self.escape.deactivate();
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    pub fn current(&self) -> Option<&GalleryItem> {
        match &self.state {
            LightboxState::Open(item) => Some(item),
            LightboxState::Closed => None,
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    /// Whether the global Escape key currently belongs to this controller.
    pub fn wants_escape(&self) -> bool {
        self.escape.active
    }

    /// Route an Escape key press. Returns true if it was consumed.
    pub fn handle_escape(&mut self) -> bool {
        if self.escape.active {
            self.dismiss();
            true
        } else {
            false
        }
    }

    /// Route a click at (x, y) against the rendered content panel. A click on
    /// the backdrop dismisses; a click on the panel itself is swallowed.
    /// Returns true if the click was consumed.
    pub fn handle_click(&mut self, x: u16, y: u16, panel: Rect) -> bool {
        if !self.is_open() {
            return false;
        }
        if !panel.contains(Position { x, y }) {
            self.dismiss();
        }
        true
    }
}

impl Default for LightboxController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LightboxController {
    fn drop(&mut self) {
        // Teardown releases everything the overlay acquired
        self.scroll_lock.release();
        self.escape.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32) -> GalleryItem {
        GalleryItem {
            id,
            category: "Logo".to_string(),
            title: format!("Work {}", id),
            image: String::new(),
        }
    }

    #[test]
    fn test_select_then_dismiss() {
        let mut lightbox = LightboxController::new();
        assert!(!lightbox.is_open());
        assert!(!lightbox.scroll_locked());

        lightbox.select(item(1));
        assert!(lightbox.is_open());
        assert!(lightbox.scroll_locked());
        assert!(lightbox.wants_escape());

        lightbox.dismiss();
        assert_eq!(*lightbox.state(), LightboxState::Closed);
        assert!(!lightbox.scroll_locked());
        assert!(!lightbox.wants_escape());
    }

    #[test]
    fn test_direct_switch_between_items() {
        let mut lightbox = LightboxController::new();
        lightbox.select(item(1));
        lightbox.select(item(2));

        // Switched without passing through Closed
        assert_eq!(lightbox.current().map(|i| i.id), Some(2));
        assert!(lightbox.scroll_locked());

        // A single dismiss still restores scrolling
        lightbox.dismiss();
        assert!(!lightbox.scroll_locked());
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut lightbox = LightboxController::new();
        lightbox.dismiss();
        lightbox.select(item(1));
        lightbox.dismiss();
        lightbox.dismiss();
        assert!(!lightbox.is_open());
        assert!(!lightbox.scroll_locked());
    }

    #[test]
    fn test_escape_only_consumed_while_open() {
        let mut lightbox = LightboxController::new();
        assert!(!lightbox.handle_escape());

        lightbox.select(item(3));
        assert!(lightbox.handle_escape());
        assert!(!lightbox.is_open());

        // Scope is gone after dismissal
        assert!(!lightbox.handle_escape());
    }

    #[test]
    fn test_backdrop_click_dismisses_panel_click_does_not() {
        let mut lightbox = LightboxController::new();
        let panel = Rect::new(10, 5, 20, 10);

        assert!(!lightbox.handle_click(0, 0, panel), "closed ignores clicks");

        lightbox.select(item(1));
        assert!(lightbox.handle_click(15, 8, panel));
        assert!(lightbox.is_open(), "panel click is swallowed");

        assert!(lightbox.handle_click(0, 0, panel));
        assert!(!lightbox.is_open(), "backdrop click dismisses");
        assert!(!lightbox.scroll_locked());
    }

    #[test]
    fn test_scroll_lock_release_idempotent() {
        let mut lock = ScrollLock::new();
        lock.release();
        lock.acquire();
        lock.acquire();
        assert!(lock.is_locked());
        lock.release();
        lock.release();
        assert!(!lock.is_locked());
    }
}
