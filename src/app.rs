//! Application shell
//!
//! Owns all interaction state: the current route, the two page views, the
//! scroll-spy header, the style sheet and the theme schedule. Input events
//! are routed here with overlay priority (an open lightbox or contact panel
//! sees keys and clicks first), and the periodic theme tick re-applies the
//! palette through the one managed style sheet.

use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::content::HomeContent;
use crate::frontend::FrontendEvent;
use crate::gallery::GalleryView;
use crate::lightbox::ScrollLock;
use crate::scrollspy::ScrollSpy;
use crate::style::StyleSheet;
use crate::theme::{Palette, ThemeResolver};

/// Addressable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Gallery,
}

/// Scroll anchors inside the home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Skills,
    Contact,
}

/// What a nav entry or inline link does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Route(Route),
    Section(Section),
    /// Open the contact overlay.
    Connect,
}

/// Row offsets of the home sections, recorded while the home page is built.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionAnchors {
    pub about: u16,
    pub projects: u16,
    pub skills: u16,
    pub contact: u16,
}

impl SectionAnchors {
    pub fn get(&self, section: Section) -> u16 {
        match section {
            Section::About => self.about,
            Section::Projects => self.projects,
            Section::Skills => self.skills,
            Section::Contact => self.contact,
        }
    }
}

/// "Connect With Me" overlay. Follows the same discipline as the lightbox:
/// scroll locked while open, Escape scoped to the overlay, releases
/// idempotent and run on teardown.
#[derive(Debug, Default)]
pub struct ContactOverlay {
    open: bool,
    scroll_lock: ScrollLock,
}

impl ContactOverlay {
    pub fn open(&mut self) {
        self.scroll_lock.acquire();
        self.open = true;
    }

    pub fn dismiss(&mut self) {
        self.open = false;
        self.scroll_lock.release();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    pub fn handle_escape(&mut self) -> bool {
        if self.open {
            self.dismiss();
            true
        } else {
            false
        }
    }

    /// Backdrop click dismisses, panel click is swallowed.
    pub fn handle_click(&mut self, x: u16, y: u16, panel: Rect) -> bool {
        if !self.open {
            return false;
        }
        if !panel.contains(Position { x, y }) {
            self.dismiss();
        }
        true
    }
}

impl Drop for ContactOverlay {
    fn drop(&mut self) {
        self.scroll_lock.release();
    }
}

/// Home view state.
#[derive(Debug, Default)]
pub struct HomeView {
    pub scroll: u16,
    pub content_height: u16,
    pub anchors: SectionAnchors,
    pub contact: ContactOverlay,
}

/// Mouse hit zones recorded by the rendering layer each frame.
#[derive(Debug, Default)]
pub struct HitZones {
    pub nav: Vec<(Rect, NavTarget)>,
    pub chips: Vec<(Rect, String)>,
    pub cells: Vec<(Rect, u32)>,
    pub lightbox_panel: Option<Rect>,
    pub contact_panel: Option<Rect>,
}

impl HitZones {
    pub fn clear(&mut self) {
        self.nav.clear();
        self.chips.clear();
        self.cells.clear();
        self.lightbox_panel = None;
        self.contact_panel = None;
    }

    fn nav_at(&self, x: u16, y: u16) -> Option<NavTarget> {
        let pos = Position { x, y };
        self.nav
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, target)| *target)
    }

    fn chip_at(&self, x: u16, y: u16) -> Option<String> {
        let pos = Position { x, y };
        self.chips
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, category)| category.clone())
    }

    fn cell_at(&self, x: u16, y: u16) -> Option<u32> {
        let pos = Position { x, y };
        self.cells
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, id)| *id)
    }
}

/// Top-level application state.
pub struct App {
    pub config: Config,
    pub catalog: Catalog,
    pub content: HomeContent,

    pub styles: StyleSheet,
    pub theme: ThemeResolver,

    pub route: Route,
    pub home: HomeView,
    pub gallery: GalleryView,
    pub header: ScrollSpy,

    pub hit: HitZones,
    /// Height of the page viewport, recorded at render time for clamping.
    pub page_height: u16,

    pub running: bool,
    pub needs_render: bool,

    last_theme_check: Instant,
}

impl App {
    pub fn new(config: Config, catalog: Catalog, content: HomeContent) -> Self {
        // Eager resolve + apply so the first frame already has the right
        // palette
        let theme = ThemeResolver::new();
        let mut styles = StyleSheet::new();
        styles.apply(&Palette::resolve(theme.mode()));
        tracing::info!(mode = theme.mode().name(), "theme resolved at startup");

        let header = ScrollSpy::new(config.ui.header_scroll_threshold);

        Self {
            config,
            catalog,
            content,
            styles,
            theme,
            route: Route::Home,
            home: HomeView::default(),
            gallery: GalleryView::new(),
            header,
            hit: HitZones::default(),
            page_height: 0,
            running: true,
            needs_render: true,
            last_theme_check: Instant::now(),
        }
    }

    /// Periodic work, called once per loop iteration. Re-resolves the theme
    /// on the configured schedule.
    pub fn tick(&mut self) {
        let interval = Duration::from_secs(self.config.ui.theme_check_secs.max(1));
        if self.last_theme_check.elapsed() >= interval {
            self.last_theme_check = Instant::now();
            self.theme.refresh();
            self.apply_theme();
        }
    }

    /// Push the current mode's palette through the managed style sheet.
    /// Idempotent when the mode hasn't changed.
    fn apply_theme(&mut self) {
        let before = self.styles.revision();
        self.styles.apply(&Palette::resolve(self.theme.mode()));
        if self.styles.revision() != before {
            tracing::info!(mode = self.theme.mode().name(), "theme mode changed");
            self.needs_render = true;
        }
    }

    /// Whether background page scrolling is currently disabled by an overlay.
    pub fn scroll_locked(&self) -> bool {
        self.gallery.lightbox.scroll_locked() || self.home.contact.scroll_locked()
    }

    /// Scroll offset of the active view.
    pub fn active_scroll(&self) -> u16 {
        match self.route {
            Route::Home => self.home.scroll,
            Route::Gallery => self.gallery.scroll,
        }
    }

    fn set_active_scroll(&mut self, offset: u16) {
        match self.route {
            Route::Home => self.home.scroll = offset,
            Route::Gallery => self.gallery.scroll = offset,
        }
        self.header.observe(offset);
        self.needs_render = true;
    }

    /// Scroll the active page, unless an overlay holds the scroll lock.
    pub fn scroll_by(&mut self, delta: i32) {
        if self.scroll_locked() {
            return;
        }
        let current = self.active_scroll() as i32;
        let next = (current + delta).max(0).min(u16::MAX as i32) as u16;
        self.set_active_scroll(next);
    }

    /// Jump the active page to an absolute offset (nav anchors, Home key).
    pub fn scroll_to(&mut self, offset: u16) {
        if self.scroll_locked() {
            return;
        }
        self.set_active_scroll(offset);
    }

    /// Switch views. The arriving page starts at the top.
    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            tracing::debug!(?route, "route change");
            self.route = route;
            self.set_active_scroll(0);
        }
    }

    fn activate(&mut self, target: NavTarget) {
        match target {
            NavTarget::Route(route) => self.navigate(route),
            NavTarget::Section(section) => {
                // Section anchors live on the home page; navigate there
                // first, then scroll
                self.navigate(Route::Home);
                self.scroll_to(self.home.anchors.get(section));
            }
            NavTarget::Connect => {
                self.navigate(Route::Home);
                self.home.contact.open();
                self.needs_render = true;
            }
        }
    }

    pub fn handle_event(&mut self, event: FrontendEvent) {
        match event {
            FrontendEvent::Key { code, modifiers } => self.handle_key(code, modifiers),
            FrontendEvent::Mouse { kind, x, y } => self.handle_mouse(kind, x, y),
            FrontendEvent::Resize { .. } => self.needs_render = true,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.running = false;
            return;
        }

        // Overlays see keys first
        if self.gallery.lightbox.is_open() {
            match code {
                KeyCode::Esc => {
                    self.gallery.lightbox.handle_escape();
                }
                KeyCode::Char('x') => self.gallery.lightbox.dismiss(),
                KeyCode::Left => self.gallery.switch_preview(&self.catalog, false),
                KeyCode::Right => self.gallery.switch_preview(&self.catalog, true),
                _ => {}
            }
            self.needs_render = true;
            return;
        }
        if self.home.contact.is_open() {
            match code {
                KeyCode::Esc => {
                    self.home.contact.handle_escape();
                }
                KeyCode::Char('x') => self.home.contact.dismiss(),
                _ => {}
            }
            self.needs_render = true;
            return;
        }

        let step = self.config.ui.scroll_step as i32;
        match code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('h') => self.navigate(Route::Home),
            KeyCode::Char('g') => self.navigate(Route::Gallery),
            KeyCode::Up => self.scroll_by(-step),
            KeyCode::Down => self.scroll_by(step),
            KeyCode::PageUp => self.scroll_by(-(self.page_height.max(1) as i32)),
            KeyCode::PageDown => self.scroll_by(self.page_height.max(1) as i32),
            KeyCode::Home => self.scroll_to(0),
            _ => match self.route {
                Route::Home => self.handle_home_key(code),
                Route::Gallery => self.handle_gallery_key(code),
            },
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        if code == KeyCode::Char('c') {
            self.home.contact.open();
            self.needs_render = true;
        }
    }

    fn handle_gallery_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab => self.gallery.cycle_category(&self.catalog, true),
            KeyCode::BackTab => self.gallery.cycle_category(&self.catalog, false),
            KeyCode::Left => self.gallery.move_cursor(&self.catalog, -1),
            KeyCode::Right => self.gallery.move_cursor(&self.catalog, 1),
            KeyCode::Enter => self.gallery.open_selected(&self.catalog),
            KeyCode::Char('b') => self.navigate(Route::Home),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.gallery.select_category_index(&self.catalog, index);
            }
            _ => return,
        }
        self.needs_render = true;
    }

    pub fn handle_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        let step = self.config.ui.scroll_step as i32;
        match kind {
            MouseEventKind::ScrollUp => self.scroll_by(-step),
            MouseEventKind::ScrollDown => self.scroll_by(step),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(x, y),
            _ => {}
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) {
        // Overlay panels take clicks first
        if self.gallery.lightbox.is_open() {
            let panel = self.hit.lightbox_panel.unwrap_or_default();
            self.gallery.lightbox.handle_click(x, y, panel);
            self.needs_render = true;
            return;
        }
        if self.home.contact.is_open() {
            let panel = self.hit.contact_panel.unwrap_or_default();
            self.home.contact.handle_click(x, y, panel);
            self.needs_render = true;
            return;
        }

        if let Some(target) = self.hit.nav_at(x, y) {
            self.activate(target);
            self.needs_render = true;
            return;
        }
        if let Some(category) = self.hit.chip_at(x, y) {
            self.gallery.select_category(&self.catalog, &category);
            self.needs_render = true;
            return;
        }
        if let Some(id) = self.hit.cell_at(x, y) {
            self.gallery.open_item(&self.catalog, id);
            self.needs_render = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GalleryItem;

    fn app() -> App {
        let catalog = Catalog {
            items: vec![
                GalleryItem {
                    id: 1,
                    category: "Logo".to_string(),
                    title: "Tech Start-Up".to_string(),
                    image: String::new(),
                },
                GalleryItem {
                    id: 2,
                    category: "Poster".to_string(),
                    title: "Music Festival".to_string(),
                    image: String::new(),
                },
            ],
        };
        let content = HomeContent::embedded().unwrap();
        App::new(Config::embedded().unwrap(), catalog, content)
    }

    #[test]
    fn test_startup_applies_palette_once() {
        let app = app();
        assert_eq!(app.styles.block_count(), 1);
        assert_eq!(app.styles.revision(), 1);
    }

    #[test]
    fn test_route_change_resets_scroll() {
        let mut app = app();
        app.scroll_by(30);
        assert_eq!(app.home.scroll, 30);
        assert!(app.header.is_compact());

        app.navigate(Route::Gallery);
        assert_eq!(app.active_scroll(), 0);
        assert!(!app.header.is_compact());

        // Every route change lands at the top of the arriving page
        app.navigate(Route::Home);
        assert_eq!(app.active_scroll(), 0);
    }

    #[test]
    fn test_scroll_ignored_while_overlay_open() {
        let mut app = app();
        app.navigate(Route::Gallery);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.scroll_locked());

        app.scroll_by(10);
        assert_eq!(app.gallery.scroll, 0);

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.scroll_locked());
        app.scroll_by(10);
        assert_eq!(app.gallery.scroll, 10);
    }

    #[test]
    fn test_escape_routed_to_open_overlay_only() {
        let mut app = app();
        // Esc with nothing open is a no-op
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.running);

        app.home.contact.open();
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.home.contact.is_open());
    }

    #[test]
    fn test_preview_switch_keys() {
        let mut app = app();
        app.navigate(Route::Gallery);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.gallery.lightbox.current().map(|i| i.id), Some(1));

        app.handle_key(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.gallery.lightbox.current().map(|i| i.id), Some(2));

        // Switching never released the scroll lock
        assert!(app.scroll_locked());

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.scroll_locked());
    }

    #[test]
    fn test_category_keys() {
        let mut app = app();
        app.navigate(Route::Gallery);
        app.handle_key(KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(app.gallery.selected_category(), "Logo");

        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.gallery.selected_category(), "Poster");

        // Out-of-range digit is ignored
        app.handle_key(KeyCode::Char('9'), KeyModifiers::NONE);
        assert_eq!(app.gallery.selected_category(), "Poster");
    }

    #[test]
    fn test_connect_target_opens_overlay_on_home() {
        let mut app = app();
        app.navigate(Route::Gallery);
        app.activate(NavTarget::Connect);
        assert_eq!(app.route, Route::Home);
        assert!(app.home.contact.is_open());
        assert!(app.scroll_locked());
    }

    #[test]
    fn test_section_anchor_navigation() {
        let mut app = app();
        app.navigate(Route::Gallery);
        app.home.anchors.projects = 42;
        app.activate(NavTarget::Section(Section::Projects));
        assert_eq!(app.route, Route::Home);
        assert_eq!(app.home.scroll, 42);
        assert!(app.header.is_compact());
    }
}
