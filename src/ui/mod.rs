//! Rendering layer
//!
//! Draws the header, the two page views and the overlays from application
//! state. Every color is read back through the managed style sheet; nothing
//! in here mutates presentation state directly. Renderers record the hit
//! zones (nav entries, filter chips, grid cells, overlay panels) that mouse
//! routing consumes on the next event.

pub mod gallery;
pub mod header;
pub mod home;
pub mod placeholder;

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, Route};
use crate::theme::PaletteToken;

/// Draw one full frame.
pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();
    app.hit.clear();

    // Page background
    f.render_widget(
        Block::default().style(Style::default().bg(app.styles.color(PaletteToken::Background))),
        area,
    );

    let header_height = header::height(app.header.is_compact()).min(area.height);
    let header_area = Rect::new(area.x, area.y, area.width, header_height);
    let hint_height = u16::from(area.height > header_height);
    let page_area = Rect::new(
        area.x,
        area.y + header_height,
        area.width,
        area.height.saturating_sub(header_height + hint_height),
    );
    let hint_area = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(hint_height),
        area.width,
        hint_height,
    );

    app.page_height = page_area.height;

    match app.route {
        Route::Home => home::render(f, app, page_area),
        Route::Gallery => gallery::render(f, app, page_area),
    }

    header::render(f, app, header_area);

    // Overlays draw above everything else
    if app.gallery.lightbox.is_open() {
        gallery::render_lightbox(f, app, page_area);
    }
    if app.home.contact.is_open() {
        home::render_contact(f, app, page_area);
    }

    render_hint_bar(f, app, hint_area);
}

/// One-row key hint bar at the bottom of the screen.
fn render_hint_bar(f: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let hint = if app.gallery.lightbox.is_open() {
        " esc close · ←/→ switch preview"
    } else if app.home.contact.is_open() {
        " esc close"
    } else {
        match app.route {
            Route::Home => " q quit · g gallery · c connect · ↑/↓ scroll",
            Route::Gallery => " q quit · h home · tab filter · ←/→ select · enter preview",
        }
    };
    let line = Line::styled(hint, app.styles.fg(PaletteToken::FooterText));
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(app.styles.color(PaletteToken::Background))),
        area,
    );
}

/// Wrap text into rows of at most `width` cells, breaking on spaces.
///
/// The home page builds its own rows so that section anchors stay in visual
/// row units.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current.is_empty() {
            if word_len <= width {
                current.push_str(word);
            } else {
                // Hard-split an overlong word
                let mut chunk = String::new();
                for ch in word.chars() {
                    if chunk.chars().count() == width {
                        rows.push(chunk.clone());
                        chunk.clear();
                    }
                    chunk.push(ch);
                }
                current = chunk;
            }
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            if word_len <= width {
                current.push_str(word);
            } else {
                let mut chunk = String::new();
                for ch in word.chars() {
                    if chunk.chars().count() == width {
                        rows.push(chunk.clone());
                        chunk.clear();
                    }
                    chunk.push(ch);
                }
                current = chunk;
            }
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_breaks_on_spaces() {
        let rows = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(rows, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_text_hard_splits_long_words() {
        let rows = wrap_text("abcdefghij", 4);
        assert_eq!(rows, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_empty_input_yields_one_row() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
