//! Gallery page
//!
//! Page chrome (back link, heading, filter chips), the card grid for the
//! filtered items, and the full-screen lightbox overlay. Cards draw their
//! placeholder art from the item's image ref; chips and cells are recorded
//! as hit zones.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, NavTarget, Route};
use crate::catalog::GalleryItem;
use crate::theme::PaletteToken;
use crate::ui::placeholder::PlaceholderArt;
use crate::ui::wrap_text;

const CARD_HEIGHT: u16 = 9;
const CARD_GAP: u16 = 2;

/// Column count for a given content width.
fn column_count(width: u16) -> u16 {
    if width >= 78 {
        3
    } else if width >= 52 {
        2
    } else {
        1
    }
}

pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if area.width < 10 || area.height == 0 {
        return;
    }
    let content_area = Rect::new(
        area.x + 2,
        area.y,
        area.width.saturating_sub(4),
        area.height,
    );
    let width = content_area.width;

    let secondary = app.styles.fg(PaletteToken::TextSecondary);
    let heading = app
        .styles
        .fg(PaletteToken::Text)
        .add_modifier(Modifier::BOLD);
    let link = app.styles.fg(PaletteToken::AccentLink);

    let categories = app.catalog.categories();
    let selected = app.gallery.selected_category().to_string();
    let items: Vec<GalleryItem> = app
        .gallery
        .filtered(&app.catalog)
        .into_iter()
        .cloned()
        .collect();
    let cursor = app.gallery.cursor();

    // Page chrome rows
    let mut chrome: Vec<Line> = vec![
        Line::raw(""),
        Line::styled("← Back to Home", link),
        Line::raw(""),
        Line::styled("Graphic Design Gallery", heading).centered(),
    ];
    let back_row = 1usize;
    for row in wrap_text(
        "Beyond code, I explore creativity through visual design. Here are some of my works.",
        width,
    ) {
        chrome.push(Line::styled(row, secondary).centered());
    }
    chrome.push(Line::raw(""));

    // Filter chips, with their x positions for hit zones
    let chip_row = chrome.len();
    let mut chip_spans = Vec::new();
    let mut chip_zones: Vec<(u16, u16, String)> = Vec::new();
    let mut x = 0u16;
    for category in &categories {
        let label = format!(" {} ", category);
        let chip_width = label.chars().count() as u16;
        let style = if *category == selected {
            Style::default()
                .fg(ratatui::style::Color::Rgb(255, 255, 255))
                .bg(app.styles.color(PaletteToken::AccentPrimary))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(app.styles.color(PaletteToken::TextSecondary))
                .bg(app.styles.color(PaletteToken::TagBg))
        };
        chip_spans.push(Span::styled(label, style));
        chip_spans.push(Span::raw(" "));
        chip_zones.push((x, chip_width, category.clone()));
        x += chip_width + 1;
    }
    chrome.push(Line::from(chip_spans));
    chrome.push(Line::raw(""));

    let chrome_len = chrome.len() as u16;

    // Grid geometry
    let cols = column_count(width);
    let card_width = (width - (cols - 1) * CARD_GAP) / cols;
    let grid_rows = (items.len() as u16).div_ceil(cols);
    let total_height = chrome_len + grid_rows * (CARD_HEIGHT + 1);

    // Clamp the page offset against the real content height
    let max_scroll = total_height.saturating_sub(content_area.height);
    if app.gallery.scroll > max_scroll {
        app.gallery.scroll = max_scroll;
    }
    let scroll = app.gallery.scroll;

    // Visible chrome slice
    let visible: Vec<Line> = chrome
        .iter()
        .skip(scroll as usize)
        .take(content_area.height as usize)
        .cloned()
        .collect();
    f.render_widget(Paragraph::new(visible), content_area);

    let row_visible = |row: usize| -> Option<u16> {
        let row = row as u16;
        if row >= scroll && row < scroll + content_area.height {
            Some(content_area.y + row - scroll)
        } else {
            None
        }
    };

    if let Some(y) = row_visible(back_row) {
        app.hit.nav.push((
            Rect::new(content_area.x, y, 14, 1),
            NavTarget::Route(Route::Home),
        ));
    }
    if let Some(y) = row_visible(chip_row) {
        for (chip_x, chip_width, category) in chip_zones {
            app.hit.chips.push((
                Rect::new(content_area.x + chip_x, y, chip_width, 1),
                category,
            ));
        }
    }

    // Cards. Partially scrolled-off cards are skipped rather than clipped.
    for (index, item) in items.iter().enumerate() {
        let col = index as u16 % cols;
        let row = index as u16 / cols;
        let virtual_y = chrome_len + row * (CARD_HEIGHT + 1);
        if virtual_y < scroll || virtual_y + CARD_HEIGHT > scroll + content_area.height {
            continue;
        }
        let card = Rect::new(
            content_area.x + col * (card_width + CARD_GAP),
            content_area.y + virtual_y - scroll,
            card_width,
            CARD_HEIGHT,
        );
        render_card(f, app, card, item, index == cursor);
        app.hit.cells.push((card, item.id));
    }

    if items.is_empty() {
        let y = content_area.y + (chrome_len.min(content_area.height.saturating_sub(1)));
        f.render_widget(
            Paragraph::new(Line::styled("No works in this category.", secondary).centered()),
            Rect::new(content_area.x, y, content_area.width, 1),
        );
    }
}

fn render_card(f: &mut Frame, app: &App, area: Rect, item: &GalleryItem, selected: bool) {
    let border = if selected {
        app.styles
            .fg(PaletteToken::AccentHover)
            .add_modifier(Modifier::BOLD)
    } else {
        app.styles.fg(PaletteToken::BorderLight)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .style(Style::default().bg(app.styles.color(PaletteToken::GlassBg)));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 3 {
        return;
    }

    // Placeholder art occupies everything above the caption rows
    let art = PlaceholderArt::resolve(&item.image);
    let art_height = inner.height - 2;
    let mut art_lines = Vec::new();
    for row in 0..art_height {
        if row == art_height / 2 {
            art_lines.push(Line::styled(art.label.clone(), Style::default().fg(art.fg)).centered());
        } else {
            art_lines.push(Line::raw(""));
        }
    }
    f.render_widget(
        Paragraph::new(art_lines).style(Style::default().bg(art.bg)),
        Rect::new(inner.x, inner.y, inner.width, art_height),
    );

    let caption_y = inner.y + art_height;
    f.render_widget(
        Paragraph::new(Line::styled(
            item.title.clone(),
            app.styles
                .fg(PaletteToken::Text)
                .add_modifier(Modifier::BOLD),
        )),
        Rect::new(inner.x, caption_y, inner.width, 1),
    );
    f.render_widget(
        Paragraph::new(Line::styled(
            item.category.to_uppercase(),
            app.styles.fg(PaletteToken::AccentPrimary),
        )),
        Rect::new(inner.x, caption_y + 1, inner.width, 1),
    );
}

/// Full-screen preview for the open lightbox item.
pub fn render_lightbox(f: &mut Frame, app: &mut App, _page_area: Rect) {
    let Some(item) = app.gallery.lightbox.current().cloned() else {
        return;
    };
    let area = f.area();

    // Backdrop: the original dims the whole viewport to near-black
    f.render_widget(Clear, area);
    f.render_widget(
        Block::default().style(Style::default().bg(ratatui::style::Color::Rgb(8, 10, 18))),
        area,
    );

    let panel_width = 76.min(area.width.saturating_sub(8)).max(20);
    let panel_height = 22.min(area.height.saturating_sub(4)).max(8);
    let panel = Rect::new(
        area.x + (area.width.saturating_sub(panel_width)) / 2,
        area.y + (area.height.saturating_sub(panel_height)) / 2,
        panel_width,
        panel_height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.styles.fg(PaletteToken::BorderLight));
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    if inner.height < 4 {
        app.hit.lightbox_panel = Some(panel);
        return;
    }

    let art = PlaceholderArt::resolve(&item.image);
    let art_height = inner.height - 2;
    let mut art_lines = Vec::new();
    for row in 0..art_height {
        if row == 0 {
            art_lines.push(
                Line::styled("✕ ", Style::default().fg(art.fg)).right_aligned(),
            );
        } else if row == art_height / 2 {
            art_lines.push(Line::styled(art.label.clone(), Style::default().fg(art.fg)).centered());
        } else {
            art_lines.push(Line::raw(""));
        }
    }
    f.render_widget(
        Paragraph::new(art_lines).style(Style::default().bg(art.bg)),
        Rect::new(inner.x, inner.y, inner.width, art_height),
    );

    let caption_y = inner.y + art_height;
    f.render_widget(
        Paragraph::new(
            Line::styled(
                item.title.clone(),
                Style::default()
                    .fg(ratatui::style::Color::Rgb(255, 255, 255))
                    .add_modifier(Modifier::BOLD),
            )
            .centered(),
        ),
        Rect::new(inner.x, caption_y, inner.width, 1),
    );
    f.render_widget(
        Paragraph::new(
            Line::styled(
                item.category.clone(),
                Style::default().fg(ratatui::style::Color::Rgb(156, 163, 175)),
            )
            .centered(),
        ),
        Rect::new(inner.x, caption_y + 1, inner.width, 1),
    );

    app.hit.lightbox_panel = Some(panel);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count_by_width() {
        assert_eq!(column_count(100), 3);
        assert_eq!(column_count(78), 3);
        assert_eq!(column_count(60), 2);
        assert_eq!(column_count(40), 1);
    }
}
