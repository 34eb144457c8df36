//! Site header
//!
//! Brand mark on the left, nav entries on the right. Once the page scrolls
//! past the spy threshold the header drops to its compact height and switches
//! to the opaque header background. Nav entry rects are recorded as hit
//! zones for mouse routing.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, NavTarget, Route, Section};
use crate::theme::PaletteToken;

/// Header rows used by the layout, by presentation mode.
pub fn height(compact: bool) -> u16 {
    if compact {
        2
    } else {
        4
    }
}

const NAV_ENTRIES: [(&str, NavTarget); 6] = [
    ("Home", NavTarget::Route(Route::Home)),
    ("About", NavTarget::Section(Section::About)),
    ("Projects", NavTarget::Section(Section::Projects)),
    ("Graphics", NavTarget::Route(Route::Gallery)),
    ("Skills", NavTarget::Section(Section::Skills)),
    ("Contact", NavTarget::Section(Section::Contact)),
];

pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let compact = app.header.is_compact();

    let bg = if compact {
        app.styles.color(PaletteToken::HeaderBg)
    } else {
        app.styles.color(PaletteToken::GlassBg)
    };
    let border = if compact {
        PaletteToken::GlassBorder
    } else {
        PaletteToken::BorderDark
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(app.styles.fg(border))
        .style(Style::default().bg(bg));
    f.render_widget(block, area);

    // Content row: top row when compact, vertically padded otherwise
    let content_y = if compact { area.y } else { area.y + 1 };

    // Brand mark
    let brand = Line::from(vec![
        Span::styled(
            "◆ NI",
            app.styles
                .fg(PaletteToken::AccentPrimary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", app.content.hero.name),
            app.styles.fg(PaletteToken::Text),
        ),
    ]);
    let brand_width = (brand.width() as u16).min(area.width.saturating_sub(2));
    f.render_widget(
        Paragraph::new(brand).style(Style::default().bg(bg)),
        Rect::new(area.x + 2, content_y, brand_width, 1).intersection(area),
    );

    // Nav entries, right-aligned
    let gap = 2u16;
    let total: u16 = NAV_ENTRIES
        .iter()
        .map(|(label, _)| label.chars().count() as u16 + gap)
        .sum::<u16>()
        .saturating_sub(gap);
    let mut x = area.right().saturating_sub(total + 2);

    let mut spans = Vec::new();
    for (i, (label, target)) in NAV_ENTRIES.iter().enumerate() {
        let active = matches!(
            (app.route, target),
            (Route::Home, NavTarget::Route(Route::Home))
                | (Route::Gallery, NavTarget::Route(Route::Gallery))
        );
        let style = if active {
            app.styles
                .fg(PaletteToken::AccentLink)
                .add_modifier(Modifier::BOLD)
        } else {
            app.styles.fg(PaletteToken::Text)
        };

        let width = label.chars().count() as u16;
        app.hit
            .nav
            .push((Rect::new(x, content_y, width, 1), *target));

        spans.push(Span::styled(*label, style));
        if i + 1 < NAV_ENTRIES.len() {
            spans.push(Span::raw("  "));
        }
        x += width + gap;
    }

    let nav_x = area.right().saturating_sub(total + 2).max(area.x);
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        Rect::new(nav_x, content_y, total.min(area.width), 1).intersection(area),
    );
}
