//! Home page
//!
//! Builds the whole page as styled rows (hero, about, projects, skills,
//! contact, footer) so scroll offsets and section anchors share the same row
//! units, then draws the visible slice. Also renders the "Connect With Me"
//! overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, NavTarget, Route, Section, SectionAnchors};
use crate::content::HomeContent;
use crate::style::StyleSheet;
use crate::theme::PaletteToken;
use crate::ui::wrap_text;

/// The fully built home page: one styled line per row, an optional
/// activation target per row, and the section anchors.
pub struct HomePage {
    pub rows: Vec<Line<'static>>,
    pub targets: Vec<Option<NavTarget>>,
    pub anchors: SectionAnchors,
}

impl HomePage {
    fn push(&mut self, line: Line<'static>) {
        self.rows.push(line);
        self.targets.push(None);
    }

    fn push_link(&mut self, line: Line<'static>, target: NavTarget) {
        self.rows.push(line);
        self.targets.push(Some(target));
    }

    fn blank(&mut self) {
        self.push(Line::raw(""));
    }

    fn len(&self) -> u16 {
        self.rows.len() as u16
    }
}

/// Build the page for a given content width.
pub fn build(content: &HomeContent, styles: &StyleSheet, width: u16) -> HomePage {
    let mut page = HomePage {
        rows: Vec::new(),
        targets: Vec::new(),
        anchors: SectionAnchors::default(),
    };

    let text = styles.fg(PaletteToken::Text);
    let secondary = styles.fg(PaletteToken::TextSecondary);
    let heading = text.add_modifier(Modifier::BOLD);
    let link = styles.fg(PaletteToken::AccentLink);

    // Hero
    page.blank();
    page.push(Line::styled(
        content.hero.name.clone(),
        text.add_modifier(Modifier::BOLD),
    ));
    page.push(Line::styled(
        content.hero.tagline.clone(),
        styles
            .fg(PaletteToken::AccentPrimary)
            .add_modifier(Modifier::BOLD),
    ));
    page.blank();
    for row in wrap_text(&content.hero.intro, width) {
        page.push(Line::styled(row, secondary));
    }
    page.blank();
    page.push_link(
        Line::styled("View My Work ↓", link),
        NavTarget::Section(Section::Projects),
    );
    page.push_link(Line::styled("Get In Touch ✉", link), NavTarget::Connect);

    // About
    page.blank();
    page.blank();
    page.anchors.about = page.len();
    page.push(Line::styled(content.about.heading.clone(), heading));
    page.blank();
    for paragraph in &content.about.paragraphs {
        for row in wrap_text(paragraph, width) {
            page.push(Line::styled(row, text));
        }
        page.blank();
    }

    // Projects
    page.blank();
    page.anchors.projects = page.len();
    page.push(Line::styled("Projects", heading));
    for row in wrap_text(
        "Some of the projects I've built to demonstrate my skills in frontend and backend development.",
        width,
    ) {
        page.push(Line::styled(row, secondary));
    }
    for project in &content.projects {
        page.blank();
        page.push(Line::styled(project.title.clone(), heading));
        for row in wrap_text(&project.description, width) {
            page.push(Line::styled(row, secondary));
        }

        let mut tag_spans = Vec::new();
        for tag in &project.tags {
            tag_spans.push(Span::styled(
                format!(" {} ", tag),
                Style::default()
                    .fg(styles.color(PaletteToken::TagText))
                    .bg(styles.color(PaletteToken::TagBg)),
            ));
            tag_spans.push(Span::raw(" "));
        }
        page.push(Line::from(tag_spans));

        if project.internal {
            page.push_link(
                Line::styled("View Gallery →", link),
                NavTarget::Route(Route::Gallery),
            );
        } else if project.link == "#" {
            page.push(Line::styled("View Demo →", link));
        } else {
            page.push(Line::styled(format!("View Demo → {}", project.link), link));
        }
    }

    // Skills
    page.blank();
    page.blank();
    page.anchors.skills = page.len();
    page.push(Line::styled("Skills", heading));
    page.blank();
    let mut row_spans: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0u16;
    for skill in &content.skills {
        let chip_width = skill.chars().count() as u16 + 3;
        if row_width + chip_width > width && !row_spans.is_empty() {
            page.push(Line::from(std::mem::take(&mut row_spans)));
            row_width = 0;
        }
        row_spans.push(Span::styled(
            format!(" {} ", skill),
            Style::default()
                .fg(styles.color(PaletteToken::TagText))
                .bg(styles.color(PaletteToken::TagBg)),
        ));
        row_spans.push(Span::raw(" "));
        row_width += chip_width;
    }
    if !row_spans.is_empty() {
        page.push(Line::from(row_spans));
    }

    // Contact
    page.blank();
    page.blank();
    page.anchors.contact = page.len();
    page.push(Line::styled("Get In Touch", heading));
    for row in wrap_text(
        "Want to work together, or just say hello? I'd love to hear from you.",
        width,
    ) {
        page.push(Line::styled(row, secondary));
    }
    page.blank();
    page.push_link(
        Line::styled(
            "Connect With Me",
            styles
                .fg(PaletteToken::AccentPrimary)
                .add_modifier(Modifier::BOLD),
        ),
        NavTarget::Connect,
    );

    // Footer
    page.blank();
    page.push(Line::styled(
        "─".repeat(width as usize),
        styles.fg(PaletteToken::BorderDark),
    ));
    page.push(
        Line::styled(
            content.footer.text.clone(),
            styles.fg(PaletteToken::FooterText),
        )
        .centered(),
    );
    page.blank();

    page
}

pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if area.width < 6 || area.height == 0 {
        return;
    }
    let content_area = Rect::new(
        area.x + 2,
        area.y,
        area.width.saturating_sub(4),
        area.height,
    );

    let page = build(&app.content, &app.styles, content_area.width);
    app.home.anchors = page.anchors;
    app.home.content_height = page.rows.len() as u16;

    // Clamp the offset so the page cannot scroll past its end
    let max_scroll = app
        .home
        .content_height
        .saturating_sub(content_area.height);
    if app.home.scroll > max_scroll {
        app.home.scroll = max_scroll;
    }
    let scroll = app.home.scroll as usize;

    let visible: Vec<Line> = page
        .rows
        .iter()
        .skip(scroll)
        .take(content_area.height as usize)
        .cloned()
        .collect();
    f.render_widget(Paragraph::new(visible), content_area);

    // Hit zones for the visible link rows
    for (index, target) in page.targets.iter().enumerate() {
        let Some(target) = target else { continue };
        if index < scroll || index >= scroll + content_area.height as usize {
            continue;
        }
        let y = content_area.y + (index - scroll) as u16;
        let width = page.rows[index].width() as u16;
        app.hit
            .nav
            .push((Rect::new(content_area.x, y, width.max(1), 1), *target));
    }
}

/// The "Connect With Me" overlay panel.
pub fn render_contact(f: &mut Frame, app: &mut App, _page_area: Rect) {
    let area = f.area();
    let socials = &app.content.socials;

    let panel_width = 46.min(area.width.saturating_sub(4));
    let panel_height = (socials.len() as u16 + 7).min(area.height.saturating_sub(2));
    let panel = Rect::new(
        area.x + (area.width.saturating_sub(panel_width)) / 2,
        area.y + (area.height.saturating_sub(panel_height)) / 2,
        panel_width,
        panel_height,
    );

    f.render_widget(Clear, panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.styles.fg(PaletteToken::GlassBorder))
        .style(Style::default().bg(app.styles.color(PaletteToken::GlassBg)));
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    let mut lines = vec![
        Line::styled(
            "Connect With Me",
            app.styles
                .fg(PaletteToken::Text)
                .add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::styled(
            "Find me on these platforms:",
            app.styles.fg(PaletteToken::TextSecondary),
        )
        .centered(),
        Line::raw(""),
    ];
    for social in socials {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<10}", social.name),
                app.styles.fg(PaletteToken::AccentLink),
            ),
            Span::styled(
                social.url.clone(),
                app.styles.fg(PaletteToken::TextSecondary),
            ),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(
        Line::styled("esc to close", app.styles.fg(PaletteToken::FooterText)).centered(),
    );

    f.render_widget(Paragraph::new(lines), inner);
    app.hit.contact_panel = Some(panel);
}
