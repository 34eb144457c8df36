//! Managed style sheet
//!
//! The one globally-owned style target. `apply` is the single code path that
//! mutates presentation state: it creates the managed block on first use,
//! reuses it forever after, and is idempotent for repeated palettes. The
//! rendering layer only ever reads tokens back through [`StyleSheet::color`].

use ratatui::style::{Color, Style};

use crate::theme::{Palette, PaletteToken};

/// The managed declaration block. Created once, then rewritten in place.
#[derive(Debug, Clone)]
struct StyleBlock {
    palette: Palette,
}

/// Process-wide style variables, owned by the application shell.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    block: Option<StyleBlock>,
    revision: u64,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self {
            block: None,
            revision: 0,
        }
    }

    /// Write every token of `palette` into the managed block.
    ///
    /// Applying the same palette twice leaves observable state unchanged:
    /// still exactly one block, same revision.
    pub fn apply(&mut self, palette: &Palette) {
        match &mut self.block {
            Some(block) if block.palette == *palette => {}
            Some(block) => {
                block.palette = palette.clone();
                self.revision += 1;
                tracing::debug!(palette = %block.palette.name, "style sheet rewritten");
            }
            None => {
                self.block = Some(StyleBlock {
                    palette: palette.clone(),
                });
                self.revision += 1;
                tracing::debug!(palette = %palette.name, "style sheet created");
            }
        }
    }

    /// Resolve a token through the managed block.
    ///
    /// All tokens are guaranteed set after every `apply`. Before the first
    /// apply the dark palette stands in, so reads never fail.
    pub fn color(&self, token: PaletteToken) -> Color {
        match &self.block {
            Some(block) => block.palette.get(token),
            None => Palette::dark().get(token),
        }
    }

    /// Foreground style for a token.
    pub fn fg(&self, token: PaletteToken) -> Style {
        Style::default().fg(self.color(token))
    }

    /// Name of the palette currently held by the managed block.
    pub fn palette_name(&self) -> Option<&str> {
        self.block.as_ref().map(|b| b.palette.name.as_str())
    }

    /// Number of managed blocks in existence (0 before first apply, 1 after).
    pub fn block_count(&self) -> usize {
        usize::from(self.block.is_some())
    }

    /// Bumped only when an apply actually changes the sheet.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}
