//! Time-of-day theme system
//!
//! Derives a Light/Dark mode from the local clock and maps each mode to a
//! complete palette of named style tokens. The hour-to-mode rule is a pure
//! function so it can be tested without any timer, and the palette mapping is
//! total: every token has a value in every mode.

use chrono::{Local, Timelike};
use ratatui::style::Color;

/// Daylight window start, inclusive.
pub const DAY_START_HOUR: u32 = 7;
/// Daylight window end, exclusive.
pub const DAY_END_HOUR: u32 = 19;

/// Binary presentation mode derived from the time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Map an hour of day to a theme mode.
///
/// Light iff hour is in [7, 19). Boundaries are exact: 7 is Light, 19 is Dark.
pub fn mode_for_hour(hour: u32) -> ThemeMode {
    if (DAY_START_HOUR..DAY_END_HOUR).contains(&hour) {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    }
}

/// Re-evaluates the theme mode from the wall clock.
///
/// The resolver is refreshed once at startup and then on a fixed schedule by
/// the application loop. It never fails: if the clock produces an unusable
/// hour the last-known mode is retained.
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    mode: ThemeMode,
}

impl ThemeResolver {
    /// Create a resolver and eagerly resolve the initial mode.
    pub fn new() -> Self {
        let mut resolver = Self {
            // Starting point until the first clock read, matching the
            // pre-resolve default of the rendering layer.
            mode: ThemeMode::Dark,
        };
        resolver.refresh();
        resolver
    }

    /// Current mode (last resolved).
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Re-read the clock and update the mode. Returns the (possibly
    /// unchanged) mode.
    pub fn refresh(&mut self) -> ThemeMode {
        self.refresh_with_hour(local_hour())
    }

    /// Update from an already-read hour. `None` means the clock was
    /// unreadable; the last-known mode is kept.
    pub(crate) fn refresh_with_hour(&mut self, hour: Option<u32>) -> ThemeMode {
        if let Some(hour) = hour {
            self.mode = mode_for_hour(hour);
        }
        self.mode
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the local hour of day, guarding against nonsense values.
fn local_hour() -> Option<u32> {
    let hour = Local::now().hour();
    if hour < 24 {
        Some(hour)
    } else {
        None
    }
}

/// Semantic style slot referenced by the rendering layer.
///
/// The set is fixed; `Palette` guarantees a color for every slot in every
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteToken {
    Background,
    Text,
    TextSecondary,
    GlassBg,
    GlassBorder,
    HeaderBg,
    TagBg,
    TagText,
    BorderDark,
    BorderLight,
    AccentPrimary,
    AccentHover,
    AccentLink,
    FooterText,
}

impl PaletteToken {
    /// Every declared token, for iteration in checks and tests.
    pub const ALL: [PaletteToken; 14] = [
        PaletteToken::Background,
        PaletteToken::Text,
        PaletteToken::TextSecondary,
        PaletteToken::GlassBg,
        PaletteToken::GlassBorder,
        PaletteToken::HeaderBg,
        PaletteToken::TagBg,
        PaletteToken::TagText,
        PaletteToken::BorderDark,
        PaletteToken::BorderLight,
        PaletteToken::AccentPrimary,
        PaletteToken::AccentHover,
        PaletteToken::AccentLink,
        PaletteToken::FooterText,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PaletteToken::Background => "background",
            PaletteToken::Text => "text",
            PaletteToken::TextSecondary => "text_secondary",
            PaletteToken::GlassBg => "glass_bg",
            PaletteToken::GlassBorder => "glass_border",
            PaletteToken::HeaderBg => "header_bg",
            PaletteToken::TagBg => "tag_bg",
            PaletteToken::TagText => "tag_text",
            PaletteToken::BorderDark => "border_dark",
            PaletteToken::BorderLight => "border_light",
            PaletteToken::AccentPrimary => "accent_primary",
            PaletteToken::AccentHover => "accent_hover",
            PaletteToken::AccentLink => "accent_link",
            PaletteToken::FooterText => "footer_text",
        }
    }
}

/// Complete token-to-color mapping for one theme mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: String,

    // Page
    pub background: Color,
    pub text: Color,
    pub text_secondary: Color,

    // Glass surfaces (pre-blended; terminal cells have no alpha)
    pub glass_bg: Color,
    pub glass_border: Color,
    pub header_bg: Color,

    // Tag chips
    pub tag_bg: Color,
    pub tag_text: Color,

    // Borders
    pub border_dark: Color,
    pub border_light: Color,

    // Accents
    pub accent_primary: Color,
    pub accent_hover: Color,
    pub accent_link: Color,

    pub footer_text: Color,
}

impl Palette {
    /// Select the palette for a mode. Total over both modes.
    pub fn resolve(mode: ThemeMode) -> Palette {
        match mode {
            ThemeMode::Dark => Palette::dark(),
            ThemeMode::Light => Palette::light(),
        }
    }

    /// Look up a color by token. The match is total, so every token always
    /// resolves.
    pub fn get(&self, token: PaletteToken) -> Color {
        match token {
            PaletteToken::Background => self.background,
            PaletteToken::Text => self.text,
            PaletteToken::TextSecondary => self.text_secondary,
            PaletteToken::GlassBg => self.glass_bg,
            PaletteToken::GlassBorder => self.glass_border,
            PaletteToken::HeaderBg => self.header_bg,
            PaletteToken::TagBg => self.tag_bg,
            PaletteToken::TagText => self.tag_text,
            PaletteToken::BorderDark => self.border_dark,
            PaletteToken::BorderLight => self.border_light,
            PaletteToken::AccentPrimary => self.accent_primary,
            PaletteToken::AccentHover => self.accent_hover,
            PaletteToken::AccentLink => self.accent_link,
            PaletteToken::FooterText => self.footer_text,
        }
    }

    /// Night palette: deep slate with violet accents.
    pub fn dark() -> Palette {
        let background = Color::Rgb(15, 23, 42);
        Palette {
            name: "dark".to_string(),

            background,
            text: Color::Rgb(226, 232, 240),
            text_secondary: Color::Rgb(148, 163, 184),

            // 60% surface over the page, 8% white border
            glass_bg: blend(background, Color::Rgb(0, 0, 0), 0.4),
            glass_border: blend(background, Color::Rgb(255, 255, 255), 0.08),
            header_bg: blend(background, Color::Rgb(0, 0, 0), 0.1),

            tag_bg: Color::Rgb(51, 65, 85),
            tag_text: Color::Rgb(226, 232, 240),

            border_dark: Color::Rgb(30, 41, 59),
            border_light: Color::Rgb(71, 85, 105),

            accent_primary: Color::Rgb(139, 92, 246),
            accent_hover: Color::Rgb(124, 58, 237),
            accent_link: Color::Rgb(167, 139, 250),

            footer_text: Color::Rgb(100, 116, 139),
        }
    }

    /// Daylight palette: near-white slate, same violet accents.
    pub fn light() -> Palette {
        let background = Color::Rgb(248, 250, 252);
        Palette {
            name: "light".to_string(),

            background,
            text: Color::Rgb(30, 41, 59),
            text_secondary: Color::Rgb(100, 116, 139),

            glass_bg: blend(background, Color::Rgb(255, 255, 255), 0.7),
            glass_border: blend(background, Color::Rgb(0, 0, 0), 0.05),
            header_bg: Color::Rgb(255, 255, 255),

            tag_bg: Color::Rgb(226, 232, 240),
            tag_text: Color::Rgb(30, 41, 59),

            border_dark: Color::Rgb(226, 232, 240),
            border_light: Color::Rgb(203, 213, 225),

            accent_primary: Color::Rgb(139, 92, 246),
            accent_hover: Color::Rgb(124, 58, 237),
            accent_link: Color::Rgb(124, 58, 237),

            footer_text: Color::Rgb(148, 163, 184),
        }
    }
}

/// Mix `other` into `base` by `ratio` (0.0 = all base, 1.0 = all other).
///
/// Only RGB colors participate; anything else passes through unchanged.
fn blend(base: Color, other: Color, ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let (Color::Rgb(br, bg, bb), Color::Rgb(or, og, ob)) = (base, other) else {
        return base;
    };
    let mix = |a: u8, b: u8| -> u8 {
        let value = (a as f32) * (1.0 - ratio) + (b as f32) * ratio;
        value.round().clamp(0.0, 255.0) as u8
    };
    Color::Rgb(mix(br, or), mix(bg, og), mix(bb, ob))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_boundaries() {
        assert_eq!(mode_for_hour(7), ThemeMode::Light);
        assert_eq!(mode_for_hour(19), ThemeMode::Dark);
        assert_eq!(mode_for_hour(6), ThemeMode::Dark);
        assert_eq!(mode_for_hour(23), ThemeMode::Dark);
    }

    #[test]
    fn test_mode_scenario_hours() {
        assert_eq!(mode_for_hour(12), ThemeMode::Light);
        assert_eq!(mode_for_hour(2), ThemeMode::Dark);
        assert_eq!(mode_for_hour(18), ThemeMode::Light);
        assert_eq!(mode_for_hour(0), ThemeMode::Dark);
    }

    #[test]
    fn test_resolver_retains_last_known_mode() {
        let mut resolver = ThemeResolver { mode: ThemeMode::Dark };
        assert_eq!(resolver.refresh_with_hour(Some(12)), ThemeMode::Light);
        // Unreadable clock keeps the previous answer instead of failing
        assert_eq!(resolver.refresh_with_hour(None), ThemeMode::Light);
        assert_eq!(resolver.refresh_with_hour(Some(21)), ThemeMode::Dark);
        assert_eq!(resolver.refresh_with_hour(None), ThemeMode::Dark);
    }

    #[test]
    fn test_palette_is_total() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let palette = Palette::resolve(mode);
            for token in PaletteToken::ALL {
                assert!(
                    matches!(palette.get(token), Color::Rgb(..)),
                    "token {} has no concrete color in {} mode",
                    token.name(),
                    mode.name()
                );
            }
        }
    }

    #[test]
    fn test_accents_shared_across_modes() {
        let dark = Palette::dark();
        let light = Palette::light();
        assert_eq!(dark.accent_primary, light.accent_primary);
        assert_eq!(dark.accent_hover, light.accent_hover);
        // The link accent intentionally differs per mode
        assert_ne!(dark.accent_link, light.accent_link);
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(255, 255, 255);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(128, 128, 128));
    }
}
