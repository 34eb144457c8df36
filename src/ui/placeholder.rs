//! Placeholder artwork
//!
//! Gallery images are opaque resource locators; in a terminal they render as
//! color-blocked placeholder panels. Refs in the placehold.co URL shape carry
//! their own colors and label, which we honor; anything unresolvable gets the
//! fixed "Image Not Found" panel instead. This substitution is purely
//! presentational and never changes interaction state.

use ratatui::style::Color;

/// Resolved placeholder panel: a background wash, a label color and the
/// label itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderArt {
    pub bg: Color,
    pub fg: Color,
    pub label: String,
}

impl PlaceholderArt {
    /// Try to derive panel colors and label from a placehold.co-style ref:
    /// `https://placehold.co/<size>/<bg>/<fg>?text=<label>`.
    pub fn from_ref(image: &str) -> Option<Self> {
        let rest = image.split("placehold.co/").nth(1)?;
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        let mut segments = path.split('/');
        let _size = segments.next()?;
        let bg = parse_hex_color(segments.next()?)?;
        let fg = parse_hex_color(segments.next()?)?;

        let label = query
            .and_then(|q| {
                q.split('&')
                    .find_map(|pair| pair.strip_prefix("text="))
                    .map(|text| text.replace('+', " "))
            })
            .unwrap_or_default();

        Some(Self { bg, fg, label })
    }

    /// The fixed fallback panel for refs that do not resolve.
    pub fn fallback() -> Self {
        Self {
            bg: Color::Rgb(30, 41, 59),
            fg: Color::Rgb(226, 232, 240),
            label: "Image Not Found".to_string(),
        }
    }

    /// Resolve a ref, substituting the fallback on failure.
    pub fn resolve(image: &str) -> Self {
        Self::from_ref(image).unwrap_or_else(Self::fallback)
    }
}

/// Parse a six-digit hex color, with or without a leading '#'.
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_placehold_ref() {
        let art = PlaceholderArt::resolve(
            "https://placehold.co/600x600/1e293b/8b5cf6?text=Logo+Design",
        );
        assert_eq!(art.bg, Color::Rgb(30, 41, 59));
        assert_eq!(art.fg, Color::Rgb(139, 92, 246));
        assert_eq!(art.label, "Logo Design");
    }

    #[test]
    fn test_missing_label_is_empty() {
        let art = PlaceholderArt::from_ref("https://placehold.co/600x600/1e293b/8b5cf6").unwrap();
        assert_eq!(art.label, "");
    }

    #[test]
    fn test_unresolvable_ref_falls_back() {
        let art = PlaceholderArt::resolve("file:///tmp/missing.png");
        assert_eq!(art, PlaceholderArt::fallback());
        assert_eq!(art.label, "Image Not Found");

        let bad_color = PlaceholderArt::resolve("https://placehold.co/600x600/zzzzzz/8b5cf6");
        assert_eq!(bad_color, PlaceholderArt::fallback());
    }

    #[test]
    fn test_parse_hex_color_variants() {
        assert_eq!(parse_hex_color("8b5cf6"), Some(Color::Rgb(139, 92, 246)));
        assert_eq!(parse_hex_color("#8b5cf6"), Some(Color::Rgb(139, 92, 246)));
        assert_eq!(parse_hex_color("fff"), None);
    }
}
