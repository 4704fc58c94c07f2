//! Built-in palettes and section color lookup

mod dracula;
pub(crate) mod gruvbox;
mod nord;

use ratatui::style::Color;

use crate::theme::{rgb, Theme};

const THEMES: &[(&str, fn() -> Theme)] = &[
    ("gruvbox-dark", gruvbox::dark),
    ("gruvbox-light", gruvbox::light),
    ("dracula", dracula::theme),
    ("nord", nord::theme),
];

/// `#rrggbb` or `#rgb`, leading `#` optional
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let digits = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let packed = u32::from_str_radix(digits, 16).ok()?;
    match digits.len() {
        6 => Some(rgb(packed)),
        3 => {
            // Each nibble doubles: f50 -> ff5500
            let widen = |shift: u32| ((packed >> shift) & 0xf) * 0x11;
            Some(rgb((widen(8) << 16) | (widen(4) << 8) | widen(0)))
        }
        _ => None,
    }
}

/// Terminal color for a section's background value
///
/// `transparent` and names we do not know leave the theme background.
pub fn section_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if value.starts_with('#') {
        return parse_hex_color(value);
    }
    if value.eq_ignore_ascii_case("white") {
        Some(rgb(0xffffff))
    } else if value.eq_ignore_ascii_case("black") {
        Some(rgb(0x000000))
    } else {
        None
    }
}

/// Theme by name; unknown names get gruvbox-dark
pub fn load_theme(name: &str) -> Theme {
    THEMES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name.trim()))
        .map(|(_, build)| build())
        .unwrap_or_else(gruvbox::dark)
}

pub fn available_themes() -> impl Iterator<Item = &'static str> {
    THEMES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(parse_hex_color("#ff5500"), Some(Color::Rgb(255, 85, 0)));
        assert_eq!(parse_hex_color("f50"), Some(Color::Rgb(255, 85, 0)));
        assert_eq!(parse_hex_color(" #0A0b0C "), Some(Color::Rgb(10, 11, 12)));
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert_eq!(parse_hex_color("invalid"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#+12"), None);
    }

    #[test]
    fn test_section_color() {
        assert_eq!(section_color("transparent"), None);
        assert_eq!(section_color("White"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(section_color("#000"), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(section_color("rebeccapurple"), None);
    }

    #[test]
    fn test_load_theme() {
        assert_eq!(load_theme("no-such-theme").background, Color::Rgb(0x28, 0x28, 0x28));
        assert_eq!(load_theme("Nord").background, Color::Rgb(0x2e, 0x34, 0x40));
        assert_eq!(available_themes().count(), 4);
    }
}
