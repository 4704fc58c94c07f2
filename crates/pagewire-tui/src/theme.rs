use ratatui::style::Color;

/// Colors the page widgets draw with
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    /// Panels and the status bar
    pub panel: Color,
    /// Modal surfaces, loader panel
    pub raised: Color,
    pub text: Color,
    pub text_soft: Color,
    pub border: Color,
    pub muted: Color,

    /// Active tab, open FAQ item, focused border
    pub active: Color,
    pub selection: Color,
    /// Tab progress bar fill
    pub progress: Color,
    pub marquee: Color,
    /// Video playing marker
    pub playing: Color,
    /// Modal close button
    pub close: Color,
    /// Nav bar text over light sections
    pub nav_light: Color,
    /// Nav bar text over dark sections
    pub nav_dark: Color,
    pub error: Color,
    pub accent: Color,
}

/// `0xRRGGBB` as a terminal color
pub(crate) const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox::dark()
    }
}
