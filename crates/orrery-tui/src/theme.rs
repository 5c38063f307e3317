use ratatui::style::Color;

/// Deep-space palette, lifted from the original page styling.
pub struct DeepSpace;

impl DeepSpace {
    /// Panel background
    pub const BG0: Color = Color::Rgb(0x1a, 0x1a, 0x2e);
    /// Slightly raised background (status bar)
    pub const BG1: Color = Color::Rgb(0x24, 0x24, 0x3c);
    /// Primary foreground
    pub const FG0: Color = Color::Rgb(0xe8, 0xea, 0xf0);
    /// Dimmed foreground (visited sections, help text)
    pub const FG1: Color = Color::Rgb(0x9a, 0x9c, 0xaa);
    /// Faint foreground (upcoming sections)
    pub const FG2: Color = Color::Rgb(0x5c, 0x5e, 0x70);
    /// Accent cyan
    pub const ACCENT: Color = Color::Rgb(0x00, 0xd4, 0xff);
    /// Softer accent used for glows and visited dots
    pub const GLOW: Color = Color::Rgb(0x4d, 0xd0, 0xe1);
    /// Warm highlight for the feedback pulse
    pub const PULSE: Color = Color::Rgb(0xff, 0xb8, 0x6c);
}
