// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "terminal" uses the terminal's ANSI palette, named themes use true
// color (RGB). Every color a widget needs is a semantic field here so
// render code never invents its own.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

pub const DEFAULT_THEME: &str = "midnight";

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Terminal colors
    pub background: Color,
    pub foreground: Color,

    // Brand line
    pub brand: Color,
    pub cursor: Color,

    // Page text
    pub heading: Color,
    pub muted: Color,
    pub link: Color,

    // Chrome
    pub border: Color,
    pub highlight: Color,
    pub border_type: BorderType,

    // Snippet focus colors
    pub selection: Color,
    pub selection_fg: Color,

    // Code snippets
    pub code_fg: Color,
    pub code_bg: Color,
}

impl Theme {
    /// Load theme by name, falling back to the default palette for
    /// anything unrecognized.
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "midnight" => Self::midnight(),
            "daylight" => Self::daylight(),
            "terminal" => Self::terminal(),
            _ => Self::midnight(),
        }
    }

    pub fn all_names() -> [&'static str; 3] {
        ["midnight", "daylight", "terminal"]
    }

    /// Dark default, tuned for the typical dark terminal.
    pub fn midnight() -> Self {
        Self {
            name: "midnight".to_string(),
            background: Color::Rgb(0x0d, 0x11, 0x17), // near-black blue
            foreground: Color::Rgb(0xc9, 0xd1, 0xd9), // soft white
            brand: Color::Rgb(0x58, 0xa6, 0xff),      // accent blue
            cursor: Color::Rgb(0x58, 0xa6, 0xff),     // accent blue
            heading: Color::Rgb(0xf0, 0xf6, 0xfc),    // bright white
            muted: Color::Rgb(0x8b, 0x94, 0x9e),      // gray
            link: Color::Rgb(0x58, 0xa6, 0xff),       // accent blue
            border: Color::Rgb(0x30, 0x36, 0x3d),     // dark gray
            highlight: Color::Rgb(0x58, 0xa6, 0xff),  // accent blue
            border_type: BorderType::Rounded,
            selection: Color::Rgb(0x1f, 0x6f, 0xeb), // selection blue
            selection_fg: Color::Rgb(0xf0, 0xf6, 0xfc), // bright white
            code_fg: Color::Rgb(0xe6, 0xed, 0xf3),   // code white
            code_bg: Color::Rgb(0x16, 0x1b, 0x22),   // raised panel
        }
    }

    /// Light palette for light terminal backgrounds.
    pub fn daylight() -> Self {
        Self {
            name: "daylight".to_string(),
            background: Color::Rgb(0xff, 0xff, 0xff), // white
            foreground: Color::Rgb(0x1f, 0x23, 0x28), // near-black
            brand: Color::Rgb(0x09, 0x69, 0xda),      // accent blue
            cursor: Color::Rgb(0x09, 0x69, 0xda),     // accent blue
            heading: Color::Rgb(0x11, 0x18, 0x1c),    // black
            muted: Color::Rgb(0x65, 0x6d, 0x76),      // gray
            link: Color::Rgb(0x09, 0x69, 0xda),       // accent blue
            border: Color::Rgb(0xd0, 0xd7, 0xde),     // light gray
            highlight: Color::Rgb(0x09, 0x69, 0xda),  // accent blue
            border_type: BorderType::Rounded,
            selection: Color::Rgb(0x09, 0x69, 0xda), // accent blue
            selection_fg: Color::Rgb(0xff, 0xff, 0xff), // white
            code_fg: Color::Rgb(0x1f, 0x23, 0x28),   // near-black
            code_bg: Color::Rgb(0xf6, 0xf8, 0xfa),   // paper gray
        }
    }

    /// Terminal theme - uses the terminal's own ANSI palette, for
    /// terminals without truecolor support.
    pub fn terminal() -> Self {
        Self {
            name: "terminal".to_string(),
            background: Color::Reset,
            foreground: Color::Reset,
            brand: Color::Cyan,
            cursor: Color::Cyan,
            heading: Color::White,
            muted: Color::DarkGray,
            link: Color::Blue,
            border: Color::DarkGray,
            highlight: Color::Cyan,
            border_type: BorderType::Plain,
            selection: Color::Blue,
            selection_fg: Color::White,
            code_fg: Color::Gray,
            code_bg: Color::Black,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}
