//! # Theme System
//!
//! Colour roles for the picker. Rendering code never hardcodes a
//! `ratatui::style::Color`; it asks the active [`Theme`].
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default) - warm, dark pastel theme
//! - **Catppuccin Latte** - light pastel theme for light terminals
//! - **Classic** - muted grey/pink/sky palette
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette

use ratatui::style::Color;

/// All colours used by the picker, grouped by role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Name accepted by `--theme` and the config file.
    pub name: &'static str,

    /// Regular text: category names, package names.
    pub fg: Color,
    /// Unfocused pane borders, footer, descriptions, count badges.
    pub fg_subtle: Color,
    /// Already-installed packages.
    pub fg_installed: Color,

    /// Cursor row in the focused pane.
    pub highlight: Color,
    /// Focused pane border, header counter, active badge.
    pub accent: Color,
    /// Selected packages and their check marks.
    pub selected: Color,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

static BUILT_IN_THEMES: [Theme; 5] = [
    Theme {
        name: "Catppuccin Mocha",
        fg: Color::Rgb(205, 214, 244),           // text
        fg_subtle: Color::Rgb(108, 112, 134),    // overlay0
        fg_installed: Color::Rgb(69, 71, 90),    // surface1
        highlight: Color::Rgb(245, 194, 231),    // pink
        accent: Color::Rgb(137, 180, 250),       // blue
        selected: Color::Rgb(166, 227, 161),     // green
    },
    Theme {
        name: "Catppuccin Latte",
        fg: Color::Rgb(76, 79, 105),             // text
        fg_subtle: Color::Rgb(156, 160, 176),    // overlay0
        fg_installed: Color::Rgb(188, 192, 204), // surface1
        highlight: Color::Rgb(234, 118, 203),    // pink
        accent: Color::Rgb(30, 102, 245),        // blue
        selected: Color::Rgb(64, 160, 43),       // green
    },
    Theme {
        name: "Classic",
        fg: Color::Rgb(204, 204, 204),
        fg_subtle: Color::Rgb(85, 85, 85),
        fg_installed: Color::Rgb(68, 68, 68),
        highlight: Color::Rgb(255, 135, 175),
        accent: Color::Rgb(135, 215, 255),
        selected: Color::Rgb(95, 215, 167),
    },
    Theme {
        name: "Dracula",
        fg: Color::Rgb(248, 248, 242),
        fg_subtle: Color::Rgb(98, 114, 164),
        fg_installed: Color::Rgb(68, 71, 90),
        highlight: Color::Rgb(255, 121, 198), // pink
        accent: Color::Rgb(139, 233, 253),    // cyan
        selected: Color::Rgb(80, 250, 123),
    },
    Theme {
        name: "Nord",
        fg: Color::Rgb(216, 222, 233),
        fg_subtle: Color::Rgb(76, 86, 106),
        fg_installed: Color::Rgb(67, 76, 94),
        highlight: Color::Rgb(180, 142, 173), // aurora purple
        accent: Color::Rgb(136, 192, 208),    // frost
        selected: Color::Rgb(163, 190, 140),
    },
];
