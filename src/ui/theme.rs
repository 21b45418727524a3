//! # Theme System
//!
//! Colours used by the jobscout TUI, grouped by what they paint.
//!
//! Rendering code never hardcodes a `ratatui::style::Color`; it reads the
//! active [`Theme`]. `t` cycles through the built-in themes at runtime and
//! the choice is persisted in the config file.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default)
//! - **Catppuccin Macchiato**
//! - **Dracula**
//! - **Nord**
//! - **Tokyo Night**
//! - **Gruvbox Dark**

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name, also the value stored in the config file.
    pub name: &'static str,

    /// Screen and modal background.
    pub bg: Color,
    /// Card background and the selected-card highlight base.
    pub surface: Color,

    /// Titles and body text.
    pub fg: Color,
    /// Company names, descriptions, hints, footer.
    pub fg_dim: Color,

    /// Focused borders, results count, AI summary action.
    pub accent: Color,
    /// Salary chips and the search spinner.
    pub secondary: Color,
    /// Remote chips and notice toasts.
    pub success: Color,
    /// Error toasts and failed summaries.
    pub error: Color,
    /// Background particles.
    pub particle: Color,
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

    /// The theme after this one in display order, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let index = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .unwrap_or(0);
        &BUILT_IN_THEMES[(index + 1) % BUILT_IN_THEMES.len()]
    }
}

static BUILT_IN_THEMES: [Theme; 6] = [
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),            // base
        surface: Color::Rgb(49, 50, 68),       // surface0
        fg: Color::Rgb(205, 214, 244),         // text
        fg_dim: Color::Rgb(108, 112, 134),     // overlay0
        accent: Color::Rgb(203, 166, 247),     // mauve
        secondary: Color::Rgb(249, 226, 175),  // yellow
        success: Color::Rgb(166, 227, 161),    // green
        error: Color::Rgb(243, 139, 168),      // red
        particle: Color::Rgb(88, 91, 112),     // surface2
    },
    Theme {
        name: "Catppuccin Macchiato",
        bg: Color::Rgb(36, 39, 58),            // base
        surface: Color::Rgb(54, 58, 79),       // surface0
        fg: Color::Rgb(202, 211, 245),         // text
        fg_dim: Color::Rgb(110, 115, 141),     // overlay0
        accent: Color::Rgb(198, 160, 246),     // mauve
        secondary: Color::Rgb(238, 212, 159),  // yellow
        success: Color::Rgb(166, 218, 149),    // green
        error: Color::Rgb(237, 135, 150),      // red
        particle: Color::Rgb(91, 96, 120),     // surface2
    },
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        surface: Color::Rgb(68, 71, 90),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(189, 147, 249),    // purple
        secondary: Color::Rgb(241, 250, 140), // yellow
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        particle: Color::Rgb(98, 114, 164),
    },
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        surface: Color::Rgb(59, 66, 82),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(235, 203, 139), // yellow
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        particle: Color::Rgb(67, 76, 94),
    },
    Theme {
        name: "Tokyo Night",
        bg: Color::Rgb(26, 27, 38),
        surface: Color::Rgb(41, 46, 66),
        fg: Color::Rgb(169, 177, 214),
        fg_dim: Color::Rgb(86, 95, 137),
        accent: Color::Rgb(187, 154, 247),    // magenta
        secondary: Color::Rgb(224, 175, 104), // yellow
        success: Color::Rgb(115, 218, 202),
        error: Color::Rgb(247, 118, 142),
        particle: Color::Rgb(59, 66, 97),
    },
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        surface: Color::Rgb(60, 56, 54),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(211, 134, 155),   // purple
        secondary: Color::Rgb(250, 189, 47), // yellow
        success: Color::Rgb(184, 187, 38),
        error: Color::Rgb(251, 73, 52),
        particle: Color::Rgb(80, 73, 69),
    },
];
