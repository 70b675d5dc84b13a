//! ANSI 256-color fallback theme for terminals without truecolor support.
//!
//! Approximates the Dracula roles with indexed colors so the widgets stay
//! legible inside macOS Terminal and other 8-bit color terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

fn build_ansi_roles() -> ThemeRoles {
    ThemeRoles {
        default_bg: Color::Indexed(236),
        default_border: Color::Indexed(239),
        hovered_border: Color::Indexed(61),
        focused_bg: Color::Indexed(237),
        focused_border: Color::Indexed(117),

        hint_text: Color::Indexed(247),
        text_selection: Color::Indexed(239),
        default_text: Color::Indexed(255),
        icon: Color::Indexed(212),

        table_header_bg: Color::Indexed(239),
        row_hover_bg: Color::Indexed(237),
        row_bg: Color::Indexed(235),
        divider: Color::Indexed(239),
    }
}

/// ANSI 256-color approximation of the Dracula palette.
#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self { roles: build_ansi_roles() }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// High-contrast variant for ANSI terminals.
#[derive(Debug, Clone)]
pub struct Ansi256ThemeHighContrast {
    roles: ThemeRoles,
}

impl Default for Ansi256ThemeHighContrast {
    fn default() -> Self {
        Self::new()
    }
}

impl Ansi256ThemeHighContrast {
    pub fn new() -> Self {
        let mut roles = build_ansi_roles();
        roles.default_border = Color::Indexed(141);
        roles.hovered_border = Color::Indexed(183);
        roles.hint_text = Color::Indexed(250);
        Self { roles }
    }
}

impl Theme for Ansi256ThemeHighContrast {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
