use ratatui::style::Color;

use super::{
    roles::{Theme, ThemeRoles},
    theme_helpers::lighten_rgb,
};

// Dracula palette (https://draculatheme.com/contribute)
pub const BG: Color = Color::Rgb(0x28, 0x2A, 0x36); // #282a36
pub const CURRENT_LINE: Color = Color::Rgb(0x44, 0x47, 0x5A); // #44475a
pub const FOREGROUND: Color = Color::Rgb(0xF8, 0xF8, 0xF2); // #f8f8f2
pub const COMMENT: Color = Color::Rgb(0x62, 0x72, 0xA4); // #6272a4

pub const CYAN: Color = Color::Rgb(0x8B, 0xE9, 0xFD); // #8be9fd
pub const PINK: Color = Color::Rgb(0xFF, 0x79, 0xC6); // #ff79c6
pub const PURPLE: Color = Color::Rgb(0xBD, 0x93, 0xF9); // #bd93f9

fn build_dracula_roles() -> ThemeRoles {
    ThemeRoles {
        default_bg: BG,
        default_border: CURRENT_LINE,
        hovered_border: COMMENT,
        focused_bg: lighten_rgb(BG, 0.06),
        focused_border: CYAN, // Cyan marks the active input

        hint_text: COMMENT,
        text_selection: CURRENT_LINE,
        default_text: FOREGROUND,
        icon: PINK,

        table_header_bg: CURRENT_LINE,
        row_hover_bg: lighten_rgb(BG, 0.10),
        row_bg: BG,
        divider: CURRENT_LINE,
    }
}

/// Default Dracula theme tuned for dark terminals.
#[derive(Debug, Clone)]
pub struct DraculaTheme {
    roles: ThemeRoles,
}

impl Default for DraculaTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DraculaTheme {
    pub fn new() -> Self {
        Self {
            roles: build_dracula_roles(),
        }
    }
}

impl Theme for DraculaTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// High-contrast Dracula: stronger borders and brighter hints.
#[derive(Debug, Clone)]
pub struct DraculaThemeHighContrast {
    roles: ThemeRoles,
}

impl Default for DraculaThemeHighContrast {
    fn default() -> Self {
        Self::new()
    }
}

impl DraculaThemeHighContrast {
    pub fn new() -> Self {
        let mut roles = build_dracula_roles();
        roles.default_border = PURPLE;
        roles.hovered_border = lighten_rgb(PURPLE, 0.25);
        roles.hint_text = lighten_rgb(COMMENT, 0.25);
        roles.divider = COMMENT;
        Self { roles }
    }
}

impl Theme for DraculaThemeHighContrast {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
