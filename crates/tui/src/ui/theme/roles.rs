use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

use crate::ui::host::flex::Inset;

/// Semantic color roles read by the input field and grid table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeRoles {
    /// Input background when not focused.
    pub default_bg: Color,
    pub default_border: Color,
    pub hovered_border: Color,
    pub focused_bg: Color,
    pub focused_border: Color,

    /// Hint text, also used for read-only content.
    pub hint_text: Color,
    pub text_selection: Color,
    pub default_text: Color,
    pub icon: Color,

    pub table_header_bg: Color,
    /// Background of a hovered table row.
    pub row_hover_bg: Color,
    /// Background of an idle table row.
    pub row_bg: Color,
    pub divider: Color,
}

/// Height and padding of one element size tier, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSize {
    /// Rows available to single-line content.
    pub height: u16,
    pub inset: Inset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSizes {
    pub default_element_width: u16,
    /// Corner radius; any non-zero value draws rounded corners.
    pub default_radius: u16,
    pub small: ElementSize,
    pub medium: ElementSize,
    pub large: ElementSize,
}

impl Default for ThemeSizes {
    fn default() -> Self {
        Self {
            default_element_width: 40,
            default_radius: 1,
            small: ElementSize {
                height: 1,
                inset: Inset::symmetric(0, 0),
            },
            medium: ElementSize {
                height: 1,
                inset: Inset::symmetric(0, 1),
            },
            large: ElementSize {
                height: 1,
                inset: Inset::symmetric(1, 2),
            },
        }
    }
}

/// Theme trait exposes semantic roles, size tiers and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn sizes(&self) -> ThemeSizes {
        ThemeSizes::default()
    }

    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().default_text)
    }

    fn hint_style(&self) -> Style {
        Style::default().fg(self.roles().hint_text)
    }

    fn header_label_style(&self) -> Style {
        self.text_primary_style().add_modifier(Modifier::BOLD)
    }

    fn border_style_for(&self, color: Color) -> Style {
        Style::default().fg(color)
    }

    fn divider_style(&self) -> Style {
        Style::default()
            .add_modifier(Modifier::UNDERLINED)
            .underline_color(self.roles().divider)
    }
}
