use ratatui::{
    layout::Size,
    style::{Color, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::host::frame::FrameContext;

/// A single-row glyph drawn in a tint color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub name: &'static str,
    pub glyph: &'static str,
}

impl Icon {
    /// Shown while a password is revealed.
    pub const VISIBILITY: Icon = Icon::new("visibility", "◉");
    /// Shown while a password is masked.
    pub const VISIBILITY_OFF: Icon = Icon::new("visibility_off", "◌");

    pub const fn new(name: &'static str, glyph: &'static str) -> Self {
        Self { name, glyph }
    }

    pub fn width(&self) -> u16 {
        u16::try_from(self.glyph.width()).unwrap_or(u16::MAX)
    }

    pub fn draw(&self, ctx: &mut FrameContext<'_>, tint: Color) -> Size {
        let written = ctx.set_string(0, 0, self.glyph, Style::default().fg(tint));
        ctx.constraints.constrain(Size::new(written.max(self.width()), 1))
    }
}
