use ratatui::{layout::Size, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::ui::host::frame::FrameContext;

/// Single-line text, truncated to the available width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label<'a> {
    text: &'a str,
    style: Style,
}

impl<'a> Label<'a> {
    pub fn new(text: &'a str, style: Style) -> Self {
        Self { text, style }
    }

    pub fn layout(&self, ctx: &mut FrameContext<'_>) -> Size {
        if ctx.constraints.max.height == 0 {
            return ctx.constraints.constrain(Size::new(0, 0));
        }
        let wanted = u16::try_from(self.text.width()).unwrap_or(u16::MAX);
        let written = ctx.set_string(0, 0, self.text, self.style);
        ctx.constraints.constrain(Size::new(written.min(wanted), 1))
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::*;
    use crate::ui::host::frame::{Constraints, Ops};

    #[test]
    fn label_truncates_to_width() {
        let mut ops = Ops::new(Rect::new(0, 0, 3, 1));
        let size = {
            let mut ctx = FrameContext::new(Constraints::loose(Size::new(3, 1)), None, &mut ops);
            Label::new("Email", Style::default()).layout(&mut ctx)
        };
        assert_eq!(size, Size::new(3, 1));
        assert_eq!(ops.buffer()[(2, 0)].symbol(), "a");
    }
}
