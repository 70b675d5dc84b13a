//! Common interface for widgets laid out once per frame.

use ratatui::layout::{Position, Size};

use crate::ui::{
    components::{input::InputField, table::GridTable},
    host::frame::{Constraints, FrameContext},
};

/// A stateful widget that updates from routed events and draws itself each
/// frame, returning the size it occupies.
pub trait Component {
    fn layout(&mut self, ctx: &mut FrameContext<'_>) -> Size;
}

impl Component for InputField {
    fn layout(&mut self, ctx: &mut FrameContext<'_>) -> Size {
        InputField::layout(self, ctx)
    }
}

impl Component for GridTable {
    fn layout(&mut self, ctx: &mut FrameContext<'_>) -> Size {
        self.layout_table(ctx)
    }
}

/// Lays out `components` top to bottom with `gap` empty rows between them.
/// Each gets the full width and whatever height remains.
pub fn stack(ctx: &mut FrameContext<'_>, components: &mut [&mut dyn Component], gap: u16) -> Size {
    let max = ctx.constraints.max;
    let mut y = 0u16;
    let mut width = 0u16;
    for (index, component) in components.iter_mut().enumerate() {
        if index > 0 {
            y = y.saturating_add(gap);
        }
        if y >= max.height {
            break;
        }
        let constraints = Constraints::loose(Size::new(max.width, max.height - y));
        let size = ctx.offset(Position::new(0, y), constraints, |ctx| component.layout(ctx));
        y = y.saturating_add(size.height);
        width = width.max(size.width);
    }
    ctx.constraints.constrain(Size::new(width, y))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{buffer::Buffer, layout::Rect};
    use serde_json::json;

    use super::*;
    use crate::ui::{host::Host, theme::NordTheme};

    #[test]
    fn stack_places_components_below_each_other() {
        let theme: Arc<dyn crate::ui::theme::Theme> = Arc::new(NordTheme::new());
        let mut field = InputField::new(Arc::clone(&theme), "Email", None);
        field.set_width(0);
        let mut table = GridTable::new(theme);
        table.set_json(json!([{"k": "v"}])).unwrap();

        let mut buffer = Buffer::empty(Rect::new(0, 0, 20, 10));
        let size = Host::inert_frame(&mut buffer, |ctx| stack(ctx, &mut [&mut field, &mut table], 1));

        assert_eq!(size, Size::new(20, 6));
        assert_eq!(buffer[(9, 4)].symbol(), "k");
        assert_eq!(buffer[(9, 5)].symbol(), "v");
    }
}
