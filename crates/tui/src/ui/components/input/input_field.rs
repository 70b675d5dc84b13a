//! Bordered text input with hover/focus styling and optional password masking.

use std::sync::Arc;

use ratatui::{
    layout::{Position, Rect, Size},
    style::Color,
};
use tracing::debug;

use super::state::VisualState;
use crate::ui::{
    components::common::{Editor, EditorStyle},
    focus::FocusCommand,
    host::{
        flex::{Alignment, Flex, FlexChild, Spacing, WidgetFn},
        frame::{Constraints, FrameContext},
        gesture::{ClickGesture, ClickKind, Clickable},
    },
    icon::Icon,
    theme::{ElementSize, Theme, theme_helpers::field_block},
};

/// Visible rows of a text area's editor.
pub const DEFAULT_TEXT_AREA_HEIGHT: u16 = 5;
/// Glyph substituted for every character of a masked password.
pub const PASSWORD_MASK: char = '*';

/// Cells taken by the border on each axis.
const BORDER: u16 = 2;

pub struct InputField {
    theme: Arc<dyn Theme>,
    editor: Editor,
    /// Fixed editor rows for a text area; zero for single-line fields.
    height: u16,
    leading: Option<WidgetFn<'static>>,
    trailing: Option<WidgetFn<'static>>,
    icon: Option<Icon>,
    icon_click: Clickable,

    click: ClickGesture,
    state: VisualState,
    border_color: Color,
    bg_color: Color,
    hint: String,
    radius: u16,
    size: ElementSize,
    width: u16,

    password_revealed: bool,
    on_icon_click: Option<Box<dyn FnMut()>>,
}

impl InputField {
    /// Single-line field.
    pub fn new(theme: Arc<dyn Theme>, hint: impl Into<String>, initial: Option<&str>) -> Self {
        Self::build(theme, hint.into(), initial, true, 0)
    }

    /// Multi-line field with a fixed height of [`DEFAULT_TEXT_AREA_HEIGHT`] rows.
    pub fn text_area(theme: Arc<dyn Theme>, hint: impl Into<String>, initial: Option<&str>) -> Self {
        Self::build(theme, hint.into(), initial, false, DEFAULT_TEXT_AREA_HEIGHT)
    }

    fn build(theme: Arc<dyn Theme>, hint: String, initial: Option<&str>, single_line: bool, height: u16) -> Self {
        let sizes = theme.sizes();
        let roles = *theme.roles();
        let mut editor = Editor::new(single_line);
        if let Some(text) = initial {
            editor.set_text(text);
        }
        Self {
            theme,
            editor,
            height,
            leading: None,
            trailing: None,
            icon: None,
            icon_click: Clickable::new(),
            click: ClickGesture::new(),
            state: VisualState::Inactive,
            border_color: roles.default_border,
            bg_color: roles.default_bg,
            hint,
            radius: sizes.default_radius,
            size: sizes.medium,
            width: sizes.default_element_width,
            password_revealed: false,
            on_icon_click: None,
        }
    }

    // ----- Configuration -----

    /// Fixed width in cells; zero fills the available width.
    pub fn set_width(&mut self, width: u16) -> &mut Self {
        self.width = width;
        self
    }

    pub fn set_radius(&mut self, radius: u16) -> &mut Self {
        self.radius = radius;
        self
    }

    pub fn set_size(&mut self, size: ElementSize) -> &mut Self {
        self.size = size;
        self
    }

    pub fn read_only(&mut self) -> &mut Self {
        self.editor.set_read_only(true);
        self
    }

    /// Masks the text and shows the reveal icon.
    pub fn password(&mut self) -> &mut Self {
        self.editor.set_mask(Some(PASSWORD_MASK));
        self.icon = Some(Icon::VISIBILITY_OFF);
        self.password_revealed = false;
        self
    }

    /// Trailing icon button; takes the place of the trailing decoration.
    pub fn set_icon(&mut self, icon: Icon) -> &mut Self {
        self.icon = Some(icon);
        self
    }

    pub fn set_leading(&mut self, leading: impl FnMut(&mut FrameContext<'_>) -> Size + 'static) -> &mut Self {
        self.leading = Some(Box::new(leading));
        self
    }

    /// Shown only when no icon is set.
    pub fn set_trailing(&mut self, trailing: impl FnMut(&mut FrameContext<'_>) -> Size + 'static) -> &mut Self {
        self.trailing = Some(Box::new(trailing));
        self
    }

    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.editor.set_text(text);
        self
    }

    /// Invoked on every icon click, before the mask is toggled.
    pub fn set_on_icon_click(&mut self, callback: impl FnMut() + 'static) -> &mut Self {
        self.on_icon_click = Some(Box::new(callback));
        self
    }

    // ----- Accessors -----

    pub fn text(&self) -> &str {
        self.editor.text()
    }

    pub fn visual_state(&self) -> VisualState {
        self.state
    }

    pub fn border_color(&self) -> Color {
        self.border_color
    }

    pub fn bg_color(&self) -> Color {
        self.bg_color
    }

    pub fn is_password_revealed(&self) -> bool {
        self.password_revealed
    }

    pub fn icon(&self) -> Option<Icon> {
        self.icon
    }

    pub fn mask(&self) -> Option<char> {
        self.editor.mask()
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    // ----- Frame -----

    /// Consumes pending clicks and recomputes the visual state and colors.
    pub fn update(&mut self, ctx: &mut FrameContext<'_>) {
        let disabled = !ctx.has_source();
        while let Some(event) = self.click.update(ctx) {
            if event.kind == ClickKind::Press {
                ctx.execute(FocusCommand { tag: self.editor.tag() });
            }
        }

        self.state = VisualState::resolve(self.click.hovered(ctx), ctx.focused(self.editor.tag()), disabled);

        let roles = self.theme.roles();
        self.bg_color = roles.default_bg;
        if self.editor.read_only() {
            return;
        }
        match self.state {
            VisualState::Inactive | VisualState::Activated => self.border_color = roles.default_border,
            VisualState::Hovered => self.border_color = roles.hovered_border,
            VisualState::Focused => {
                self.bg_color = roles.focused_bg;
                self.border_color = roles.focused_border;
            }
        }
    }

    pub fn layout(&mut self, ctx: &mut FrameContext<'_>) -> Size {
        let mut constraints = ctx.constraints;
        if self.width > 0 {
            constraints.max.width = self.width;
        } else {
            constraints.min.width = constraints.max.width;
        }
        ctx.with_constraints(constraints, |ctx| {
            self.update(ctx);
            ctx.constraints.min.width = ctx.constraints.max.width;
            ctx.constraints.min.height = 0;

            let (body, size) = ctx.record(|ctx| self.layout_body(ctx));
            let bounds = Rect::new(0, 0, size.width, size.height);
            self.click.add(ctx, bounds);
            ctx.register_region(self.editor.tag(), bounds);
            body.replay(ctx, Position::new(0, 0));
            size
        })
    }

    fn layout_body(&mut self, ctx: &mut FrameContext<'_>) -> Size {
        let outer = ctx.constraints;
        let shrink = |size: Size| Size::new(size.width.saturating_sub(BORDER), size.height.saturating_sub(BORDER));
        let inner = Constraints::new(shrink(outer.min), shrink(outer.max));
        let inset = self.size.inset;
        let (content, content_size) = ctx.with_constraints(inner, |ctx| ctx.record(|ctx| inset.layout(ctx, |ctx| self.layout_row(ctx))));

        let size = outer.constrain(Size::new(
            content_size.width.saturating_add(BORDER),
            content_size.height.saturating_add(BORDER),
        ));
        let block = field_block(&*self.theme, self.border_color, self.bg_color, self.radius);
        ctx.render_widget(block, Rect::new(0, 0, size.width, size.height));
        content.replay(ctx, Position::new(1, 1));
        size
    }

    fn layout_row(&mut self, ctx: &mut FrameContext<'_>) -> Size {
        if self.icon.is_some() {
            while self.icon_click.clicked(ctx) {
                self.toggle_password();
            }
        }

        let lines = if self.height > 0 { self.height } else { self.size.height };
        self.editor.set_lines(lines);
        let mut style = EditorStyle::themed(&*self.theme, self.hint.as_str());
        if self.editor.read_only() {
            style.text_color = style.hint_color;
        }
        let tint = self.theme.roles().icon;

        let mut children: Vec<FlexChild<'_>> = Vec::with_capacity(3);
        if let Some(leading) = self.leading.as_mut() {
            children.push(FlexChild::rigid(move |ctx| leading(ctx)));
        }
        let editor = &mut self.editor;
        children.push(FlexChild::flexed(1.0, move |ctx| {
            ctx.with_constraints(Constraints::tight(Size::new(ctx.constraints.max.width, lines)), |ctx| {
                editor.layout(ctx, &style)
            })
        }));
        if let Some(icon) = self.icon {
            let clickable = &mut self.icon_click;
            children.push(FlexChild::rigid(move |ctx| clickable.layout(ctx, |ctx| icon.draw(ctx, tint))));
        } else if let Some(trailing) = self.trailing.as_mut() {
            children.push(FlexChild::rigid(move |ctx| trailing(ctx)));
        }

        Flex::horizontal()
            .spacing(Spacing::SpaceBetween)
            .alignment(Alignment::Middle)
            .layout(ctx, &mut children)
    }

    fn toggle_password(&mut self) {
        if let Some(callback) = self.on_icon_click.as_mut() {
            callback();
        }
        self.password_revealed = !self.password_revealed;
        if self.password_revealed {
            self.editor.set_mask(None);
            self.icon = Some(Icon::VISIBILITY);
        } else {
            self.editor.set_mask(Some(PASSWORD_MASK));
            self.icon = Some(Icon::VISIBILITY_OFF);
        }
        debug!(revealed = self.password_revealed, "password visibility toggled");
    }
}
