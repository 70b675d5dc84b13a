//! Pointer gesture recognizers built on routed mouse events.

use std::collections::VecDeque;

use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect, Size};

use crate::ui::host::{events::Tag, frame::FrameContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    /// Left button went down inside the region.
    Press,
    /// Left button was released inside the region after a press.
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub kind: ClickKind,
    pub position: Position,
}

/// Recognizes presses and clicks over the region it last registered.
#[derive(Debug)]
pub struct ClickGesture {
    tag: Tag,
    pressed: bool,
    pending: VecDeque<ClickEvent>,
}

impl Default for ClickGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickGesture {
    pub fn new() -> Self {
        Self {
            tag: Tag::next(),
            pressed: false,
            pending: VecDeque::new(),
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns the next click event routed since the last frame, if any.
    pub fn update(&mut self, ctx: &mut FrameContext<'_>) -> Option<ClickEvent> {
        for mouse in ctx.drain_pointer(self.tag) {
            let position = Position::new(mouse.column, mouse.row);
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    self.pressed = true;
                    self.pending.push_back(ClickEvent {
                        kind: ClickKind::Press,
                        position,
                    });
                }
                MouseEventKind::Up(MouseButton::Left) if self.pressed => {
                    self.pressed = false;
                    self.pending.push_back(ClickEvent {
                        kind: ClickKind::Click,
                        position,
                    });
                }
                _ => {}
            }
        }
        self.pending.pop_front()
    }

    pub fn hovered(&self, ctx: &FrameContext<'_>) -> bool {
        ctx.hovered(self.tag)
    }

    /// Subscribes to pointer events over the local `area` for the next frame.
    pub fn add(&self, ctx: &mut FrameContext<'_>, area: Rect) {
        ctx.register_region(self.tag, area);
    }
}

/// A click target that counts completed clicks.
#[derive(Debug, Default)]
pub struct Clickable {
    gesture: ClickGesture,
    clicks: usize,
}

impl Clickable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(&self) -> Tag {
        self.gesture.tag()
    }

    fn drain(&mut self, ctx: &mut FrameContext<'_>) {
        while let Some(event) = self.gesture.update(ctx) {
            if event.kind == ClickKind::Click {
                self.clicks += 1;
            }
        }
    }

    /// Reports one pending click per call.
    pub fn clicked(&mut self, ctx: &mut FrameContext<'_>) -> bool {
        self.drain(ctx);
        if self.clicks > 0 {
            self.clicks -= 1;
            true
        } else {
            false
        }
    }

    pub fn hovered(&self, ctx: &FrameContext<'_>) -> bool {
        self.gesture.hovered(ctx)
    }

    /// Lays out `content` and makes its bounds clickable.
    pub fn layout(&mut self, ctx: &mut FrameContext<'_>, content: impl FnOnce(&mut FrameContext<'_>) -> Size) -> Size {
        self.drain(ctx);
        let size = content(ctx);
        self.gesture.add(ctx, Rect::new(0, 0, size.width, size.height));
        size
    }
}

/// A boolean flipped by clicking its content; also reports hover.
#[derive(Debug, Default)]
pub struct Toggle {
    value: bool,
    clickable: Clickable,
}

impl Toggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn tag(&self) -> Tag {
        self.clickable.tag()
    }

    pub fn hovered(&self, ctx: &FrameContext<'_>) -> bool {
        self.clickable.hovered(ctx)
    }

    /// Applies pending clicks; returns whether the value changed.
    pub fn update(&mut self, ctx: &mut FrameContext<'_>) -> bool {
        let mut changed = false;
        while self.clickable.clicked(ctx) {
            self.value = !self.value;
            changed = !changed;
        }
        changed
    }

    pub fn layout(&mut self, ctx: &mut FrameContext<'_>, content: impl FnOnce(&mut FrameContext<'_>) -> Size) -> Size {
        self.update(ctx);
        self.clickable.layout(ctx, content)
    }
}
