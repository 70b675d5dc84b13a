//! Composition helpers: insets, spacers, centring and a horizontal flex row.

use ratatui::layout::{Position, Size};

use crate::ui::host::frame::{Constraints, FrameContext};

/// A boxed layout callback.
pub type WidgetFn<'w> = Box<dyn FnMut(&mut FrameContext<'_>) -> Size + 'w>;

/// Space reserved around content, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inset {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Inset {
    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub const fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    pub const fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }

    pub fn layout(&self, ctx: &mut FrameContext<'_>, content: impl FnOnce(&mut FrameContext<'_>) -> Size) -> Size {
        let outer = ctx.constraints;
        let shrink = |size: Size| Size::new(size.width.saturating_sub(self.horizontal()), size.height.saturating_sub(self.vertical()));
        let inner = Constraints::new(shrink(outer.min), shrink(outer.max));
        let size = ctx.offset(Position::new(self.left, self.top), inner, content);
        outer.constrain(Size::new(
            size.width.saturating_add(self.horizontal()),
            size.height.saturating_add(self.vertical()),
        ))
    }
}

/// Empty space of a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacer {
    pub width: u16,
    pub height: u16,
}

impl Spacer {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn layout(&self, ctx: &mut FrameContext<'_>) -> Size {
        ctx.constraints.constrain(Size::new(self.width, self.height))
    }
}

/// Lays out `content` under loose constraints and centres it within the
/// larger of its size and the minimum constraints.
pub fn center(ctx: &mut FrameContext<'_>, content: impl FnOnce(&mut FrameContext<'_>) -> Size) -> Size {
    let outer = ctx.constraints;
    ctx.constraints = Constraints::loose(outer.max);
    let (recording, size) = ctx.record(content);
    ctx.constraints = outer;
    let container = outer.constrain(size);
    let offset = Position::new(
        container.width.saturating_sub(size.width) / 2,
        container.height.saturating_sub(size.height) / 2,
    );
    recording.replay(ctx, offset);
    container
}

/// Cross-axis placement of flex children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Start,
    Middle,
    End,
}

/// Distribution of leftover main-axis space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    /// Leftover space goes after the last child.
    #[default]
    End,
    /// Leftover space goes between children.
    SpaceBetween,
}

pub enum FlexChild<'w> {
    Rigid(WidgetFn<'w>),
    Flexed(f32, WidgetFn<'w>),
}

impl<'w> FlexChild<'w> {
    pub fn rigid(widget: impl FnMut(&mut FrameContext<'_>) -> Size + 'w) -> Self {
        Self::Rigid(Box::new(widget))
    }

    pub fn flexed(weight: f32, widget: impl FnMut(&mut FrameContext<'_>) -> Size + 'w) -> Self {
        Self::Flexed(weight, Box::new(widget))
    }
}

/// Horizontal row. Rigid children are measured first at their natural size,
/// flexed children then share the remaining width by weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flex {
    pub spacing: Spacing,
    pub alignment: Alignment,
}

impl Flex {
    pub fn horizontal() -> Self {
        Self::default()
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn layout(&self, ctx: &mut FrameContext<'_>, children: &mut [FlexChild<'_>]) -> Size {
        let outer = ctx.constraints;
        let cross_max = outer.max.height;
        let mut remaining = outer.max.width;
        let mut recordings = Vec::with_capacity(children.len());
        recordings.resize_with(children.len(), || None);

        for (index, child) in children.iter_mut().enumerate() {
            if let FlexChild::Rigid(widget) = child {
                let constraints = Constraints::loose(Size::new(remaining, cross_max));
                let recorded = ctx.with_constraints(constraints, |ctx| ctx.record(|ctx| widget(ctx)));
                remaining = remaining.saturating_sub(recorded.1.width);
                recordings[index] = Some(recorded);
            }
        }

        let total_weight: f32 = children
            .iter()
            .filter_map(|child| match child {
                FlexChild::Flexed(weight, _) => Some(*weight),
                FlexChild::Rigid(_) => None,
            })
            .sum();
        let flexible = remaining;
        let mut flexed_used = 0u16;
        let flexed_count = children.iter().filter(|child| matches!(child, FlexChild::Flexed(..))).count();
        let mut flexed_seen = 0usize;
        for (index, child) in children.iter_mut().enumerate() {
            if let FlexChild::Flexed(weight, widget) = child {
                flexed_seen += 1;
                let share = if flexed_seen == flexed_count {
                    flexible.saturating_sub(flexed_used)
                } else if total_weight > 0.0 {
                    (f32::from(flexible) * *weight / total_weight).floor() as u16
                } else {
                    0
                };
                flexed_used = flexed_used.saturating_add(share);
                let constraints = Constraints::new(Size::new(share, 0), Size::new(share, cross_max));
                let recorded = ctx.with_constraints(constraints, |ctx| ctx.record(|ctx| widget(ctx)));
                recordings[index] = Some(recorded);
            }
        }

        let sizes: Vec<Size> = recordings
            .iter()
            .map(|recorded| recorded.as_ref().map_or(Size::new(0, 0), |(_, size)| *size))
            .collect();
        let main: u16 = sizes.iter().fold(0u16, |sum, size| sum.saturating_add(size.width));
        let cross = sizes
            .iter()
            .map(|size| size.height)
            .max()
            .unwrap_or(0)
            .max(outer.min.height)
            .min(cross_max);
        let leftover = outer.min.width.saturating_sub(main);
        let gaps = u16::try_from(children.len().saturating_sub(1)).unwrap_or(u16::MAX);

        let mut x = 0u16;
        for (index, recorded) in recordings.iter().enumerate() {
            let Some((recording, size)) = recorded else {
                continue;
            };
            let y = match self.alignment {
                Alignment::Start => 0,
                Alignment::Middle => cross.saturating_sub(size.height) / 2,
                Alignment::End => cross.saturating_sub(size.height),
            };
            recording.replay(ctx, Position::new(x, y));
            x = x.saturating_add(size.width);
            if self.spacing == Spacing::SpaceBetween && gaps > 0 && index < children.len() - 1 {
                let gap = leftover / gaps + u16::from(u16::try_from(index).unwrap_or(u16::MAX) < leftover % gaps);
                x = x.saturating_add(gap);
            }
        }

        outer.constrain(Size::new(main.saturating_add(leftover), cross))
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{
        layout::Rect,
        style::Style,
    };

    use super::*;
    use crate::ui::host::frame::Ops;

    fn text(label: &'static str) -> impl FnMut(&mut FrameContext<'_>) -> Size {
        move |ctx| {
            let width = ctx.set_string(0, 0, label, Style::default());
            ctx.constraints.constrain(Size::new(width, 1))
        }
    }

    #[test]
    fn flexed_child_takes_what_rigid_children_leave() {
        let mut ops = Ops::new(Rect::new(0, 0, 12, 1));
        let mut ctx = FrameContext::new(Constraints::tight(Size::new(12, 1)), None, &mut ops);
        let mut flexed_width = 0;
        let size = Flex::horizontal().alignment(Alignment::Middle).layout(
            &mut ctx,
            &mut [
                FlexChild::rigid(text("<")),
                FlexChild::flexed(1.0, |ctx: &mut FrameContext<'_>| {
                    flexed_width = ctx.constraints.max.width;
                    ctx.constraints.min
                }),
                FlexChild::rigid(text(">")),
            ],
        );
        drop(ctx);

        assert_eq!(size, Size::new(12, 1));
        assert_eq!(flexed_width, 10);
        assert_eq!(ops.buffer()[(0, 0)].symbol(), "<");
        assert_eq!(ops.buffer()[(11, 0)].symbol(), ">");
    }

    #[test]
    fn center_places_content_in_the_middle() {
        let mut ops = Ops::new(Rect::new(0, 0, 7, 3));
        let mut ctx = FrameContext::new(Constraints::tight(Size::new(7, 3)), None, &mut ops);
        let size = center(&mut ctx, text("abc"));
        drop(ctx);

        assert_eq!(size, Size::new(7, 3));
        assert_eq!(ops.buffer()[(2, 1)].symbol(), "a");
    }

    #[test]
    fn inset_adds_padding_to_content_size() {
        let mut ops = Ops::new(Rect::new(0, 0, 10, 5));
        let mut ctx = FrameContext::new(Constraints::loose(Size::new(10, 5)), None, &mut ops);
        let size = Inset::symmetric(1, 2).layout(&mut ctx, |ctx| Spacer::new(3, 1).layout(ctx));
        assert_eq!(size, Size::new(7, 3));
    }
}
