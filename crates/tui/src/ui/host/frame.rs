//! Per-frame layout context, drawing sink and macro recording.
//!
//! A [`FrameContext`] is handed to every `layout` call. It carries the
//! constraints for the callee, the optional event source (absent during
//! measurement-only passes), and the [`Ops`] sink that collects drawn cells
//! and hit regions. All coordinates passed to the drawing helpers are local
//! to the context origin and are clipped to the context bounds.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    buffer::{Buffer, Cell},
    layout::{Position, Rect, Size},
    style::{Color, Style},
    widgets::Widget,
};

use crate::ui::focus::FocusCommand;
use crate::ui::host::events::{EventSource, HitRegion, Tag};

/// Minimum and maximum extents a widget may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraints {
    pub min: Size,
    pub max: Size,
}

impl Constraints {
    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Zero minimum, `max` maximum.
    pub const fn loose(max: Size) -> Self {
        Self {
            min: Size { width: 0, height: 0 },
            max,
        }
    }

    /// Exactly `size`.
    pub const fn tight(size: Size) -> Self {
        Self { min: size, max: size }
    }

    /// Clamps `size` into these constraints; `max` wins when `min > max`.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.max(self.min.width).min(self.max.width),
            size.height.max(self.min.height).min(self.max.height),
        )
    }
}

/// Drawing sink for one frame: drawn cells plus registered hit regions.
#[derive(Debug, Clone)]
pub struct Ops {
    buffer: Buffer,
    regions: Vec<HitRegion>,
}

impl Ops {
    pub fn new(area: Rect) -> Self {
        Self {
            buffer: Buffer::empty(area),
            regions: Vec::new(),
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    pub fn take_regions(&mut self) -> Vec<HitRegion> {
        std::mem::take(&mut self.regions)
    }

    /// Whether nothing was drawn or registered.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.buffer.content.iter().all(|cell| *cell == Cell::EMPTY)
    }

    /// Layers every drawn cell onto `target` at the same absolute position.
    pub fn flush(&self, target: &mut Buffer) {
        copy_touched(&self.buffer, target, Position::new(0, 0), target.area);
    }
}

fn copy_touched(source: &Buffer, target: &mut Buffer, shift: Position, clip: Rect) {
    let area = source.area;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let Some(cell) = source.cell((x, y)) else {
                continue;
            };
            if *cell == Cell::EMPTY {
                continue;
            }
            let destination = Position::new(x.saturating_add(shift.x), y.saturating_add(shift.y));
            if !clip.contains(destination) {
                continue;
            }
            if let Some(slot) = target.cell_mut(destination) {
                merge_cell(slot, cell);
            }
        }
    }
}

/// Layers `cell` over `slot`: the symbol is replaced, colors only where set.
fn merge_cell(slot: &mut Cell, cell: &Cell) {
    let mut style = Style::default().add_modifier(cell.modifier);
    if cell.fg != Color::Reset {
        style = style.fg(cell.fg);
    }
    if cell.bg != Color::Reset {
        style = style.bg(cell.bg);
    }
    if cell.underline_color != Color::Reset {
        style = style.underline_color(cell.underline_color);
    }
    slot.set_symbol(cell.symbol()).set_style(style);
}

/// Drawing and regions captured by [`FrameContext::record`].
///
/// Nothing reaches the frame until [`Recording::replay`] is called; dropping
/// the recording discards it.
#[derive(Debug, Clone)]
pub struct Recording {
    ops: Ops,
    size: Size,
}

impl Recording {
    pub fn size(&self) -> Size {
        self.size
    }

    /// Emits the recorded cells and regions into `ctx` at the local `offset`.
    pub fn replay(&self, ctx: &mut FrameContext<'_>, offset: Position) {
        let base = ctx.absolute(offset);
        copy_touched(&self.ops.buffer, &mut ctx.ops.buffer, base, ctx.clip);
        for region in &self.ops.regions {
            let area = Rect::new(
                region.area.x.saturating_add(base.x),
                region.area.y.saturating_add(base.y),
                region.area.width,
                region.area.height,
            )
            .intersection(ctx.clip);
            if !area.is_empty() {
                ctx.ops.regions.push(HitRegion { tag: region.tag, area });
            }
        }
    }
}

/// Layout context for a single widget call within a frame.
pub struct FrameContext<'a> {
    pub constraints: Constraints,
    source: Option<&'a mut EventSource>,
    ops: &'a mut Ops,
    origin: Position,
    clip: Rect,
}

impl<'a> FrameContext<'a> {
    /// Root context covering the whole `ops` buffer.
    pub fn new(constraints: Constraints, source: Option<&'a mut EventSource>, ops: &'a mut Ops) -> Self {
        let area = ops.buffer.area;
        Self {
            constraints,
            source,
            ops,
            origin: Position::new(area.x, area.y),
            clip: area,
        }
    }

    /// `false` during measurement-only passes.
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// The local rectangle spanned by the maximum constraints.
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.constraints.max.width, self.constraints.max.height)
    }

    fn absolute(&self, local: Position) -> Position {
        Position::new(self.origin.x.saturating_add(local.x), self.origin.y.saturating_add(local.y))
    }

    fn absolute_rect(&self, local: Rect) -> Rect {
        let origin = self.absolute(Position::new(local.x, local.y));
        Rect::new(origin.x, origin.y, local.width, local.height).intersection(self.clip)
    }

    fn child(&mut self, offset: Position, constraints: Constraints) -> FrameContext<'_> {
        let origin = self.absolute(offset);
        let bounds = Rect::new(origin.x, origin.y, constraints.max.width, constraints.max.height);
        FrameContext {
            constraints,
            source: self.source.as_deref_mut(),
            ops: &mut *self.ops,
            origin,
            clip: self.clip.intersection(bounds),
        }
    }

    /// Lays out `f` at a local offset under new constraints.
    pub fn offset<R>(&mut self, offset: Position, constraints: Constraints, f: impl FnOnce(&mut FrameContext<'_>) -> R) -> R {
        let mut child = self.child(offset, constraints);
        f(&mut child)
    }

    /// Lays out `f` in place under new constraints.
    pub fn with_constraints<R>(&mut self, constraints: Constraints, f: impl FnOnce(&mut FrameContext<'_>) -> R) -> R {
        self.offset(Position::new(0, 0), constraints, f)
    }

    /// Records what `f` draws and registers without emitting it.
    pub fn record(&mut self, f: impl FnOnce(&mut FrameContext<'_>) -> Size) -> (Recording, Size) {
        let area = self.scratch_area();
        let mut ops = Ops::new(area);
        let size = {
            let mut scratch = FrameContext {
                constraints: self.constraints,
                source: self.source.as_deref_mut(),
                ops: &mut ops,
                origin: Position::new(0, 0),
                clip: area,
            };
            f(&mut scratch)
        };
        (Recording { ops, size }, size)
    }

    /// Runs `f` with no event source and throws its output away.
    pub fn measure(&mut self, f: impl FnOnce(&mut FrameContext<'_>) -> Size) -> Size {
        let area = self.scratch_area();
        let mut ops = Ops::new(area);
        let mut scratch = FrameContext {
            constraints: self.constraints,
            source: None,
            ops: &mut ops,
            origin: Position::new(0, 0),
            clip: area,
        };
        f(&mut scratch)
    }

    fn scratch_area(&self) -> Rect {
        let limit = self.ops.buffer.area;
        Rect::new(
            0,
            0,
            self.constraints.max.width.min(limit.width),
            self.constraints.max.height.min(limit.height),
        )
    }

    // ----- Events -----

    pub fn execute(&mut self, command: FocusCommand) {
        if let Some(source) = self.source.as_deref_mut() {
            source.focus_mut().execute(command);
        }
    }

    pub fn focused(&self, tag: Tag) -> bool {
        self.source.as_deref().is_some_and(|source| source.focus().is_focused(tag))
    }

    pub fn hovered(&self, tag: Tag) -> bool {
        self.source.as_deref().is_some_and(|source| source.is_hovered(tag))
    }

    pub fn drain_pointer(&mut self, tag: Tag) -> Vec<MouseEvent> {
        self.source
            .as_deref_mut()
            .map(|source| source.drain_pointer(tag))
            .unwrap_or_default()
    }

    pub fn drain_keys(&mut self, tag: Tag) -> Vec<KeyEvent> {
        self.source
            .as_deref_mut()
            .map(|source| source.drain_keys(tag))
            .unwrap_or_default()
    }

    /// Subscribes `tag` to pointer events over the local `area` for the next frame.
    pub fn register_region(&mut self, tag: Tag, area: Rect) {
        let area = self.absolute_rect(area);
        if !area.is_empty() {
            self.ops.regions.push(HitRegion { tag, area });
        }
    }

    // ----- Drawing -----

    pub fn fill(&mut self, area: Rect, color: Color) {
        self.set_style(area, Style::default().bg(color));
    }

    pub fn set_style(&mut self, area: Rect, style: Style) {
        let area = self.absolute_rect(area);
        if !area.is_empty() {
            self.ops.buffer.set_style(area, style);
        }
    }

    /// Writes a single line of text; returns the number of columns written.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let start = self.absolute(Position::new(x, y));
        if !self.clip.contains(start) {
            return 0;
        }
        let available = self.clip.right().saturating_sub(start.x);
        let (end, _) = self
            .ops
            .buffer
            .set_stringn(start.x, start.y, text, usize::from(available), style);
        end.saturating_sub(start.x)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        let area = self.absolute_rect(area);
        if !area.is_empty() {
            widget.render(area, &mut self.ops.buffer);
        }
    }
}
