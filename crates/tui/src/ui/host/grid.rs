//! Virtualized grid primitive with a heading row.
//!
//! The grid owns scrolling and decides which cells are visible; callers only
//! answer sizing questions and draw individual cells through [`GridCells`].

use crossterm::event::MouseEventKind;
use ratatui::layout::{Position, Rect, Size};
use tracing::trace;

use crate::ui::host::{
    events::Tag,
    frame::{Constraints, FrameContext},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Draws heading and body cells on demand.
pub trait GridCells {
    fn heading(&mut self, ctx: &mut FrameContext<'_>, col: usize) -> Size;
    fn cell(&mut self, ctx: &mut FrameContext<'_>, row: usize, col: usize) -> Size;
}

/// Scroll position retained across frames, in body rows.
#[derive(Debug)]
pub struct GridState {
    tag: Tag,
    first_row: usize,
    row_count: usize,
    visible_rows: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            tag: Tag::next(),
            first_row: 0,
            row_count: 0,
            visible_rows: 0,
        }
    }
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Index of the first body row drawn.
    pub fn first_row(&self) -> usize {
        self.first_row
    }

    pub fn max_first_row(&self) -> usize {
        self.row_count.saturating_sub(self.visible_rows)
    }

    /// Scrolls by `delta` rows (`+` down, `-` up), clamped to the content.
    pub fn scroll_rows(&mut self, delta: isize) {
        let next = self.first_row.saturating_add_signed(delta);
        self.first_row = next.min(self.max_first_row());
    }

    pub fn scroll_to_top(&mut self) {
        self.first_row = 0;
    }

    fn update(&mut self, ctx: &mut FrameContext<'_>) {
        for mouse in ctx.drain_pointer(self.tag) {
            match mouse.kind {
                MouseEventKind::ScrollDown => self.scroll_rows(1),
                MouseEventKind::ScrollUp => self.scroll_rows(-1),
                _ => {}
            }
        }
    }

    fn update_metrics(&mut self, row_count: usize, visible_rows: usize) {
        self.row_count = row_count;
        self.visible_rows = visible_rows;
        self.first_row = self.first_row.min(self.max_first_row());
    }
}

/// Stateless grid layout; all retained state lives in [`GridState`].
pub struct Grid;

impl Grid {
    /// Lays out the heading row and the visible slice of `rows` body rows.
    ///
    /// `sizer(axis, index, constraint)` returns the width of column `index`
    /// (horizontal) or the height of row `index` (vertical), given the
    /// available extent on that axis. The heading row uses the height of
    /// row 0.
    pub fn layout(
        ctx: &mut FrameContext<'_>,
        state: &mut GridState,
        rows: usize,
        cols: usize,
        sizer: impl Fn(Axis, usize, u16) -> u16,
        cells: &mut impl GridCells,
    ) -> Size {
        state.update(ctx);
        let max = ctx.constraints.max;

        let mut widths = Vec::with_capacity(cols);
        let mut used_width = 0u16;
        for col in 0..cols {
            if used_width >= max.width {
                break;
            }
            let width = sizer(Axis::Horizontal, col, max.width).min(max.width - used_width);
            used_width = used_width.saturating_add(width);
            widths.push(width);
        }

        let heading_height = if rows > 0 { sizer(Axis::Vertical, 0, max.height).min(max.height) } else { 0 };
        let body_height = max.height.saturating_sub(heading_height);
        let nominal_row = sizer(Axis::Vertical, 0, max.height).max(1);
        state.update_metrics(rows, usize::from(body_height / nominal_row));

        let mut x = 0u16;
        for (col, width) in widths.iter().copied().enumerate() {
            ctx.offset(
                Position::new(x, 0),
                Constraints::tight(Size::new(width, heading_height)),
                |ctx| cells.heading(ctx, col),
            );
            x = x.saturating_add(width);
        }

        let mut y = heading_height;
        let mut drawn = 0usize;
        for row in state.first_row..rows {
            if y >= max.height {
                break;
            }
            let height = sizer(Axis::Vertical, row, max.height).min(max.height - y);
            let mut x = 0u16;
            for (col, width) in widths.iter().copied().enumerate() {
                ctx.offset(
                    Position::new(x, y),
                    Constraints::tight(Size::new(width, height)),
                    |ctx| cells.cell(ctx, row, col),
                );
                x = x.saturating_add(width);
            }
            y = y.saturating_add(height);
            drawn += 1;
        }
        trace!(first_row = state.first_row, drawn, rows, cols, "grid laid out");

        let size = ctx.constraints.constrain(Size::new(used_width, y));
        ctx.register_region(state.tag, Rect::new(0, 0, size.width, size.height));
        size
    }
}
