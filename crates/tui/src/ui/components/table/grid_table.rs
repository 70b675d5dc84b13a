//! Equal-width grid table with pluggable header and body cell renderers.
//!
//! Row height is discovered each frame by measuring an inset spacer in a
//! throwaway pass. Columns split the available width evenly across the
//! headers. Cells are drawn by caller-supplied callbacks; defaults that paint
//! a header band and hover-highlighted body rows are installed the first
//! time the table is laid out without them.

use std::sync::Arc;

use ratatui::layout::{Rect, Size};
use serde_json::Value;
use tracing::{debug, trace};

use super::data::{Row, TableData, TableDataError, rows_from_json};
use crate::ui::{
    components::common::Label,
    host::{
        flex::{Inset, Spacer, center},
        frame::{Constraints, FrameContext},
        gesture::Toggle,
        grid::{Axis, Grid, GridCells, GridState},
    },
    theme::Theme,
};

/// Padding around every cell's content, in cells.
pub const TABLE_CELL_INSET: Inset = Inset::symmetric(0, 1);
/// Content rows per table row before insets.
pub const DEFAULT_ROW_HEIGHT: u16 = 1;

/// Draws header cell `col`.
pub type HeaderFn = Box<dyn FnMut(&mut FrameContext<'_>, &mut TableData, usize) -> Size>;
/// Draws body cell (`row`, `col`).
pub type CellFn = Box<dyn FnMut(&mut FrameContext<'_>, &mut TableData, usize, usize) -> Size>;

pub struct GridTable {
    theme: Arc<dyn Theme>,
    row_height: u16,
    grid: GridState,
    header_fun: Option<HeaderFn>,
    data_fun: Option<CellFn>,
    data: TableData,
}

impl GridTable {
    pub fn new(theme: Arc<dyn Theme>) -> Self {
        Self {
            data: TableData::new(Arc::clone(&theme)),
            theme,
            row_height: DEFAULT_ROW_HEIGHT,
            grid: GridState::new(),
            header_fun: None,
            data_fun: None,
        }
    }

    pub fn set_header<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the rows. Column keys follow the first row, each row gets
    /// a fresh hover toggle and scrolling restarts at the top.
    pub fn set_data(&mut self, rows: Vec<Row>) -> &mut Self {
        debug!(rows = rows.len(), "table data replaced");
        self.data.replace_rows(rows);
        self.grid.scroll_to_top();
        self
    }

    /// Loads rows from JSON. Headers default to the column keys when none
    /// were set.
    pub fn set_json(&mut self, json: Value) -> Result<&mut Self, TableDataError> {
        let rows = rows_from_json(json)?;
        self.set_data(rows);
        if self.data.headers.is_empty() {
            self.data.headers = self.data.keys.clone();
        }
        Ok(self)
    }

    pub fn set_row_height(&mut self, row_height: u16) -> &mut Self {
        self.row_height = row_height;
        self
    }

    pub fn set_header_fun(
        &mut self,
        header: impl FnMut(&mut FrameContext<'_>, &mut TableData, usize) -> Size + 'static,
    ) -> &mut Self {
        self.header_fun = Some(Box::new(header));
        self
    }

    pub fn set_data_fun(
        &mut self,
        cell: impl FnMut(&mut FrameContext<'_>, &mut TableData, usize, usize) -> Size + 'static,
    ) -> &mut Self {
        self.data_fun = Some(Box::new(cell));
        self
    }

    pub fn headers(&self) -> &[String] {
        self.data.headers()
    }

    pub fn keys(&self) -> &[String] {
        self.data.keys()
    }

    pub fn rows(&self) -> &[Row] {
        self.data.rows()
    }

    pub fn toggles(&self) -> &[Toggle] {
        self.data.toggles()
    }

    pub fn grid_state(&self) -> &GridState {
        &self.grid
    }

    pub fn theme(&self) -> &dyn Theme {
        &*self.theme
    }

    /// Width of every column given `available` cells; truncating division.
    pub fn column_width(&self, available: u16) -> u16 {
        available.checked_div(self.data.column_divisor()).unwrap_or(0)
    }

    fn measure_row_height(&self, ctx: &mut FrameContext<'_>) -> u16 {
        let relaxed = Constraints::loose(ctx.constraints.max);
        let row_height = self.row_height;
        let size = ctx.with_constraints(relaxed, |ctx| {
            ctx.measure(|ctx| TABLE_CELL_INSET.layout(ctx, |ctx| Spacer::new(0, row_height).layout(ctx)))
        });
        trace!(height = size.height, "table row height measured");
        size.height
    }

    pub fn layout_table(&mut self, ctx: &mut FrameContext<'_>) -> Size {
        if self.data.rows.is_empty() {
            return Size::new(0, 0);
        }
        let row_height = self.measure_row_height(ctx);
        let divisor = self.data.column_divisor();

        let header = self
            .header_fun
            .get_or_insert_with(|| Box::new(default_header_cell) as HeaderFn);
        let body = self.data_fun.get_or_insert_with(|| Box::new(default_body_cell) as CellFn);

        let rows = self.data.rows.len();
        let cols = self.data.keys.len();
        let mut cells = TableCells {
            data: &mut self.data,
            header,
            body,
        };
        Grid::layout(
            ctx,
            &mut self.grid,
            rows,
            cols,
            move |axis: Axis, _index: usize, constraint: u16| match axis {
                Axis::Horizontal => constraint.checked_div(divisor).unwrap_or(0),
                Axis::Vertical => row_height,
            },
            &mut cells,
        )
    }
}

struct TableCells<'a> {
    data: &'a mut TableData,
    header: &'a mut HeaderFn,
    body: &'a mut CellFn,
}

impl GridCells for TableCells<'_> {
    fn heading(&mut self, ctx: &mut FrameContext<'_>, col: usize) -> Size {
        (self.header)(ctx, &mut *self.data, col)
    }

    fn cell(&mut self, ctx: &mut FrameContext<'_>, row: usize, col: usize) -> Size {
        (self.body)(ctx, &mut *self.data, row, col)
    }
}

/// Header band in the header background with a bold, centred label.
pub fn default_header_cell(ctx: &mut FrameContext<'_>, data: &mut TableData, col: usize) -> Size {
    let theme = data.theme();
    ctx.fill(ctx.area(), theme.roles().table_header_bg);
    let label = data.headers().get(col).map(String::as_str).unwrap_or_default();
    let style = theme.header_label_style();
    TABLE_CELL_INSET.layout(ctx, |ctx| center(ctx, |ctx| Label::new(label, style).layout(ctx)))
}

/// Row background that follows hover, a divider along the bottom edge and
/// the centred cell value.
pub fn default_body_cell(ctx: &mut FrameContext<'_>, data: &mut TableData, row: usize, col: usize) -> Size {
    let roles = *data.theme().roles();
    let text_style = data.theme().text_primary_style();
    let divider = data.theme().divider_style();
    let text = data.display(row, col);
    let Some(toggle) = data.toggle_mut(row) else {
        return ctx.constraints.min;
    };
    let hovered = toggle.hovered(ctx);
    toggle.layout(ctx, |ctx| {
        let area = ctx.area();
        ctx.fill(area, if hovered { roles.row_hover_bg } else { roles.row_bg });
        if area.height > 0 {
            ctx.set_style(Rect::new(0, area.height - 1, area.width, 1), divider);
        }
        TABLE_CELL_INSET.layout(ctx, |ctx| center(ctx, |ctx| Label::new(&text, text_style).layout(ctx)))
    })
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use crossterm::event::{Event, KeyModifiers, MouseEvent, MouseEventKind};
    use ratatui::{buffer::Buffer, style::Modifier};
    use serde_json::json;

    use super::*;
    use crate::ui::{host::Host, theme::DraculaTheme};

    fn theme() -> Arc<dyn Theme> {
        Arc::new(DraculaTheme::new())
    }

    fn people() -> GridTable {
        let mut table = GridTable::new(theme());
        table
            .set_header(["Name", "Age"])
            .set_json(json!([{"Name": "Ann", "Age": 30}, {"Name": "Bob", "Age": 25}]))
            .unwrap();
        table
    }

    fn symbol_at(buffer: &Buffer, x: u16, y: u16) -> &str {
        buffer[(x, y)].symbol()
    }

    #[test]
    fn empty_table_draws_nothing() {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let mut table = GridTable::new(theme());
        table.set_header(["A"]).set_header_fun(move |ctx, _, _| {
            seen.set(seen.get() + 1);
            ctx.constraints.min
        });

        let mut buffer = Buffer::empty(Rect::new(0, 0, 20, 5));
        let size = Host::inert_frame(&mut buffer, |ctx| table.layout_table(ctx));
        assert_eq!(size, Size::new(0, 0));
        assert_eq!(calls.get(), 0);
        assert_eq!(buffer, Buffer::empty(Rect::new(0, 0, 20, 5)));
    }

    #[test]
    fn columns_split_width_evenly_with_truncation() {
        let mut table = GridTable::new(theme());
        assert_eq!(table.column_width(100), 0);
        table.set_data(vec![Row::from_iter([("a".to_string(), json!(1)), ("b".to_string(), json!(2))])]);
        assert_eq!(table.column_width(101), 50, "falls back to key count");
        table.set_header(["x", "y", "z"]);
        assert_eq!(table.column_width(100), 33);
        assert_eq!(table.column_width(2), 0);
    }

    #[test]
    fn toggles_track_rows_across_replacements() {
        let mut table = GridTable::new(theme());
        table.set_json(json!([{"a": 1}, {"a": 2}, {"a": 3}])).unwrap();
        assert_eq!(table.toggles().len(), 3);
        table.set_json(json!([{"b": 1}])).unwrap();
        assert_eq!(table.toggles().len(), 1);
        assert_eq!(table.keys(), ["b"]);
        assert_eq!(table.headers(), ["a"], "explicit headers survive later loads");
    }

    #[test]
    fn name_age_table_renders_centered_cells() {
        let mut table = people();
        let mut buffer = Buffer::empty(Rect::new(0, 0, 40, 10));
        let size = Host::inert_frame(&mut buffer, |ctx| table.layout_table(ctx));
        let roles = *theme().roles();

        assert_eq!(size, Size::new(40, 3));
        assert_eq!(symbol_at(&buffer, 8, 0), "N");
        assert_eq!(symbol_at(&buffer, 28, 0), "A");
        assert_eq!(buffer[(0, 0)].bg, roles.table_header_bg);
        assert!(buffer[(8, 0)].modifier.contains(Modifier::BOLD));

        assert_eq!(symbol_at(&buffer, 8, 1), "A");
        assert_eq!(symbol_at(&buffer, 29, 1), "3");
        assert_eq!(symbol_at(&buffer, 30, 1), "0");
        assert_eq!(symbol_at(&buffer, 8, 2), "B");
        assert_eq!(symbol_at(&buffer, 29, 2), "2");
        assert_eq!(buffer[(0, 1)].bg, roles.row_bg);
        assert!(buffer[(0, 1)].modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn hovered_row_uses_hover_background() {
        let mut table = people();
        let mut host = Host::new();
        let area = Rect::new(0, 0, 40, 10);
        let mut buffer = Buffer::empty(area);
        host.frame(&mut buffer, |ctx| table.layout_table(ctx));

        host.push(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 25,
            row: 2,
            modifiers: KeyModifiers::NONE,
        }));
        let mut buffer = Buffer::empty(area);
        host.frame(&mut buffer, |ctx| table.layout_table(ctx));

        let roles = *theme().roles();
        assert_eq!(buffer[(0, 2)].bg, roles.row_hover_bg);
        assert_eq!(buffer[(0, 1)].bg, roles.row_bg);
    }

    #[test]
    fn defaults_are_installed_only_when_missing() {
        let mut table = people();
        table.set_header_fun(|ctx, data, col| {
            let label = data.headers()[col].to_uppercase();
            ctx.set_string(0, 0, &label, ratatui::style::Style::default());
            ctx.constraints.min
        });
        let mut buffer = Buffer::empty(Rect::new(0, 0, 40, 10));
        Host::inert_frame(&mut buffer, |ctx| table.layout_table(ctx));

        assert_eq!(symbol_at(&buffer, 0, 0), "N");
        assert_eq!(symbol_at(&buffer, 1, 0), "A");
        assert_eq!(symbol_at(&buffer, 2, 0), "M");
        assert_eq!(symbol_at(&buffer, 8, 1), "A", "body keeps the default renderer");
    }

    #[test]
    fn clearing_rows_resets_toggles_scroll_and_drawing() {
        let mut table = GridTable::new(theme());
        table
            .set_json(json!([{"n": 1}, {"n": 2}, {"n": 3}, {"n": 4}, {"n": 5}]))
            .unwrap();
        let mut host = Host::new();
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        host.frame(&mut buffer, |ctx| table.layout_table(ctx));

        host.push(Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        }));
        let mut buffer = Buffer::empty(area);
        host.frame(&mut buffer, |ctx| table.layout_table(ctx));
        assert_eq!(table.grid_state().first_row(), 1);

        table.set_data(Vec::new());
        assert!(table.toggles().is_empty());
        assert!(table.keys().is_empty());
        assert_eq!(table.grid_state().first_row(), 0);

        let mut buffer = Buffer::empty(area);
        let size = host.frame(&mut buffer, |ctx| table.layout_table(ctx));
        assert_eq!(size, Size::new(0, 0));
        assert_eq!(buffer, Buffer::empty(area));
    }

    #[test]
    fn toggle_count_follows_row_count() {
        let mut table = GridTable::new(theme());
        for count in [0usize, 1, 7] {
            let rows = (0..count).map(|i| Row::from_iter([("i".to_string(), json!(i))])).collect();
            table.set_data(rows);
            assert_eq!(table.toggles().len(), count);
            assert_eq!(table.rows().len(), count);
        }
    }

    #[test]
    fn taller_rows_come_from_row_height() {
        let mut table = people();
        table.set_row_height(2);
        let mut buffer = Buffer::empty(Rect::new(0, 0, 40, 10));
        let size = Host::inert_frame(&mut buffer, |ctx| table.layout_table(ctx));
        assert_eq!(size, Size::new(40, 6));
    }
}
