mod data;
mod grid_table;

pub use data::{Row, TableData, TableDataError, display_value, rows_from_json};
pub use grid_table::{
    CellFn, DEFAULT_ROW_HEIGHT, GridTable, HeaderFn, TABLE_CELL_INSET, default_body_cell, default_header_cell,
};
