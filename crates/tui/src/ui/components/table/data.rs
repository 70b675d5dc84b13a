//! Row storage shared with the grid table's cell callbacks.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

use crate::ui::{host::gesture::Toggle, theme::Theme};

/// One table row: column key to value, in insertion order.
pub type Row = IndexMap<String, Value>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableDataError {
    #[error("JSON is neither an array nor an object holding an array")]
    NotTabular,
    #[error("row {index} is not a JSON object")]
    RowNotObject { index: usize },
}

/// Renders a cell value: strings without quotes, absent values as `null`,
/// everything else as compact JSON.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Converts a JSON array of objects, or an object whose first array field
/// holds the rows, into table rows.
pub fn rows_from_json(json: Value) -> Result<Vec<Row>, TableDataError> {
    let items = match json {
        Value::Array(items) => items,
        Value::Object(map) => map
            .into_iter()
            .find_map(|(_, value)| match value {
                Value::Array(items) => Some(items),
                _ => None,
            })
            .ok_or(TableDataError::NotTabular)?,
        _ => return Err(TableDataError::NotTabular),
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map.into_iter().collect()),
            _ => Err(TableDataError::RowNotObject { index }),
        })
        .collect()
}

/// Headers, rows, column keys and per-row hover/click toggles.
#[derive(Debug)]
pub struct TableData {
    pub(crate) headers: Vec<String>,
    pub(crate) rows: Vec<Row>,
    pub(crate) keys: Vec<String>,
    pub(crate) toggles: Vec<Toggle>,
    theme: Arc<dyn Theme>,
}

impl TableData {
    pub(crate) fn new(theme: Arc<dyn Theme>) -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            keys: Vec::new(),
            toggles: Vec::new(),
            theme,
        }
    }

    /// Replaces the rows; keys come from the first row and every row gets a
    /// fresh toggle.
    pub(crate) fn replace_rows(&mut self, rows: Vec<Row>) {
        self.keys = rows.first().map(|row| row.keys().cloned().collect()).unwrap_or_default();
        self.toggles = rows.iter().map(|_| Toggle::new()).collect();
        self.rows = rows;
    }

    pub fn theme(&self) -> &dyn Theme {
        &*self.theme
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn toggles(&self) -> &[Toggle] {
        &self.toggles
    }

    pub fn toggle_mut(&mut self, row: usize) -> Option<&mut Toggle> {
        self.toggles.get_mut(row)
    }

    /// Value at `row` for the key of column `col`, if both exist.
    pub fn value(&self, row: usize, col: usize) -> Option<&Value> {
        let key = self.keys.get(col)?;
        self.rows.get(row)?.get(key)
    }

    /// Display text for a body cell.
    pub fn display(&self, row: usize, col: usize) -> String {
        display_value(self.value(row, col))
    }

    /// Number of equal shares the available width is split into: the header
    /// count, or the key count when no headers are set.
    pub fn column_divisor(&self) -> u16 {
        let count = if self.headers.is_empty() { self.keys.len() } else { self.headers.len() };
        u16::try_from(count).unwrap_or(u16::MAX)
    }
}
