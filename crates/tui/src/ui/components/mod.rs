//! Widgets: the focus-styled input field and the grid table.

pub mod common;
pub mod component;
pub mod input;
pub mod table;

pub use component::{Component, stack};
pub use input::{InputField, VisualState};
pub use table::GridTable;
