//! # Gridfield widgets
//!
//! Two immediate-mode widgets for ratatui terminals, built on a small
//! retained-event host:
//!
//! - [`InputField`]: a bordered text field that restyles itself for hover and
//!   focus, masks passwords behind a reveal icon, and carries optional leading
//!   and trailing decorations.
//! - [`GridTable`]: a table of JSON rows whose row height is measured from the
//!   cells themselves and whose columns split the available width evenly.
//!   Header and body cells are drawn by replaceable callbacks.
//!
//! ## Frames
//!
//! Widgets are plain structs laid out once per frame through a
//! [`FrameContext`]. Hit regions registered while drawing frame N route the
//! pointer and key events pushed before frame N + 1, so state such as hover
//! and focus always reflects the previous layout.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use gridfield_tui::{Host, InputField, theme};
//! use ratatui::{buffer::Buffer, layout::Rect};
//!
//! let loaded = theme::load(None);
//! let mut field = InputField::new(Arc::clone(&loaded.theme), "Email", None);
//! let mut host = Host::new();
//! let mut buffer = Buffer::empty(Rect::new(0, 0, 40, 3));
//! host.frame(&mut buffer, |ctx| field.layout(ctx));
//! ```

pub mod ui;

pub use ui::{
    components::{
        Component, GridTable, InputField, VisualState, stack,
        table::{Row, TableData, TableDataError},
    },
    host::{
        Host,
        frame::{Constraints, FrameContext},
    },
    icon::Icon,
    theme,
};
