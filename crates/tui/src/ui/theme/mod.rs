//! Theme styling for the widgets.
//!
//! Defines the Dracula and Nord palettes, an ANSI 256-color fallback, the
//! semantic roles and size tiers the widgets read, and environment-driven
//! theme selection. Prefer these roles over hard-coded colors.

pub mod ansi256;
pub mod catalog;
pub mod dracula;
pub mod loader;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::{Ansi256Theme, Ansi256ThemeHighContrast};
pub use catalog::ThemeDefinition;
pub use dracula::{DraculaTheme, DraculaThemeHighContrast};
pub use loader::{LoadedTheme, load};
pub use nord::{NordTheme, NordThemeHighContrast};
pub use roles::{ElementSize, Theme, ThemeRoles, ThemeSizes};
