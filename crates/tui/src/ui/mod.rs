//! Immediate-mode widgets and the plumbing they run on.

pub mod components;
pub mod focus;
pub mod host;
pub mod icon;
pub mod theme;
