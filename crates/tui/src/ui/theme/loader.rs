//! Theme selection and terminal capability detection.

use std::{env, sync::Arc};

use tracing::debug;

use crate::ui::theme::{Theme, ThemeDefinition, catalog};

pub const THEME_ENV: &str = "GRIDFIELD_THEME";
pub const COLOR_MODE_ENV: &str = "GRIDFIELD_COLOR_MODE";
pub const FORCE_TRUECOLOR_ENV: &str = "GRIDFIELD_FORCE_TRUECOLOR";

/// Loaded theme plus metadata about which definition produced it.
#[derive(Debug, Clone)]
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Arc<dyn Theme>,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition) -> Self {
        debug!(theme = definition.id, "theme selected");
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme from explicit overrides, caller preference, and terminal capability.
///
/// ANSI-only terminals always get the indexed fallback palette. Otherwise
/// `GRIDFIELD_THEME` wins over `preferred_theme`, which wins over the default.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    if detect_color_capability() == ColorCapability::Ansi256 {
        debug!("ANSI-only terminal detected; ignoring theme overrides and forcing fallback palette.");
        return LoadedTheme::from_definition(catalog::default_ansi());
    }

    if let Ok(theme_name) = env::var(THEME_ENV)
        && let Some(definition) = catalog::resolve(theme_name.trim())
    {
        return LoadedTheme::from_definition(definition);
    }

    if let Some(name) = preferred_theme
        && let Some(definition) = catalog::resolve(name.trim())
    {
        return LoadedTheme::from_definition(definition);
    }

    LoadedTheme::from_definition(catalog::default_truecolor())
}

pub fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var(COLOR_MODE_ENV).ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    if env::var(FORCE_TRUECOLOR_ENV).is_ok_and(|value| is_truthy(value.trim())) {
        return ColorCapability::Truecolor;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enable" | "enabled"
    )
}
