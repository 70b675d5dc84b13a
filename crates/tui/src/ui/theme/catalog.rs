use std::sync::Arc;

use super::{
    Ansi256Theme, Ansi256ThemeHighContrast, DraculaTheme, DraculaThemeHighContrast, NordTheme, NordThemeHighContrast, Theme,
};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    pub description: &'static str,
    /// Theme aliases (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    pub is_high_contrast: bool,
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Arc<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Arc<dyn Theme> {
        (self.factory)()
    }
}

/// Ordered list of selectable themes. The first entry is the truecolor default.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "dracula",
        label: "Dracula",
        description: "High-contrast default tuned for dark terminals.",
        aliases: &["dracula"],
        is_high_contrast: false,
        is_ansi_fallback: false,
        factory: || Arc::new(DraculaTheme::new()),
    },
    ThemeDefinition {
        id: "dracula_hc",
        label: "Dracula High Contrast",
        description: "Sharper borders and brighter hints for dim displays.",
        aliases: &["dracula-high-contrast", "dracula-hc", "draculahc"],
        is_high_contrast: true,
        is_ansi_fallback: false,
        factory: || Arc::new(DraculaThemeHighContrast::new()),
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        description: "Calm polar blues with frost focus accents.",
        aliases: &["nord"],
        is_high_contrast: false,
        is_ansi_fallback: false,
        factory: || Arc::new(NordTheme::new()),
    },
    ThemeDefinition {
        id: "nord_hc",
        label: "Nord High Contrast",
        description: "Nord surfaces with stronger borders and body text.",
        aliases: &["nord-high-contrast", "nord-hc", "nordhc"],
        is_high_contrast: true,
        is_ansi_fallback: false,
        factory: || Arc::new(NordThemeHighContrast::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        description: "Indexed fallback for 8-bit terminals.",
        aliases: &["ansi", "256"],
        is_high_contrast: false,
        is_ansi_fallback: true,
        factory: || Arc::new(Ansi256Theme::new()),
    },
    ThemeDefinition {
        id: "ansi256_hc",
        label: "ANSI 256 High Contrast",
        description: "ANSI fallback with brighter borders and hints.",
        aliases: &["ansi256-high-contrast", "ansi256-hc", "ansi256hc"],
        is_high_contrast: true,
        is_ansi_fallback: true,
        factory: || Arc::new(Ansi256ThemeHighContrast::new()),
    },
];

/// Iterate over all available definitions.
pub fn all() -> &'static [ThemeDefinition] {
    THEME_DEFINITIONS
}

/// Locate a definition by id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(name) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    })
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.is_ansi_fallback)
        .unwrap_or(default_truecolor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_case_insensitively() {
        assert_eq!(resolve("Nord-HC").map(|definition| definition.id), Some("nord_hc"));
        assert_eq!(resolve("DRACULA").map(|definition| definition.id), Some("dracula"));
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn defaults_match_capability() {
        assert_eq!(default_truecolor().id, "dracula");
        assert!(default_ansi().is_ansi_fallback);
    }
}
