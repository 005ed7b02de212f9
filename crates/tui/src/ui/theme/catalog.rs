use super::{Ansi256Theme, DraculaTheme, NordTheme, Theme};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier accepted by `--theme` and `TUI_THEME`.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Alternate spellings that resolve to this definition.
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

const DRACULA: ThemeDefinition = ThemeDefinition {
    id: "dracula",
    label: "Dracula",
    aliases: &["dracula"],
    is_ansi_fallback: false,
    factory: || Box::new(DraculaTheme::new()),
};

const NORD: ThemeDefinition = ThemeDefinition {
    id: "nord",
    label: "Nord",
    aliases: &["nord", "polar"],
    is_ansi_fallback: false,
    factory: || Box::new(NordTheme::new()),
};

const ANSI256: ThemeDefinition = ThemeDefinition {
    id: "ansi256",
    label: "ANSI 256",
    aliases: &["ansi256", "ansi", "256"],
    is_ansi_fallback: true,
    factory: || Box::new(Ansi256Theme::new()),
};

/// Ordered list of selectable themes.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[DRACULA, NORD, ANSI256];

/// Locate a definition by id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(name) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    })
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &DRACULA
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    &ANSI256
}
