use dioxus::prelude::*;

/// Theme families shipped with the design system.
///
/// Each family provides a dark variant, a light variant, or both. Families
/// with only one mode resolve to that mode regardless of `is_dark`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeFamily {
    #[default]
    Atrium,
    Harbor,
    /// Dark-only high-contrast theme.
    Onyx,
    /// Light-only paper-like theme.
    Ivory,
}

/// All available theme families in display order.
pub const ALL_FAMILIES: &[ThemeFamily] = &[
    ThemeFamily::Atrium,
    ThemeFamily::Harbor,
    ThemeFamily::Onyx,
    ThemeFamily::Ivory,
];

impl ThemeFamily {
    /// Internal key used for storage and Select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeFamily::Atrium => "atrium",
            ThemeFamily::Harbor => "harbor",
            ThemeFamily::Onyx => "onyx",
            ThemeFamily::Ivory => "ivory",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeFamily::Atrium => "Atrium",
            ThemeFamily::Harbor => "Harbor",
            ThemeFamily::Onyx => "Onyx",
            ThemeFamily::Ivory => "Ivory",
        }
    }

    /// Parse a family key string, falling back to Atrium.
    pub fn from_key(s: &str) -> Self {
        match s {
            "harbor" => ThemeFamily::Harbor,
            "onyx" => ThemeFamily::Onyx,
            "ivory" => ThemeFamily::Ivory,
            _ => ThemeFamily::Atrium,
        }
    }

    /// Whether this family supports dark mode.
    pub fn has_dark(&self) -> bool {
        !matches!(self, ThemeFamily::Ivory)
    }

    /// Whether this family supports light mode.
    pub fn has_light(&self) -> bool {
        !matches!(self, ThemeFamily::Onyx)
    }

    /// Resolve to the CSS `data-theme` attribute value.
    ///
    /// Single-mode families ignore `is_dark` and always return their mode.
    pub fn resolve(&self, is_dark: bool) -> &'static str {
        match (self, is_dark) {
            (ThemeFamily::Atrium, true) => "atrium-dark",
            (ThemeFamily::Atrium, false) => "atrium",
            (ThemeFamily::Harbor, true) => "harbor-dark",
            (ThemeFamily::Harbor, false) => "harbor",
            // Onyx is dark-only
            (ThemeFamily::Onyx, _) => "onyx",
            // Ivory is light-only
            (ThemeFamily::Ivory, _) => "ivory",
        }
    }
}

/// Shared theme state provided as context.
///
/// A mode toggle and a family picker can both read and write these signals.
/// Changes call [`set_theme`] to apply.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub family: Signal<String>,
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    /// Apply the current family + mode to the document.
    pub fn apply(&self) {
        let family = ThemeFamily::from_key(&self.family.read());
        let theme = family.resolve(*self.is_dark.read());
        set_theme(theme);
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted theme from a cookie and applies it to the document
/// root. Call this once in your top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'atrium';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Set the active theme, persisting to a cookie and updating the document.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}
