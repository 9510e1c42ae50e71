//! Color theme preference used to pick the auth components' base theme.
//!
//! Reads the stored preference from `localStorage`, falling back to the
//! system `prefers-color-scheme`. Requires a browser environment; server
//! rendering always sees the light theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "discord_clone_theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored preference (`"dark"`, `"light"`, `"system"`).
    ///
    /// `"system"` and unknown values yield `None` so the caller falls back to
    /// the system preference.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Name passed as `Appearance::base_theme`; the light theme is the default
    /// and is left unset.
    pub fn base_theme(self) -> Option<&'static str> {
        match self {
            Self::Dark => Some("dark"),
            Self::Light => None,
        }
    }
}

/// Current theme preference.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(theme) = storage.get_item(STORAGE_KEY).ok().flatten().as_deref().and_then(Theme::parse) {
                return theme;
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}
