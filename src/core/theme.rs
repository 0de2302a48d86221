use crate::core::KeyValueStore;
use crate::utils::error::Result;
use std::fmt;
use std::str::FromStr;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Landing-page theme, persisted under [`THEME_KEY`].
pub struct ThemePreference<S: KeyValueStore> {
    store: S,
    current: Theme,
}

impl<S: KeyValueStore> ThemePreference<S> {
    /// Uses the stored theme when there is a valid one, else `preferred`
    /// (the system colour scheme), and writes the result back.
    pub fn load(store: S, preferred: Theme) -> Result<Self> {
        let current = match store.get(THEME_KEY)? {
            Some(value) => value.parse::<Theme>().unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored theme: {}", e);
                preferred
            }),
            None => preferred,
        };

        let mut preference = Self { store, current };
        preference.set(current)?;
        Ok(preference)
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())?;
        self.current = theme;
        Ok(())
    }

    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current.toggled();
        self.set(next)?;
        tracing::debug!("Theme switched to {}", next);
        Ok(next)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
