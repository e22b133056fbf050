//! UI theme preference, kept outside the process as a one-line file.
//! This replaces ambient client-local storage with an explicit get/set
//! interface; it plays no part in the generation contract.

use crate::error::{FluxgenError, Result};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than "dark" reads as light, matching the stored
    /// default.
    pub fn parse(value: &str) -> Self {
        if value.trim() == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Theme {
        fs::read_to_string(&self.path)
            .map(|s| Theme::parse(&s))
            .unwrap_or(Theme::Light)
    }

    pub fn save(&self, theme: Theme) -> Result<()> {
        fs::write(&self.path, theme.as_str())
            .map_err(|e| FluxgenError::ConfigError(format!("failed to store theme: {}", e)))
    }

    pub fn toggle(&self) -> Result<Theme> {
        let next = self.load().toggled();
        self.save(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> ThemeStore {
        ThemeStore::new(std::env::temp_dir().join(format!("fluxgen-theme-{}", Uuid::new_v4())))
    }

    #[test]
    fn test_defaults_to_light() {
        let store = temp_store();
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = temp_store();
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Theme::Dark);
    }

    #[test]
    fn test_toggle_flips_persisted_value() {
        let store = temp_store();
        assert_eq!(store.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.toggle().unwrap(), Theme::Light);
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn test_unknown_value_reads_as_light() {
        assert_eq!(Theme::parse("solarized"), Theme::Light);
        assert_eq!(Theme::parse(" dark\n"), Theme::Dark);
    }
}
