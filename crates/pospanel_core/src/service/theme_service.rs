//! Theme preference use-case service.
//!
//! # Responsibility
//! - Resolve the effective theme from stored preference and system hint.
//! - Persist explicit choices and toggles.
//!
//! # Invariants
//! - A stored preference always wins over the system hint.
//! - `stored_theme`/`resolve` report unrecognized stored values as errors.
//! - `toggle`, `set` and `reset` always overwrite or clear such values.

use crate::model::theme::ThemeMode;
use crate::repo::settings_repo::{RepoError, SettingsRepository};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Settings key holding the persisted theme label.
pub const THEME_SETTING_KEY: &str = "pdpp-theme";

pub type ThemeResult<T> = Result<T, ThemeServiceError>;

#[derive(Debug)]
pub enum ThemeServiceError {
    Repo(RepoError),
    InvalidStoredTheme(String),
}

impl Display for ThemeServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::InvalidStoredTheme(value) => {
                write!(f, "stored theme `{value}` is not one of light|dark")
            }
        }
    }
}

impl Error for ThemeServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::InvalidStoredTheme(_) => None,
        }
    }
}

impl From<RepoError> for ThemeServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service for the dashboard theme preference.
pub struct ThemeService<R: SettingsRepository> {
    repo: R,
}

impl<R: SettingsRepository> ThemeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the persisted theme, if any.
    pub fn stored_theme(&self) -> ThemeResult<Option<ThemeMode>> {
        match self.repo.get_setting(THEME_SETTING_KEY)? {
            None => Ok(None),
            Some(raw) => ThemeMode::parse(raw.as_str())
                .map(Some)
                .ok_or(ThemeServiceError::InvalidStoredTheme(raw)),
        }
    }

    /// Resolves the effective theme.
    ///
    /// # Contract
    /// - Stored preference present: returns it.
    /// - Nothing stored: follows `prefers_dark`.
    pub fn resolve(&self, prefers_dark: bool) -> ThemeResult<ThemeMode> {
        Ok(self
            .stored_theme()?
            .unwrap_or_else(|| ThemeMode::from_system(prefers_dark)))
    }

    /// Persists an explicit theme choice.
    pub fn set(&self, mode: ThemeMode) -> ThemeResult<()> {
        self.repo.put_setting(THEME_SETTING_KEY, mode.as_str())?;
        info!("event=theme_set module=service status=ok theme={mode}");
        Ok(())
    }

    /// Flips the effective theme and persists the result.
    ///
    /// An unrecognized stored value counts as "nothing stored", so the flip
    /// starts from `prefers_dark` and replaces the bad value.
    pub fn toggle(&self, prefers_dark: bool) -> ThemeResult<ThemeMode> {
        let current = match self.stored_theme() {
            Ok(stored) => stored.unwrap_or_else(|| ThemeMode::from_system(prefers_dark)),
            Err(ThemeServiceError::InvalidStoredTheme(raw)) => {
                warn!(
                    "event=theme_toggle module=service status=recovered invalid_value_len={}",
                    raw.len()
                );
                ThemeMode::from_system(prefers_dark)
            }
            Err(err) => return Err(err),
        };
        let next = current.toggled();
        self.repo.put_setting(THEME_SETTING_KEY, next.as_str())?;
        info!("event=theme_toggle module=service status=ok theme={next}");
        Ok(next)
    }

    /// Drops the stored preference so the system hint applies again.
    pub fn reset(&self) -> ThemeResult<bool> {
        Ok(self.repo.delete_setting(THEME_SETTING_KEY)?)
    }
}
