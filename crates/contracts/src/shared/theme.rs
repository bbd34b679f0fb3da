//! Light/dark display preference.
//!
//! [`PreferenceStore`] is the single owner of the preference: it reads the
//! persisted value once at startup, pushes every change to a
//! [`PresentationSink`] and writes it back to storage. Storage problems are
//! logged and never reach the caller; the fallback is always [`Theme::Light`].

use serde::{Deserialize, Serialize};

use super::storage::KeyValueStorage;

/// Storage key used when the configuration does not name one.
pub const DEFAULT_THEME_KEY: &str = "app-theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Name used for storage and as the presentation attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Strict parse; unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }
}

/// Receiver of the document-level presentation attribute.
pub trait PresentationSink {
    fn apply(&self, theme: Theme);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreferenceState {
    pub theme: Theme,
    pub is_loading: bool,
}

impl Default for PreferenceState {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            is_loading: true,
        }
    }
}

pub struct PreferenceStore<S, P> {
    storage: S,
    sink: P,
    key: String,
    state: PreferenceState,
}

impl<S: KeyValueStorage, P: PresentationSink> PreferenceStore<S, P> {
    pub fn new(storage: S, sink: P) -> Self {
        Self {
            storage,
            sink,
            key: DEFAULT_THEME_KEY.to_string(),
            state: PreferenceState::default(),
        }
    }

    /// Use a different storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Read the persisted theme, apply it and finish loading.
    pub fn load(&mut self) -> Theme {
        let theme = match self.storage.get(&self.key) {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                log::warn!("Ignoring unrecognized theme '{}' in '{}'", raw, self.key);
                Theme::default()
            }),
            None => Theme::default(),
        };

        self.state = PreferenceState {
            theme,
            is_loading: false,
        };
        self.apply(theme);
        log::debug!("Theme preference loaded: {}", theme.as_str());
        theme
    }

    pub fn apply(&self, theme: Theme) {
        self.sink.apply(theme);
    }

    /// Flip light/dark, apply and persist. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.state.theme.toggled();
        self.set_theme(next);
        next
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.theme = theme;
        self.apply(theme);
        if let Err(e) = self.storage.set(&self.key, theme.as_str()) {
            log::warn!("Theme preference not persisted: {}", e);
        }
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn state(&self) -> PreferenceState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;
    use crate::testing::{FailingStorage, RecordingSink};

    #[test]
    fn test_parse_theme() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse(" dark "), Some(Theme::Dark));
        assert_eq!(Theme::parse("forest"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn test_new_store_is_loading_light() {
        let store = PreferenceStore::new(MemoryStorage::new(), RecordingSink::default());
        assert_eq!(
            store.state(),
            PreferenceState {
                theme: Theme::Light,
                is_loading: true
            }
        );
    }

    #[test]
    fn test_load_defaults_to_light_and_applies() {
        let sink = RecordingSink::default();
        let mut store = PreferenceStore::new(MemoryStorage::new(), sink.clone());

        assert_eq!(store.load(), Theme::Light);
        assert!(!store.state().is_loading);
        assert_eq!(sink.applied(), vec![Theme::Light]);
    }

    #[test]
    fn test_load_unrecognized_value_falls_back_to_light() {
        let storage = MemoryStorage::new();
        storage.set(DEFAULT_THEME_KEY, "sepia").unwrap();
        let mut store = PreferenceStore::new(storage, RecordingSink::default());

        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn test_toggle_applies_and_persists() {
        let storage = MemoryStorage::new();
        let sink = RecordingSink::default();
        let mut store = PreferenceStore::new(storage.clone(), sink.clone());
        store.load();

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(storage.get(DEFAULT_THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(storage.get(DEFAULT_THEME_KEY).as_deref(), Some("light"));
        assert_eq!(sink.applied(), vec![Theme::Light, Theme::Dark, Theme::Light]);
    }

    #[test]
    fn test_toggle_survives_restart() {
        let storage = MemoryStorage::new();
        let mut store = PreferenceStore::new(storage.clone(), RecordingSink::default());
        store.load();
        store.toggle();
        drop(store);

        let sink = RecordingSink::default();
        let mut reloaded = PreferenceStore::new(storage, sink.clone());
        assert_eq!(reloaded.load(), Theme::Dark);
        assert_eq!(sink.applied(), vec![Theme::Dark]);
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        let mut store =
            PreferenceStore::new(storage.clone(), RecordingSink::default()).with_key("rental-theme");
        store.load();
        store.set_theme(Theme::Dark);

        assert_eq!(storage.get("rental-theme").as_deref(), Some("dark"));
        assert_eq!(storage.get(DEFAULT_THEME_KEY), None);
    }

    #[test]
    fn test_unavailable_storage_degrades_silently() {
        let sink = RecordingSink::default();
        let mut store = PreferenceStore::new(FailingStorage, sink.clone());

        assert_eq!(store.load(), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(sink.applied(), vec![Theme::Light, Theme::Dark]);
    }
}
