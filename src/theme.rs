//! Theme Preference
//!
//! Dark is the default look. The only persisted state is whether dark mode
//! is enabled, stored as `"true"`/`"false"` under [`DARK_MODE_KEY`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StoreError;

/// Storage key for the dark-mode flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Class that switches the page to the light palette
pub const LIGHT_MODE_CLASS: &str = "light-mode";

/// String key-value persistence (browser `localStorage` in the page)
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Read the saved preference. Only an explicit `"false"` selects light.
    pub fn load(store: &dyn PreferenceStore) -> Theme {
        match store.get(DARK_MODE_KEY).as_deref() {
            Some("false") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// Whether the document root should carry [`LIGHT_MODE_CLASS`]
    pub fn has_light_class(&self) -> bool {
        *self == Theme::Light
    }

    pub fn flipped(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Flip the theme and persist the new dark-mode flag
    pub fn toggle(self, store: &dyn PreferenceStore) -> Result<Theme, StoreError> {
        let next = self.flipped();
        store.set(DARK_MODE_KEY, if next.is_dark() { "true" } else { "false" })?;
        tracing::debug!(theme = ?next, "theme toggled");
        Ok(next)
    }
}
