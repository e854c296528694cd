//! Dark/light theme on the document root, persisted in `localStorage`.

use web_sys::Storage;

use calificaciones::theme::{PreferenceStore, Theme, LIGHT_MODE_CLASS};
use calificaciones::StoreError;

use crate::dom;

/// `window.localStorage` as a preference store
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        Self {
            storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage".to_string()))?;

        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            error: format!("{:?}", e),
        })
    }
}

pub fn apply_saved_theme() {
    apply_theme(Theme::load(&LocalStorage::new()));
}

pub fn apply_theme(theme: Theme) {
    let root = dom::document().ok().and_then(|doc| doc.document_element());
    if let Some(root) = root {
        let _ = root
            .class_list()
            .toggle_with_force(LIGHT_MODE_CLASS, theme.has_light_class());
    }
}

/// Theme currently shown, read from the root class
pub fn current_theme() -> Theme {
    let light = dom::document()
        .ok()
        .and_then(|doc| doc.document_element())
        .map(|root| root.class_list().contains(LIGHT_MODE_CLASS))
        .unwrap_or(false);

    if light {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// Flip the theme. The page still switches when the preference can't be saved.
pub fn toggle_theme() -> Theme {
    let current = current_theme();
    let next = match current.toggle(&LocalStorage::new()) {
        Ok(next) => next,
        Err(e) => {
            web_sys::console::warn_1(&format!("Theme preference not saved: {}", e).into());
            current.flipped()
        }
    };
    apply_theme(next);
    next
}
