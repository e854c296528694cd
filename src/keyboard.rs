//! Global keyboard shortcuts.

/// Search box focused by Ctrl/Cmd + K
pub const SEARCH_SELECTOR: &str = "input[type=\"search\"]";

/// The parts of a key event the shortcuts look at
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Focus the search input, suppressing the browser's own binding
    FocusSearch,
    /// Remove every notification at once, without fading
    DismissNotifications,
}

impl Shortcut {
    pub fn from_chord(chord: &KeyChord) -> Option<Shortcut> {
        if (chord.ctrl || chord.meta) && chord.key == "k" {
            return Some(Shortcut::FocusSearch);
        }
        if chord.key == "Escape" {
            return Some(Shortcut::DismissNotifications);
        }
        None
    }

    pub fn prevents_default(&self) -> bool {
        matches!(self, Shortcut::FocusSearch)
    }
}
