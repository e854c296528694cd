//! Notification Model
//!
//! In-memory view of the notifications currently on screen. The page crate
//! renders from this list instead of querying the document for state.
//!
//! Each entry may own a timer handle `H`. Removing an entry drops its handle,
//! so handle types that cancel on drop (gloo's `Timeout`) never fire against
//! a notification that is already gone.

use std::fmt;

/// Visual category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationKind {
    Success,
    Danger,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Success,
        NotificationKind::Danger,
        NotificationKind::Warning,
        NotificationKind::Info,
    ];

    /// Lowercase name used in CSS classes and by markup callers
    pub fn name(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Danger => "danger",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Danger => "✗",
            NotificationKind::Warning => "⚠",
            NotificationKind::Info => "ℹ",
        }
    }

    /// Class list for the notification element
    pub fn css_class(&self) -> String {
        format!("flash-message flash-{}", self.name())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Like [`from_name`](Self::from_name) but unknown names become `Info`
    pub fn parse_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Two-phase dismissal: fade out after `display_ms`, remove `fade_ms` later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissPolicy {
    pub display_ms: u32,
    pub fade_ms: u32,
}

impl DismissPolicy {
    /// Notifications raised by page code
    pub const NOTIFICATION: DismissPolicy = DismissPolicy {
        display_ms: 3000,
        fade_ms: 300,
    };

    /// Flash messages rendered by the server
    pub const FLASH: DismissPolicy = DismissPolicy {
        display_ms: 5000,
        fade_ms: 300,
    };

    /// Delay from creation until the fade starts
    pub fn fade_at_ms(&self) -> u32 {
        self.display_ms
    }

    /// Delay from creation until removal
    pub fn remove_at_ms(&self) -> u32 {
        self.display_ms + self.fade_ms
    }
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self::NOTIFICATION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Fading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub phase: Phase,
}

impl Notification {
    pub fn is_fading(&self) -> bool {
        self.phase == Phase::Fading
    }
}

struct Entry<H> {
    notification: Notification,
    timer: Option<H>,
}

/// Ordered list of live notifications, oldest first
pub struct NotificationCenter<H = ()> {
    entries: Vec<Entry<H>>,
    next_id: u64,
}

impl<H> Default for NotificationCenter<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> NotificationCenter<H> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a visible notification and return its id
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let notification = Notification {
            id,
            kind,
            message: message.into(),
            phase: Phase::Visible,
        };
        tracing::debug!(id = id.value(), kind = %kind, "notification shown");

        self.entries.push(Entry {
            notification,
            timer: None,
        });
        id
    }

    /// Give a notification ownership of its dismissal timer.
    ///
    /// Returns the handle back if the notification no longer exists.
    pub fn attach_timer(&mut self, id: NotificationId, handle: H) -> Option<H> {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.timer = Some(handle);
                None
            }
            None => Some(handle),
        }
    }

    /// Move a notification into its fade-out phase
    pub fn begin_fade(&mut self, id: NotificationId) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.notification.phase = Phase::Fading;
                true
            }
            None => false,
        }
    }

    /// Remove a notification immediately, dropping (cancelling) its timer
    pub fn close(&mut self, id: NotificationId) -> Option<Notification> {
        self.take(id).map(|(notification, _timer)| notification)
    }

    /// Remove a notification and hand its timer back to the caller.
    ///
    /// Used from inside the timer's own callback, where dropping the handle
    /// synchronously is not allowed.
    pub fn take(&mut self, id: NotificationId) -> Option<(Notification, Option<H>)> {
        let idx = self.entries.iter().position(|e| e.notification.id == id)?;
        let entry = self.entries.remove(idx);
        tracing::debug!(id = id.value(), "notification removed");
        Some((entry.notification, entry.timer))
    }

    /// Remove everything at once, cancelling all pending timers
    pub fn dismiss_all(&mut self) -> Vec<NotificationId> {
        self.entries
            .drain(..)
            .map(|entry| entry.notification.id)
            .collect()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries
            .iter()
            .map(|e| &e.notification)
            .find(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|e| &e.notification)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owned copy of the current list, for rendering
    pub fn snapshot(&self) -> Vec<Notification> {
        self.iter().cloned().collect()
    }

    pub fn has_timer(&self, id: NotificationId) -> bool {
        self.entries
            .iter()
            .any(|e| e.notification.id == id && e.timer.is_some())
    }

    fn entry_mut(&mut self, id: NotificationId) -> Option<&mut Entry<H>> {
        self.entries.iter_mut().find(|e| e.notification.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Handle that records when it is dropped
    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_kind_names_and_icons() {
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
        assert_eq!(NotificationKind::Success.icon(), "✓");
        assert_eq!(NotificationKind::Danger.icon(), "✗");
        assert_eq!(NotificationKind::Warning.icon(), "⚠");
        assert_eq!(NotificationKind::Info.icon(), "ℹ");
        assert_eq!(
            NotificationKind::Danger.css_class(),
            "flash-message flash-danger"
        );
        assert_eq!(
            NotificationKind::from_name("WARNING"),
            Some(NotificationKind::Warning)
        );
        assert_eq!(NotificationKind::from_name("error"), None);
        assert_eq!(
            NotificationKind::parse_or_default("error"),
            NotificationKind::Info
        );
    }

    #[test]
    fn test_dismiss_timings() {
        assert_eq!(DismissPolicy::NOTIFICATION.fade_at_ms(), 3000);
        assert_eq!(DismissPolicy::NOTIFICATION.remove_at_ms(), 3300);
        assert_eq!(DismissPolicy::FLASH.fade_at_ms(), 5000);
        assert_eq!(DismissPolicy::FLASH.remove_at_ms(), 5300);
    }

    #[test]
    fn test_push_one_per_kind() {
        let mut center: NotificationCenter = NotificationCenter::new();

        for kind in NotificationKind::ALL {
            let before = center.len();
            let id = center.push(kind, format!("mensaje {}", kind));
            assert_eq!(center.len(), before + 1);

            let shown = center.get(id).unwrap();
            assert_eq!(shown.kind, kind);
            assert_eq!(shown.message, format!("mensaje {}", kind));
            assert_eq!(shown.phase, Phase::Visible);
        }
    }

    #[test]
    fn test_two_phase_dismissal() {
        let mut center: NotificationCenter = NotificationCenter::new();
        let id = center.push(NotificationKind::Info, "hola");

        assert!(center.begin_fade(id));
        assert!(center.get(id).unwrap().is_fading());

        let (removed, _) = center.take(id).unwrap();
        assert_eq!(removed.message, "hola");
        assert!(center.is_empty());

        // A late timer against a removed notification is a no-op
        assert!(!center.begin_fade(id));
        assert!(center.take(id).is_none());
    }

    #[test]
    fn test_manual_close_cancels_timer() {
        let mut center = NotificationCenter::new();
        let dropped = Rc::new(Cell::new(false));

        let id = center.push(NotificationKind::Success, "Copiado");
        assert!(center.attach_timer(id, DropFlag(Rc::clone(&dropped))).is_none());
        assert!(center.has_timer(id));
        assert!(!dropped.get());

        center.close(id);
        assert!(dropped.get());
    }

    #[test]
    fn test_attach_timer_to_missing_notification() {
        let mut center = NotificationCenter::new();
        let dropped = Rc::new(Cell::new(false));

        let id = center.push(NotificationKind::Info, "x");
        center.close(id);

        let returned = center.attach_timer(id, DropFlag(Rc::clone(&dropped)));
        assert!(returned.is_some());
        assert!(!dropped.get());
    }

    #[test]
    fn test_dismiss_all_cancels_every_timer() {
        let mut center = NotificationCenter::new();
        let flags: Vec<_> = (0..3).map(|_| Rc::new(Cell::new(false))).collect();

        for flag in &flags {
            let id = center.push(NotificationKind::Warning, "aviso");
            center.attach_timer(id, DropFlag(Rc::clone(flag)));
        }
        // One already mid-fade
        let first = center.iter().next().unwrap().id;
        center.begin_fade(first);

        let removed = center.dismiss_all();
        assert_eq!(removed.len(), 3);
        assert!(center.is_empty());
        assert!(flags.iter().all(|f| f.get()));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut center: NotificationCenter = NotificationCenter::new();
        let a = center.push(NotificationKind::Info, "a");
        center.close(a);
        let b = center.push(NotificationKind::Info, "b");
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let mut center: NotificationCenter = NotificationCenter::new();
        center.push(NotificationKind::Info, "uno");
        center.push(NotificationKind::Info, "dos");
        center.push(NotificationKind::Info, "tres");

        let messages: Vec<_> = center
            .snapshot()
            .into_iter()
            .map(|n| n.message)
            .collect();
        assert_eq!(messages, vec!["uno", "dos", "tres"]);
    }
}
