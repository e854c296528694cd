//! State Management
//!
//! Page-wide state that outlives any single event handler.

pub mod notifications;

pub use notifications::{notifications, NotificationService};
