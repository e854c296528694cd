//! UI Components
//!
//! Leptos components rendered into the server's pages.

pub mod notification_list;

pub use notification_list::NotificationList;
