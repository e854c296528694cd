//! # Calificaciones
//!
//! Page behavior for the grades portal, kept free of any browser dependency
//! so the same rules drive the WASM page crate (`calificaciones-ui`) and the
//! command-line client.
//!
//! ## Modules
//!
//! - [`notifications`]: in-memory notification list with owned dismissal timers
//! - [`table`]: numeric-or-text column sorting for data tables
//! - [`validation`]: required-field gate for form submission
//! - [`theme`]: dark/light preference over a key-value store
//! - [`parallax`]: pointer-driven background layer offsets
//! - [`keyboard`]: global shortcuts
//! - [`format`]: es-MX date and time formatting
//! - [`typewriter`]: character-by-character text reveal
//! - [`grades`]: grade fetch flow over a pluggable transport
//!
//! With the default `native` feature: [`config`], [`logging`] and the
//! reqwest-backed [`client`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use calificaciones::{load_student_grades, HttpGradeClient, Config};
//! use calificaciones::{NotificationKind, Notifier};
//!
//! struct Stderr;
//!
//! impl Notifier for Stderr {
//!     fn notify(&self, kind: NotificationKind, message: &str) {
//!         eprintln!("{} {}", kind.icon(), message);
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = HttpGradeClient::new(&config.api)?;
//!
//!     let grades = load_student_grades(&client, &Stderr, "42").await?;
//!     println!("{} records", grades.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod format;
pub mod grades;
pub mod keyboard;
pub mod notifications;
pub mod parallax;
pub mod table;
pub mod theme;
pub mod typewriter;
pub mod validation;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

pub use error::{FormatError, GradesError, GradesResult, StoreError};

pub use notifications::{
    DismissPolicy, Notification, NotificationCenter, NotificationId, NotificationKind, Phase,
};

pub use grades::{
    fetch_grades, grades_path, load_student_grades, GradeTransport, Grades, HttpReply, Notifier,
    GRADES_FAILED, GRADES_LOADED,
};

pub use table::{compare_cells, locale_compare, sort_rows_by_column};
pub use theme::{MemoryStore, PreferenceStore, Theme};
pub use validation::{validate_required, ValidationReport};
pub use parallax::ParallaxOffset;
pub use keyboard::{KeyChord, Shortcut};
pub use typewriter::Typewriter;

#[cfg(feature = "native")]
pub use client::HttpGradeClient;
#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
