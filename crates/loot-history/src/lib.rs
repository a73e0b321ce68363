//! Recent-activity views over the loot log.
//!
//! - **window**: recent grants per player or item, attendance per player
//! - **config**: window sizes, overridable from the environment
//!
//! # Example
//!
//! ```no_run
//! use loot_history::{HistoryConfig, HistoryWindowBuilder, Subject};
//! use loot_models::{Catalog, PlayerId};
//!
//! # use loot_models::{LootEvent, Session};
//! # fn show(sessions: &[Session], log: &[LootEvent], catalog: &Catalog) {
//! let builder = HistoryWindowBuilder::new(sessions, catalog)
//!     .with_config(HistoryConfig::from_env());
//!
//! let window = builder.recent_by_subject(log, Subject::Player(PlayerId::new(1)));
//! if window.has_header {
//!     for header in window.headers() {
//!         println!("{header}");
//!     }
//! }
//! # }
//! ```

pub mod config;
pub mod window;

pub use config::{
    HistoryConfig, DEFAULT_RECENT_ATTENDANCE, DEFAULT_RECENT_GRANTS, MAX_WINDOW,
    RECENT_ATTENDANCE_ENV, RECENT_GRANTS_ENV,
};
pub use window::{
    recent_attendance, recent_by_subject, AttendanceColumn, HistoryEntry, HistoryWindow,
    HistoryWindowBuilder, Subject, NONE_MARKER,
};
