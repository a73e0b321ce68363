//! Bounded recent-activity windows over the loot log.
//!
//! Both builders expect their inputs most-recent-first (raid days and loot
//! grants sorted by id descending) and return oldest-first windows.
//!
//! # Padding
//!
//! Recent-grants windows always have exactly K columns: missing history is
//! left-padded with empty placeholders, and a subject with no history at
//! all gets a single "None" sentinel and no header row. Attendance windows
//! are never padded; with fewer than K raid days they are just shorter.

use std::collections::BTreeSet;

use loot_models::{Catalog, ItemId, LootEvent, PlayerId, Session, SessionId};
use tracing::{debug, warn};

use crate::config::HistoryConfig;

/// Counterpart text of the sentinel entry.
pub const NONE_MARKER: &str = "None";

/// Whose history to summarize. Selects the axis and the key together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// Grants received by a player; counterparts are items.
    Player(PlayerId),
    /// Grants of an item; counterparts are players.
    Item(ItemId),
}

impl Subject {
    fn matches(&self, event: &LootEvent) -> bool {
        match *self {
            Subject::Player(id) => event.player_id == id,
            Subject::Item(id) => event.item_id == id,
        }
    }

    fn counterpart_name(&self, event: &LootEvent, catalog: &Catalog) -> Option<String> {
        match self {
            Subject::Player(_) => catalog.item_name(event.item_id),
            Subject::Item(_) => catalog.player_name(event.player_id),
        }
        .map(str::to_string)
    }
}

/// One column of a recent-grants window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Raid day name, used as the column header.
    pub session_name: String,
    /// Item (for a player) or player (for an item) name.
    pub counterpart_name: String,
}

impl HistoryEntry {
    fn sentinel() -> Self {
        Self {
            session_name: String::new(),
            counterpart_name: NONE_MARKER.to_string(),
        }
    }
}

/// A recent-grants window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryWindow {
    /// Columns, oldest first.
    pub entries: Vec<HistoryEntry>,
    /// False for the sentinel-only window; no header row should be shown.
    pub has_header: bool,
}

impl HistoryWindow {
    fn sentinel() -> Self {
        Self {
            entries: vec![HistoryEntry::sentinel()],
            has_header: false,
        }
    }

    /// Returns true if the subject had no history at all.
    pub fn is_sentinel(&self) -> bool {
        !self.has_header
    }

    /// Header cells (raid day names), or nothing for the sentinel window.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|_| self.has_header)
            .map(|entry| entry.session_name.as_str())
    }
}

/// One attendance column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceColumn {
    /// Raid day name.
    pub session_name: String,
    /// Whether the player attended.
    pub attended: bool,
}

/// The last `k` grants for `subject`, oldest first, padded to `k` columns.
///
/// `log` and `sessions` must be most-recent-first. Unknown raid days or
/// counterparts resolve to an empty name.
pub fn recent_by_subject(
    log: &[LootEvent],
    subject: Subject,
    sessions: &[Session],
    catalog: &Catalog,
    k: usize,
) -> HistoryWindow {
    let mut kept: Vec<&LootEvent> = log.iter().filter(|e| subject.matches(e)).take(k).collect();

    debug!(subject = ?subject, matches = kept.len(), window = k, "building recent grants window");

    if kept.is_empty() {
        return HistoryWindow::sentinel();
    }
    kept.reverse();

    let mut entries = vec![HistoryEntry::default(); k - kept.len()];
    entries.extend(kept.into_iter().map(|event| HistoryEntry {
        session_name: session_name(sessions, event.session_id),
        counterpart_name: subject.counterpart_name(event, catalog).unwrap_or_else(|| {
            warn!(
                event_id = %event.id,
                subject = ?subject,
                "loot event references unknown counterpart"
            );
            String::new()
        }),
    }));

    HistoryWindow {
        entries,
        has_header: true,
    }
}

/// Attendance flags for the `k` most recent raid days, oldest first.
///
/// `sessions` must be most-recent-first. Never padded.
pub fn recent_attendance(
    sessions: &[Session],
    attended: &BTreeSet<SessionId>,
    k: usize,
) -> Vec<bool> {
    recent_sessions(sessions, k)
        .map(|session| attended.contains(&session.id))
        .collect()
}

fn recent_sessions(sessions: &[Session], k: usize) -> impl Iterator<Item = &Session> {
    sessions[..k.min(sessions.len())].iter().rev()
}

fn session_name(sessions: &[Session], id: SessionId) -> String {
    match sessions.iter().find(|s| s.id == id) {
        Some(session) => session.name.clone(),
        None => {
            warn!(session_id = %id, "loot event references unknown raid day");
            String::new()
        }
    }
}

/// Builds history windows over one snapshot of raid days and names.
pub struct HistoryWindowBuilder<'a> {
    sessions: &'a [Session],
    catalog: &'a Catalog,
    config: HistoryConfig,
}

impl<'a> HistoryWindowBuilder<'a> {
    /// Creates a builder with default window sizes.
    pub fn new(sessions: &'a [Session], catalog: &'a Catalog) -> Self {
        Self {
            sessions,
            catalog,
            config: HistoryConfig::default(),
        }
    }

    /// Overrides the window sizes.
    pub fn with_config(mut self, config: HistoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Recent grants for a player or item. See [`recent_by_subject`].
    pub fn recent_by_subject(&self, log: &[LootEvent], subject: Subject) -> HistoryWindow {
        recent_by_subject(log, subject, self.sessions, self.catalog, self.config.recent_grants)
    }

    /// Attendance flags. See [`recent_attendance`].
    pub fn recent_attendance(&self, attended: &BTreeSet<SessionId>) -> Vec<bool> {
        recent_attendance(self.sessions, attended, self.config.recent_attendance)
    }

    /// Attendance flags paired with raid day names.
    pub fn attendance_columns(&self, attended: &BTreeSet<SessionId>) -> Vec<AttendanceColumn> {
        recent_sessions(self.sessions, self.config.recent_attendance)
            .map(|session| AttendanceColumn {
                session_name: session.name.clone(),
                attended: attended.contains(&session.id),
            })
            .collect()
    }
}
