//! Window sizes for history views.
//!
//! # Environment Variables
//!
//! - `LOOT_RECENT_GRANTS`: columns in a recent-grants window (default 6)
//! - `LOOT_RECENT_ATTENDANCE`: raid days in an attendance window (default 12)
//!
//! Values that are not integers in `1..=MAX_WINDOW` are ignored with a warning.

use tracing::warn;

/// Environment variable for the recent-grants window size.
pub const RECENT_GRANTS_ENV: &str = "LOOT_RECENT_GRANTS";

/// Environment variable for the attendance window size.
pub const RECENT_ATTENDANCE_ENV: &str = "LOOT_RECENT_ATTENDANCE";

/// Default number of grants shown per player or item.
pub const DEFAULT_RECENT_GRANTS: usize = 6;

/// Default number of raid days shown in attendance.
pub const DEFAULT_RECENT_ATTENDANCE: usize = 12;

/// Largest accepted window size.
pub const MAX_WINDOW: usize = 100;

/// Sizes of the history windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Fixed column count of recent-grants windows.
    pub recent_grants: usize,
    /// Maximum length of attendance windows.
    pub recent_attendance: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            recent_grants: DEFAULT_RECENT_GRANTS,
            recent_attendance: DEFAULT_RECENT_ATTENDANCE,
        }
    }
}

impl HistoryConfig {
    /// Reads window sizes from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads window sizes through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            recent_grants: parse_window(
                RECENT_GRANTS_ENV,
                lookup(RECENT_GRANTS_ENV),
                DEFAULT_RECENT_GRANTS,
            ),
            recent_attendance: parse_window(
                RECENT_ATTENDANCE_ENV,
                lookup(RECENT_ATTENDANCE_ENV),
                DEFAULT_RECENT_ATTENDANCE,
            ),
        }
    }
}

fn parse_window(name: &str, raw: Option<String>, default: usize) -> usize {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<usize>() {
        Ok(size) if (1..=MAX_WINDOW).contains(&size) => size,
        _ => {
            warn!(var = name, value = %raw, default, "ignoring invalid window size");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = HistoryConfig::from_lookup(lookup(&[]));
        assert_eq!(config, HistoryConfig::default());
        assert_eq!(config.recent_grants, 6);
        assert_eq!(config.recent_attendance, 12);
    }

    #[test]
    fn test_overrides() {
        let config = HistoryConfig::from_lookup(lookup(&[
            (RECENT_GRANTS_ENV, "8"),
            (RECENT_ATTENDANCE_ENV, " 20 "),
        ]));
        assert_eq!(config.recent_grants, 8);
        assert_eq!(config.recent_attendance, 20);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = HistoryConfig::from_lookup(lookup(&[
            (RECENT_GRANTS_ENV, "0"),
            (RECENT_ATTENDANCE_ENV, "lots"),
        ]));
        assert_eq!(config, HistoryConfig::default());
    }

    #[test]
    fn test_oversized_values_fall_back() {
        let huge = usize::MAX.to_string();
        let config = HistoryConfig::from_lookup(lookup(&[
            (RECENT_GRANTS_ENV, huge.as_str()),
            (RECENT_ATTENDANCE_ENV, "101"),
        ]));
        assert_eq!(config, HistoryConfig::default());

        let config = HistoryConfig::from_lookup(lookup(&[(RECENT_GRANTS_ENV, "100")]));
        assert_eq!(config.recent_grants, MAX_WINDOW);
    }
}
