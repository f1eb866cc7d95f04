//! Per-file task status projection.
//!
//! A pure mapping from a task's processing status (plus an independent
//! skip signal) to the glyph a task row renders. No state is owned here.

use serde::Deserialize;

/// Processing status of one file-level task.
///
/// Unrecognized status strings fall back to [`TaskStatus::Pending`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TaskStatus {
    #[default]
    Pending,
    Loading,
    Done,
    Error,
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl TaskStatus {
    /// Parse a raw status value, treating anything unrecognized as pending.
    pub fn parse(value: &str) -> Self {
        match value {
            "loading" => Self::Loading,
            "done" => Self::Done,
            "error" => Self::Error,
            _ => Self::Pending,
        }
    }
}

/// Glyph shown for a task row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusGlyph {
    /// Task was skipped and can be redone.
    Redo,
    /// Task is in flight.
    Spinner,
    /// Task finished successfully.
    Check,
    /// Task failed.
    Cross,
    /// Task is idle or pending.
    Pause,
}

impl StatusGlyph {
    /// Project a status and skip flag to a glyph. `skip` wins over any
    /// status value.
    pub fn for_task(status: TaskStatus, skip: bool) -> Self {
        if skip {
            return Self::Redo;
        }
        match status {
            TaskStatus::Loading => Self::Spinner,
            TaskStatus::Done => Self::Check,
            TaskStatus::Error => Self::Cross,
            TaskStatus::Pending => Self::Pause,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Redo => '↻',
            Self::Spinner => '⠋',
            Self::Check => '✔',
            Self::Cross => '✘',
            Self::Pause => '⏸',
        }
    }
}

impl std::fmt::Display for StatusGlyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_wins_over_every_status() {
        for status in [
            TaskStatus::Pending,
            TaskStatus::Loading,
            TaskStatus::Done,
            TaskStatus::Error,
        ] {
            assert_eq!(StatusGlyph::for_task(status, true), StatusGlyph::Redo);
        }
    }

    #[test]
    fn statuses_map_to_their_glyphs() {
        assert_eq!(
            StatusGlyph::for_task(TaskStatus::Loading, false),
            StatusGlyph::Spinner
        );
        assert_eq!(
            StatusGlyph::for_task(TaskStatus::Done, false),
            StatusGlyph::Check
        );
        assert_eq!(
            StatusGlyph::for_task(TaskStatus::Error, false),
            StatusGlyph::Cross
        );
        assert_eq!(
            StatusGlyph::for_task(TaskStatus::Pending, false),
            StatusGlyph::Pause
        );
    }

    #[test]
    fn unrecognized_statuses_are_pending() {
        assert_eq!(TaskStatus::parse("loading"), TaskStatus::Loading);
        assert_eq!(TaskStatus::parse("queued"), TaskStatus::Pending);
        assert_eq!(TaskStatus::parse(""), TaskStatus::Pending);

        let parsed: TaskStatus = serde_json::from_str(r#""done""#).unwrap();
        assert_eq!(parsed, TaskStatus::Done);
        let unknown: TaskStatus = serde_json::from_str(r#""whatever""#).unwrap();
        assert_eq!(unknown, TaskStatus::Pending);
    }
}
