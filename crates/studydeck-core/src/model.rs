//! The persisted study document.
//!
//! Field names follow the JSON shape of exported documents (`dailyGoal`,
//! `savedTests`), so older exports import cleanly. Every field defaults, which
//! is how documents missing a section are filled in on load.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Root document: everything the dashboard knows about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub notes: Vec<Note>,
    pub progress: Progress,
    pub pomodoro: PomodoroCounter,
    pub flashcards: Vec<Flashcard>,
    pub reminders: Vec<Reminder>,
    #[serde(rename = "savedTests")]
    pub saved_tests: Vec<Test>,
    pub mastery: Vec<MasteryEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    pub total: u32,
    pub done: u32,
    pub streak: u32,
    #[serde(rename = "dailyGoal")]
    pub daily_goal: u32,
    /// ISO `YYYY-MM-DD` dates on which the daily goal was marked done.
    pub history: Vec<String>,
}

impl Progress {
    /// Chapters done as a whole percentage of total; 0 when total is unset.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.done as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn is_marked(&self, date: &str) -> bool {
        self.history.iter().any(|d| d == date)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PomodoroCounter {
    pub completed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
    /// Epoch milliseconds.
    pub created: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub title: String,
    /// Local datetime as typed by the user, e.g. `2026-10-20T09:00`.
    pub when: String,
}

/// Where a reminder stands relative to a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderStatus {
    PastDue,
    DaysLeft(i64),
    /// `when` is not a datetime we can read.
    Unknown,
}

impl Reminder {
    pub fn due_at(&self) -> Option<DateTime<Local>> {
        let when = self.when.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(when) {
            return Some(dt.with_timezone(&Local));
        }
        let naive = NaiveDateTime::parse_from_str(when, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(when, "%Y-%m-%dT%H:%M:%S"))
            .or_else(|_| NaiveDateTime::parse_from_str(when, "%Y-%m-%d %H:%M"))
            .or_else(|_| {
                chrono::NaiveDate::parse_from_str(when, "%Y-%m-%d")
                    .map(|d| d.and_hms_opt(0, 0, 0).unwrap_or_default())
            })
            .ok()?;
        Local.from_local_datetime(&naive).earliest()
    }

    /// Whole days left, rounded up, or `PastDue`.
    pub fn status(&self, now: DateTime<Local>) -> ReminderStatus {
        let Some(due) = self.due_at() else {
            return ReminderStatus::Unknown;
        };
        let diff_ms = (due - now).num_milliseconds();
        if diff_ms < 0 {
            return ReminderStatus::PastDue;
        }
        const DAY_MS: i64 = 24 * 60 * 60 * 1000;
        ReminderStatus::DaysLeft((diff_ms + DAY_MS - 1) / DAY_MS)
    }
}

/// A saved mock test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    pub questions: Vec<Mcq>,
    /// Epoch milliseconds.
    pub created: i64,
}

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mcq {
    pub q: String,
    pub opts: Vec<String>,
    pub ans: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
}

impl Mcq {
    pub fn is_correct(&self) -> bool {
        self.selected
            .as_deref()
            .is_some_and(|s| s.to_lowercase() == self.ans.to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryEntry {
    pub topic: String,
    pub score: u8,
    /// Locale date string, `D/M/YYYY`.
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_are_defaulted() {
        let state: AppState =
            serde_json::from_str(r#"{"progress":{"total":3},"pomodoro":{}}"#).unwrap();
        assert_eq!(state.progress.total, 3);
        assert_eq!(state.progress.streak, 0);
        assert!(state.progress.history.is_empty());
        assert_eq!(state.pomodoro.completed, 0);
        assert!(state.mastery.is_empty());
    }

    #[test]
    fn uses_camel_case_field_names() {
        let mut state = AppState::default();
        state.progress.daily_goal = 2;
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["progress"]["dailyGoal"], 2);
        assert!(json.get("savedTests").is_some());
    }

    #[test]
    fn percent_rounds_and_handles_zero_total() {
        let mut p = Progress::default();
        assert_eq!(p.percent(), 0);
        p.total = 3;
        p.done = 2;
        assert_eq!(p.percent(), 67);
    }

    #[test]
    fn reminder_status() {
        let now = Local.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let soon = Reminder {
            title: "Physics test".into(),
            when: "2026-10-17T09:00".into(),
        };
        assert_eq!(soon.status(now), ReminderStatus::DaysLeft(1));

        let later = Reminder {
            title: "Chem test".into(),
            when: "2026-10-19T13:00".into(),
        };
        assert_eq!(later.status(now), ReminderStatus::DaysLeft(4));

        let past = Reminder {
            title: "Old".into(),
            when: "2026-10-01T09:00".into(),
        };
        assert_eq!(past.status(now), ReminderStatus::PastDue);

        let junk = Reminder {
            title: "?".into(),
            when: "someday".into(),
        };
        assert_eq!(junk.status(now), ReminderStatus::Unknown);
    }

    #[test]
    fn mcq_answer_is_case_insensitive() {
        let mut q = Mcq {
            q: "Force equals mass times ...".into(),
            opts: vec!["acceleration".into()],
            ans: "Acceleration".into(),
            selected: None,
        };
        assert!(!q.is_correct());
        q.selected = Some("acceleration".into());
        assert!(q.is_correct());
    }
}
