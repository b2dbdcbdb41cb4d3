use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::ClockMode;

/// Every committed change in the system produces an Event.
/// The presentation layer subscribes to them and redraws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    DocumentSaved {
        at: DateTime<Utc>,
    },
    DocumentImported {
        at: DateTime<Utc>,
    },
    NoteSaved {
        at: DateTime<Utc>,
    },
    FlashcardsGenerated {
        count: usize,
        at: DateTime<Utc>,
    },
    ProgressUpdated {
        total: u32,
        done: u32,
        daily_goal: u32,
        at: DateTime<Utc>,
    },
    DayMarked {
        date: String,
        streak: u32,
        at: DateTime<Utc>,
    },
    MasteryRecorded {
        topic: String,
        score: u8,
        at: DateTime<Utc>,
    },
    ReminderAdded {
        title: String,
        at: DateTime<Utc>,
    },
    ReminderDeleted {
        index: usize,
        at: DateTime<Utc>,
    },
    RemindersCleared {
        at: DateTime<Utc>,
    },
    TestSaved {
        questions: usize,
        at: DateTime<Utc>,
    },
    /// A work session ran out and the clock moved to a break.
    SessionCompleted {
        completed: u32,
        break_secs: u64,
        at: DateTime<Utc>,
    },
    /// A break ran out and the clock moved back to work.
    BreakCompleted {
        session_secs: u64,
        at: DateTime<Utc>,
    },
    ClockStarted {
        mode: ClockMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    ClockPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    ClockReset {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Short message suitable for showing to the user.
    pub fn message(&self) -> String {
        match self {
            Event::DocumentSaved { .. } => "Saved".into(),
            Event::DocumentImported { .. } => "Data imported successfully!".into(),
            Event::NoteSaved { .. } => "Saved to local deck".into(),
            Event::FlashcardsGenerated { count, .. } => format!("Generated {count} flashcards"),
            Event::ProgressUpdated { .. } => "Progress saved".into(),
            Event::DayMarked { streak, .. } => {
                format!("Daily goal marked done, streak +1 (now {streak})")
            }
            Event::MasteryRecorded { topic, score, .. } => {
                format!("Mastery for \"{topic}\" saved as {score} stars!")
            }
            Event::ReminderAdded { .. } => "Reminder added".into(),
            Event::ReminderDeleted { .. } => "Reminder deleted".into(),
            Event::RemindersCleared { .. } => "All reminders cleared.".into(),
            Event::TestSaved { .. } => "Test saved".into(),
            Event::SessionCompleted { .. } => "Pomodoro complete! Take a break.".into(),
            Event::BreakCompleted { .. } => "Break is over! Time to work.".into(),
            Event::ClockStarted { mode, .. } => format!("{mode} started"),
            Event::ClockPaused { .. } => "Paused".into(),
            Event::ClockReset { .. } => "Timer reset".into(),
        }
    }
}
