//! Mastery log: self-rated comprehension per topic.

use chrono::{Local, NaiveDate, Utc};

use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::input::parse_int_prefix;
use crate::model::MasteryEntry;
use crate::storage::{DocumentBackend, StudyStore};

/// Most entries kept; older ones fall off the end.
pub const MASTERY_CAP: usize = 20;

const DATE_FORMAT: &str = "%-d/%-m/%Y";

impl<B: DocumentBackend> StudyStore<B> {
    /// Record a 1-5 rating for `topic`, dated today.
    pub fn add_mastery(&mut self, topic: &str, score: i64) -> Result<&MasteryEntry> {
        self.add_mastery_on(topic, score, Local::now().date_naive())
    }

    /// [`add_mastery`](Self::add_mastery) from raw form input; the score is
    /// its leading integer, so `"4 stars"` rates 4.
    pub fn add_mastery_raw(&mut self, topic: &str, score: &str) -> Result<&MasteryEntry> {
        let parsed = parse_int_prefix(score)
            .ok_or_else(|| ValidationError::ScoreNotANumber(score.trim().to_string()))?;
        self.add_mastery(topic, parsed)
    }

    pub fn add_mastery_on(&mut self, topic: &str, score: i64, date: NaiveDate) -> Result<&MasteryEntry> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "topic".into(),
            }
            .into());
        }
        let score = match u8::try_from(score) {
            Ok(s) if (1..=5).contains(&s) => s,
            _ => return Err(ValidationError::ScoreOutOfRange(score).into()),
        };

        let entry = MasteryEntry {
            topic: topic.to_string(),
            score,
            date: date.format(DATE_FORMAT).to_string(),
        };
        self.commit(|state| {
            let event = Event::MasteryRecorded {
                topic: entry.topic.clone(),
                score,
                at: Utc::now(),
            };
            state.mastery.insert(0, entry);
            state.mastery.truncate(MASTERY_CAP);
            Ok(((), event))
        })?;
        Ok(&self.state().mastery[0])
    }

    /// Entries ordered by date, newest first. Entries on the same date keep
    /// their stored order; unreadable dates sort last.
    pub fn mastery_by_date(&self) -> Vec<&MasteryEntry> {
        let mut entries: Vec<&MasteryEntry> = self.state().mastery.iter().collect();
        entries.sort_by_key(|e| std::cmp::Reverse(parse_date(&e.date)));
        entries
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y").ok()
}

/// `score` as a row of stars.
pub fn stars(score: u8) -> String {
    "\u{2b50}".repeat(usize::from(score))
}
