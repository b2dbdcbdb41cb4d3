//! Progress ledger: chapter counts, daily goal and the streak.
//!
//! The streak only ever grows. A missed day does not reset it.

use chrono::{Local, NaiveDate, Utc};
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::events::Event;
use crate::input::coerce_count;
use crate::model::Progress;
use crate::storage::{DocumentBackend, StudyStore};

impl<B: DocumentBackend> StudyStore<B> {
    /// Store the chapter counts and daily goal as given.
    pub fn set_progress(&mut self, total: u32, done: u32, daily_goal: u32) -> Result<&Progress> {
        self.commit(|state| {
            state.progress.total = total;
            state.progress.done = done;
            state.progress.daily_goal = daily_goal;
            Ok((
                (),
                Event::ProgressUpdated {
                    total,
                    done,
                    daily_goal,
                    at: Utc::now(),
                },
            ))
        })?;
        Ok(&self.state().progress)
    }

    /// [`set_progress`](Self::set_progress) from raw form input; unreadable
    /// values count as zero.
    pub fn set_progress_raw(&mut self, total: &str, done: &str, daily_goal: &str) -> Result<&Progress> {
        self.set_progress(coerce_count(total), coerce_count(done), coerce_count(daily_goal))
    }

    /// Mark today's (local) goal as done.
    pub fn mark_today_done(&mut self) -> Result<u32> {
        self.mark_done_on(Local::now().date_naive())
    }

    /// Mark `date` as done and bump the streak. Fails with
    /// [`CoreError::AlreadyMarked`] if the date is already in the history.
    pub fn mark_done_on(&mut self, date: NaiveDate) -> Result<u32> {
        let day = date.format("%Y-%m-%d").to_string();
        self.commit(|state| {
            if state.progress.is_marked(&day) {
                debug!(date = %day, "daily goal already marked");
                return Err(CoreError::AlreadyMarked { date: day });
            }
            state.progress.history.push(day.clone());
            state.progress.streak = state.progress.streak.saturating_add(1);
            let streak = state.progress.streak;
            Ok((
                streak,
                Event::DayMarked {
                    date: day,
                    streak,
                    at: Utc::now(),
                },
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn progress_survives_reload() {
        let mut store = StudyStore::open(MemoryBackend::new());
        store.set_progress(30, 12, 2).unwrap();
        let progress = store.reload().progress.clone();
        assert_eq!((progress.total, progress.done, progress.daily_goal), (30, 12, 2));
    }

    #[test]
    fn raw_progress_is_coerced() {
        let mut store = StudyStore::open(MemoryBackend::new());
        let progress = store.set_progress_raw("20", "abc", "3 per day").unwrap();
        assert_eq!((progress.total, progress.done, progress.daily_goal), (20, 0, 3));
    }

    #[test]
    fn marking_twice_on_same_day_counts_once() {
        let mut store = StudyStore::open(MemoryBackend::new());
        let today = date(2026, 10, 16);
        assert_eq!(store.mark_done_on(today).unwrap(), 1);

        let err = store.mark_done_on(today).unwrap_err();
        assert!(matches!(err, CoreError::AlreadyMarked { ref date } if date == "2026-10-16"));
        assert_eq!(store.state().progress.streak, 1);
        assert_eq!(store.state().progress.history, vec!["2026-10-16"]);
    }

    #[test]
    fn missed_days_do_not_reset_streak() {
        let mut store = StudyStore::open(MemoryBackend::new());
        store.mark_done_on(date(2026, 10, 1)).unwrap();
        store.mark_done_on(date(2026, 10, 2)).unwrap();
        assert_eq!(store.mark_done_on(date(2026, 10, 9)).unwrap(), 3);
    }

    #[test]
    fn mark_today_uses_local_date() {
        let mut store = StudyStore::open(MemoryBackend::new());
        store.mark_today_done().unwrap();
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert!(store.state().progress.is_marked(&today));
    }
}
