//! Session clock implementation.
//!
//! The clock is a two-mode countdown (work, break) with a running flag. It
//! does not own a thread or a timer: the caller invokes `tick()` once per
//! second while the clock runs.
//!
//! ## Transitions
//!
//! ```text
//! Work --(remaining hits 0, completed += 1)--> Break (long every 4th)
//! Break --(remaining hits 0)--> Work
//! ```
//!
//! With auto-continuation on (the default) the countdown restarts right after
//! each transition; with it off the clock stops in the new mode.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::settings::ClockSettings;
use crate::error::Result;
use crate::events::Event;
use crate::storage::{DocumentBackend, StudyStore};

/// Every this many completed work sessions earns a long break.
const SESSIONS_PER_LONG_BREAK: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    Work,
    Break,
}

impl fmt::Display for ClockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockMode::Work => f.pad("Work"),
            ClockMode::Break => f.pad("Break"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClock {
    mode: ClockMode,
    running: bool,
    remaining_secs: u64,
    /// Lengths used the next time the clock resets or completes.
    settings: ClockSettings,
    auto_continue: bool,
}

impl SessionClock {
    /// A stopped clock in work mode with a full session ahead.
    pub fn new(settings: ClockSettings) -> Self {
        Self {
            mode: ClockMode::Work,
            running: false,
            remaining_secs: settings.session_secs(),
            settings,
            auto_continue: true,
        }
    }

    pub fn with_auto_continue(mut self, auto_continue: bool) -> Self {
        self.auto_continue = auto_continue;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn settings(&self) -> ClockSettings {
        self.settings
    }

    pub fn auto_continue(&self) -> bool {
        self.auto_continue
    }

    /// Remaining time as `MM:SS`.
    pub fn remaining_display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_secs / 60,
            self.remaining_secs % 60
        )
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the lengths. The countdown in progress is not touched.
    pub fn set_settings(&mut self, settings: ClockSettings) {
        self.settings = settings;
    }

    pub fn set_auto_continue(&mut self, auto_continue: bool) {
        self.auto_continue = auto_continue;
    }

    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(Event::ClockStarted {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::ClockPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self) -> Event {
        self.running = false;
        self.mode = ClockMode::Work;
        self.remaining_secs = self.settings.session_secs();
        Event::ClockReset {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the transition event when the countdown reaches zero. A
    /// finished work session is counted in the store and persisted before
    /// the event is published.
    pub fn tick<B: DocumentBackend>(&mut self, store: &mut StudyStore<B>) -> Result<Option<Event>> {
        if !self.running {
            return Ok(None);
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return Ok(None);
        }
        self.running = false;
        let event = self.complete(store)?;
        if self.auto_continue {
            self.running = true;
        }
        Ok(Some(event))
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete<B: DocumentBackend>(&mut self, store: &mut StudyStore<B>) -> Result<Event> {
        match self.mode {
            ClockMode::Work => {
                let short = self.settings.short_break_secs();
                let long = self.settings.long_break_secs();
                let (completed, break_secs, event) = store.commit(|state| {
                    state.pomodoro.completed = state.pomodoro.completed.saturating_add(1);
                    let completed = state.pomodoro.completed;
                    let break_secs = if completed % SESSIONS_PER_LONG_BREAK == 0 {
                        long
                    } else {
                        short
                    };
                    let event = Event::SessionCompleted {
                        completed,
                        break_secs,
                        at: Utc::now(),
                    };
                    Ok(((completed, break_secs, event.clone()), event))
                })?;
                self.mode = ClockMode::Break;
                self.remaining_secs = break_secs;
                info!(completed, break_secs, "work session complete");
                Ok(event)
            }
            ClockMode::Break => {
                self.mode = ClockMode::Work;
                self.remaining_secs = self.settings.session_secs();
                info!(session_secs = self.remaining_secs, "break complete");
                let event = Event::BreakCompleted {
                    session_secs: self.remaining_secs,
                    at: Utc::now(),
                };
                store.announce(event.clone());
                Ok(event)
            }
        }
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new(ClockSettings::default())
    }
}
