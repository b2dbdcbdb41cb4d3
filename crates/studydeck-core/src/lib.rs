//! # StudyDeck Core Library
//!
//! This library provides the core logic for StudyDeck, a personal study
//! dashboard. Every operation is available through the standalone CLI; any
//! other front end is a thin layer over the same store.
//!
//! ## Architecture
//!
//! - **Store**: one JSON study document in a SQLite key-value table. All
//!   mutation goes through [`StudyStore`], which persists and then notifies
//!   observers
//! - **Session Clock**: a pomodoro work/break countdown that requires the
//!   caller to invoke `tick()` once per second
//! - **Progress Ledger**: chapter counts, daily goal and streak
//! - **Mastery Log**: capped list of 1-5 self-ratings
//! - **Text Tools**: local summaries, flashcards and mock tests
//!
//! ## Key Components
//!
//! - [`StudyStore`]: owner of the study document
//! - [`SessionClock`]: pomodoro state machine
//! - [`Database`]: SQLite key-value backend
//! - [`Config`]: application configuration

pub mod clock;
pub mod error;
pub mod events;
pub mod input;
mod ledger;
pub mod mastery;
pub mod material;
pub mod model;
pub mod storage;
pub mod text;

pub use clock::{ClockMode, ClockSettings, SessionClock};
pub use error::{ConfigError, CoreError, DatabaseError, ImportError, ValidationError};
pub use events::Event;
pub use mastery::MASTERY_CAP;
pub use material::DeckCursor;
pub use model::{
    AppState, Flashcard, MasteryEntry, Mcq, Note, PomodoroCounter, Progress, Reminder,
    ReminderStatus, Test,
};
pub use storage::{Config, Database, DocumentBackend, MemoryBackend, StateObserver, StudyStore};
pub use text::{Quiz, QuizScore};
