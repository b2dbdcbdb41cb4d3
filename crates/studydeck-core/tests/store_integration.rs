//! Integration tests for the study document store.
//!
//! These run against an on-disk SQLite database so that every round trip
//! goes through the same path the CLI uses.

use chrono::NaiveDate;
use proptest::prelude::*;
use tempfile::TempDir;

use studydeck_core::storage::DOCUMENT_KEY;
use studydeck_core::{
    AppState, ClockMode, ClockSettings, CoreError, Database, DocumentBackend, ImportError,
    MemoryBackend, SessionClock, StudyStore, MASTERY_CAP,
};

fn open_file_store(dir: &TempDir) -> StudyStore<Database> {
    let db = Database::open_at(&dir.path().join("studydeck.db")).unwrap();
    StudyStore::open(db)
}

#[test]
fn test_progress_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = open_file_store(&dir);
        store.set_progress(40, 17, 3).unwrap();
    }
    let store = open_file_store(&dir);
    let p = &store.state().progress;
    assert_eq!((p.total, p.done, p.daily_goal), (40, 17, 3));
}

#[test]
fn test_corrupted_document_loads_defaults() {
    let dir = TempDir::new().unwrap();
    {
        let mut db = Database::open_at(&dir.path().join("studydeck.db")).unwrap();
        db.write(DOCUMENT_KEY, "{\"notes\": [tru").unwrap();
    }
    let store = open_file_store(&dir);
    assert_eq!(store.state(), &AppState::default());
}

#[test]
fn test_export_import_roundtrip() {
    let mut source = StudyStore::open(MemoryBackend::new());
    source.save_note("Ohm's law relates voltage and current").unwrap();
    source.generate_flashcards("V = IR. P = VI").unwrap();
    source.set_progress(12, 5, 1).unwrap();
    source
        .mark_done_on(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap())
        .unwrap();
    source.add_mastery("Circuits", 4).unwrap();
    source.add_reminder("Physics test", "2026-10-20T09:00").unwrap();

    let exported = source.export_document().unwrap();

    let mut target = StudyStore::open(MemoryBackend::new());
    target.import_document(&exported).unwrap();
    assert_eq!(target.state(), source.state());
    assert_eq!(target.reload(), source.state());
}

#[test]
fn test_rejected_import_keeps_existing_state() {
    let dir = TempDir::new().unwrap();
    let mut store = open_file_store(&dir);
    store.set_progress(9, 2, 1).unwrap();
    let before = store.state().clone();

    let err = store
        .import_document(r#"{"notes": [], "mastery": []}"#)
        .unwrap_err();
    assert!(matches!(err, CoreError::Import(ImportError::InvalidFormat)));
    assert_eq!(store.state(), &before);
    assert_eq!(store.reload(), &before);
}

#[test]
fn test_import_accepts_export_from_original_dashboard() {
    let raw = r#"{
        "notes": [{"text": "Kinematics basics", "created": 1760600000000}],
        "progress": {"total": 20, "done": 4, "streak": 2, "dailyGoal": 1, "history": ["2026-10-14", "2026-10-15"]},
        "pomodoro": {"completed": 6},
        "flashcards": [{"front": "v = u + at", "back": "Explanation: v = u + at"}],
        "reminders": [{"title": "Mock exam", "when": "2026-11-01T10:00"}],
        "savedTests": [],
        "mastery": [{"topic": "Kinematics", "score": 4, "date": "15/10/2026"}]
    }"#;
    let mut store = StudyStore::open(MemoryBackend::new());
    let state = store.import_document(raw).unwrap();
    assert_eq!(state.progress.history.len(), 2);
    assert_eq!(state.pomodoro.completed, 6);
    assert_eq!(state.mastery[0].topic, "Kinematics");
}

#[test]
fn test_clock_completion_is_persisted_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut store = open_file_store(&dir);
    let mut clock = SessionClock::new(ClockSettings::from_minutes(1, 5, 15));
    clock.start();
    for _ in 0..60 {
        clock.tick(&mut store).unwrap();
    }
    assert_eq!(clock.mode(), ClockMode::Break);
    assert_eq!(clock.remaining_secs(), 300);
    drop(store);

    let store = open_file_store(&dir);
    assert_eq!(store.state().pomodoro.completed, 1);
}

proptest! {
    #[test]
    fn prop_set_progress_roundtrip(total in any::<u32>(), done in any::<u32>(), goal in any::<u32>()) {
        let mut store = StudyStore::open(MemoryBackend::new());
        store.set_progress(total, done, goal).unwrap();
        let p = store.reload().progress.clone();
        prop_assert_eq!((p.total, p.done, p.daily_goal), (total, done, goal));
    }

    #[test]
    fn prop_mastery_never_exceeds_cap(scores in proptest::collection::vec(-2i64..8, 0..40)) {
        let mut store = StudyStore::open(MemoryBackend::new());
        let mut accepted = Vec::new();
        for (i, score) in scores.iter().enumerate() {
            if store.add_mastery(&format!("Topic {i}"), *score).is_ok() {
                accepted.push(format!("Topic {i}"));
            }
        }
        let state = store.state();
        prop_assert!(state.mastery.len() <= MASTERY_CAP);
        prop_assert!(state.mastery.iter().all(|m| (1..=5).contains(&m.score)));
        let expected: Vec<&String> = accepted.iter().rev().take(MASTERY_CAP).collect();
        let actual: Vec<&String> = state.mastery.iter().map(|m| &m.topic).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_history_has_unique_dates(days in proptest::collection::vec(1u32..28, 0..30)) {
        let mut store = StudyStore::open(MemoryBackend::new());
        for d in &days {
            let _ = store.mark_done_on(NaiveDate::from_ymd_opt(2026, 2, *d).unwrap());
        }
        let mut unique = days.clone();
        unique.sort();
        unique.dedup();
        let progress = &store.state().progress;
        prop_assert_eq!(progress.history.len(), unique.len());
        prop_assert_eq!(progress.streak as usize, unique.len());
    }
}
