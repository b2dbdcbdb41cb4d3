//! Notes, flashcards, reminders and saved tests.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::model::{Flashcard, Mcq, Note, Reminder, Test};
use crate::storage::{DocumentBackend, StudyStore};
use crate::text::flashcards_from;

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(trimmed)
}

impl<B: DocumentBackend> StudyStore<B> {
    /// Put a note at the front of the list.
    pub fn save_note(&mut self, text: &str) -> Result<&Note> {
        let text = required("note", text)?.to_string();
        self.commit(|state| {
            state.notes.insert(
                0,
                Note {
                    text,
                    created: Utc::now().timestamp_millis(),
                },
            );
            Ok(((), Event::NoteSaved { at: Utc::now() }))
        })?;
        Ok(&self.state().notes[0])
    }

    /// Replace the flashcard deck with cards generated from `text`.
    pub fn generate_flashcards(&mut self, text: &str) -> Result<&[Flashcard]> {
        let cards = flashcards_from(required("notes", text)?);
        self.commit(|state| {
            let count = cards.len();
            state.flashcards = cards;
            Ok(((), Event::FlashcardsGenerated { count, at: Utc::now() }))
        })?;
        Ok(&self.state().flashcards)
    }

    pub fn add_reminder(&mut self, title: &str, when: &str) -> Result<&Reminder> {
        let title = required("title", title)?.to_string();
        let when = required("date", when)?.to_string();
        self.commit(|state| {
            let event = Event::ReminderAdded {
                title: title.clone(),
                at: Utc::now(),
            };
            state.reminders.push(Reminder { title, when });
            Ok(((), event))
        })?;
        let last = self.state().reminders.len() - 1;
        Ok(&self.state().reminders[last])
    }

    pub fn delete_reminder(&mut self, index: usize) -> Result<Reminder> {
        self.commit(|state| {
            let len = state.reminders.len();
            if index >= len {
                return Err(ValidationError::OutOfBounds {
                    collection: "reminders".into(),
                    index,
                    len,
                }
                .into());
            }
            let removed = state.reminders.remove(index);
            Ok((removed, Event::ReminderDeleted { index, at: Utc::now() }))
        })
    }

    pub fn clear_reminders(&mut self) -> Result<()> {
        self.commit(|state| {
            state.reminders.clear();
            Ok(((), Event::RemindersCleared { at: Utc::now() }))
        })
    }

    /// Keep a finished mock test.
    pub fn save_test(&mut self, questions: Vec<Mcq>) -> Result<&Test> {
        if questions.is_empty() {
            return Err(ValidationError::EmptyCollection("test has no questions".into()).into());
        }
        self.commit(|state| {
            let count = questions.len();
            state.saved_tests.push(Test {
                questions,
                created: Utc::now().timestamp_millis(),
            });
            Ok((
                (),
                Event::TestSaved {
                    questions: count,
                    at: Utc::now(),
                },
            ))
        })?;
        let last = self.state().saved_tests.len() - 1;
        Ok(&self.state().saved_tests[last])
    }
}

/// Which card is showing and which side is up. View state; it is not
/// part of the study document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCursor {
    index: usize,
    flipped: bool,
}

impl DeckCursor {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            flipped: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
        self.flipped = false;
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index % len + len - 1) % len;
        self.flipped = false;
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// The visible side of the current card.
    pub fn face<'a>(&self, deck: &'a [Flashcard]) -> Option<&'a str> {
        let card = deck.get(self.index)?;
        Some(if self.flipped { &card.back } else { &card.front })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::storage::MemoryBackend;

    #[test]
    fn notes_are_prepended() {
        let mut store = StudyStore::open(MemoryBackend::new());
        store.save_note("first").unwrap();
        store.save_note("  second  ").unwrap();
        let texts: Vec<&str> = store.state().notes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["second", "first"]);
        assert!(store.save_note(" \n").is_err());
        assert_eq!(store.reload().notes.len(), 2);
    }

    #[test]
    fn flashcards_replace_deck() {
        let mut store = StudyStore::open(MemoryBackend::new());
        store.generate_flashcards("One. Two").unwrap();
        let deck = store.generate_flashcards("Newton's first law.\nInertia").unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck[0].front, "Newton's first law");
        assert_eq!(deck[1].back, "Explanation: Inertia");
    }

    #[test]
    fn reminder_requires_title_and_date() {
        let mut store = StudyStore::open(MemoryBackend::new());
        let err = store.add_reminder("Physics test", "").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::EmptyField { ref field }) if field == "date"
        ));
        assert!(store.add_reminder("", "2026-10-20T09:00").is_err());
        assert!(store.state().reminders.is_empty());

        store.add_reminder("Physics test", "2026-10-20T09:00").unwrap();
        store.add_reminder("Chem test", "2026-10-22T09:00").unwrap();
        assert_eq!(store.state().reminders[1].title, "Chem test");
    }

    #[test]
    fn delete_and_clear_reminders() {
        let mut store = StudyStore::open(MemoryBackend::new());
        store.add_reminder("A", "2026-10-20T09:00").unwrap();
        store.add_reminder("B", "2026-10-21T09:00").unwrap();

        assert!(matches!(
            store.delete_reminder(5).unwrap_err(),
            CoreError::Validation(ValidationError::OutOfBounds { len: 2, .. })
        ));
        let removed = store.delete_reminder(0).unwrap();
        assert_eq!(removed.title, "A");
        assert_eq!(store.state().reminders.len(), 1);

        store.clear_reminders().unwrap();
        assert!(store.reload().reminders.is_empty());
    }

    #[test]
    fn empty_test_is_not_saved() {
        let mut store = StudyStore::open(MemoryBackend::new());
        assert!(store.save_test(Vec::new()).is_err());
        let q = Mcq {
            q: "Light travels in ... lines".into(),
            opts: vec!["straight".into(), "curved".into(), "wavy".into(), "broken".into()],
            ans: "straight".into(),
            selected: None,
        };
        let test = store.save_test(vec![q]).unwrap();
        assert_eq!(test.questions.len(), 1);
        assert_eq!(store.state().saved_tests.len(), 1);
    }

    #[test]
    fn deck_cursor_wraps_and_resets_flip() {
        let deck = vec![
            Flashcard { front: "a".into(), back: "A".into() },
            Flashcard { front: "b".into(), back: "B".into() },
            Flashcard { front: "c".into(), back: "C".into() },
        ];
        let mut cursor = DeckCursor::default();
        assert_eq!(cursor.face(&deck), Some("a"));
        cursor.flip();
        assert_eq!(cursor.face(&deck), Some("A"));

        cursor.prev(deck.len());
        assert_eq!(cursor.index(), 2);
        assert!(!cursor.is_flipped());

        cursor.next(deck.len());
        assert_eq!(cursor.index(), 0);

        cursor.next(0);
        assert_eq!(cursor.face(&[]), None);
    }
}
