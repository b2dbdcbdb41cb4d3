//! The study document store.
//!
//! `StudyStore` owns the single [`AppState`] and is the only thing allowed to
//! mutate it. Each mutation is applied in memory, persisted through the
//! [`DocumentBackend`], and then published to observers as an [`Event`], in
//! that order. Observers never see a change that was not persisted.

use chrono::Utc;
use tracing::{debug, warn};

use super::backend::DocumentBackend;
use crate::error::{ImportError, Result};
use crate::events::Event;
use crate::model::AppState;

/// Key the study document is stored under.
pub const DOCUMENT_KEY: &str = "ai-ace-data-v1";

/// Receives every committed change.
pub trait StateObserver {
    fn on_event(&mut self, event: &Event, state: &AppState);
}

impl<F> StateObserver for F
where
    F: FnMut(&Event, &AppState),
{
    fn on_event(&mut self, event: &Event, state: &AppState) {
        self(event, state)
    }
}

pub struct StudyStore<B: DocumentBackend> {
    backend: B,
    state: AppState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl<B: DocumentBackend> StudyStore<B> {
    /// Open a store over `backend`, loading whatever document it holds.
    pub fn open(backend: B) -> Self {
        let state = Self::load_from(&backend);
        Self {
            backend,
            state,
            observers: Vec::new(),
        }
    }

    /// Read the stored document. A missing, unreadable or malformed document
    /// yields the default document; nothing escapes.
    pub fn load_from(backend: &B) -> AppState {
        match backend.read(DOCUMENT_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<AppState>(&raw) {
                Ok(state) => state,
                Err(e) => {
                    warn!("stored document is malformed, starting from defaults: {e}");
                    AppState::default()
                }
            },
            Ok(None) => {
                debug!("no stored document, starting from defaults");
                AppState::default()
            }
            Err(e) => {
                warn!("cannot read stored document, starting from defaults: {e}");
                AppState::default()
            }
        }
    }

    /// Discard in-memory state and read the document again.
    pub fn reload(&mut self) -> &AppState {
        self.state = Self::load_from(&self.backend);
        &self.state
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Persist the current document and tell observers.
    pub fn save(&mut self) -> Result<()> {
        self.persist()?;
        self.announce(Event::DocumentSaved { at: Utc::now() });
        Ok(())
    }

    /// Publish an event without touching the document.
    pub fn announce(&mut self, event: Event) {
        for observer in &mut self.observers {
            observer.on_event(&event, &self.state);
        }
    }

    /// Apply `mutate` to a copy of the document, persist it, then publish
    /// the returned event. On any error the in-memory document is unchanged.
    pub(crate) fn commit<T, F>(&mut self, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut AppState) -> Result<(T, Event)>,
    {
        let mut next = self.state.clone();
        let (value, event) = mutate(&mut next)?;
        let previous = std::mem::replace(&mut self.state, next);
        if let Err(e) = self.persist() {
            self.state = previous;
            return Err(e);
        }
        self.announce(event);
        Ok(value)
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.state)?;
        self.backend.write(DOCUMENT_KEY, &raw)?;
        debug!(bytes = raw.len(), "document persisted");
        Ok(())
    }

    /// Pretty-printed JSON of the whole document.
    pub fn export_document(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.state)?)
    }

    /// Replace the whole document with `raw`.
    ///
    /// The input must be a JSON object with both `progress` and `pomodoro`
    /// sections. Anything else is rejected and the current document is kept.
    pub fn import_document(&mut self, raw: &str) -> Result<&AppState> {
        let imported = match parse_import(raw) {
            Ok(state) => state,
            Err(e) => {
                warn!("rejected import: {e}");
                return Err(e.into());
            }
        };
        self.commit(|state| {
            *state = imported;
            Ok(((), Event::DocumentImported { at: Utc::now() }))
        })?;
        Ok(&self.state)
    }
}

fn parse_import(raw: &str) -> Result<AppState, ImportError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let has_sections = value
        .as_object()
        .is_some_and(|obj| obj.contains_key("progress") && obj.contains_key("pomodoro"));
    if !has_sections {
        return Err(ImportError::InvalidFormat);
    }
    Ok(serde_json::from_value(value)?)
}
