pub mod config;
pub mod dashboard;
pub mod data;
pub mod flash;
pub mod mastery;
pub mod note;
pub mod progress;
pub mod quiz;
pub mod reminder;
pub mod timer;

use serde::de::DeserializeOwned;
use serde::Serialize;
use studydeck_core::{AppState, Database, Event, StateObserver, StudyStore};
use tracing::warn;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Prints user-facing notices for committed changes.
struct Notifier;

impl StateObserver for Notifier {
    fn on_event(&mut self, event: &Event, _state: &AppState) {
        if !matches!(event, Event::DocumentSaved { .. }) {
            eprintln!("{}", event.message());
        }
    }
}

/// Open the study document in the default database.
pub fn open_store() -> Result<StudyStore<Database>, Box<dyn std::error::Error>> {
    let mut store = StudyStore::open(Database::open()?);
    store.subscribe(Notifier);
    Ok(store)
}

/// Front-end view state kept beside the document (deck position, quiz in
/// progress). Unreadable values fall back to the default.
pub fn load_view<T: DeserializeOwned + Default>(db: &Database, key: &str) -> T {
    if let Ok(Some(json)) = db.kv_get(key) {
        match serde_json::from_str::<T>(&json) {
            Ok(value) => return value,
            Err(e) => warn!(key, "discarding unreadable view state: {e}"),
        }
    }
    T::default()
}

pub fn save_view<T: Serialize>(db: &Database, key: &str, value: &T) -> CmdResult {
    let json = serde_json::to_string(value)?;
    db.kv_set(key, &json)?;
    Ok(())
}
