use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::services::persistence::{KeyValueStore, PersistenceError};

/// Storage key the note map is persisted under
const NOTES_KEY: &str = "listing_notes";

/// Free-text notes the user attaches to listings
///
/// Keyed by listing id and persisted through the same key-value storage
/// as the favorite set, with the same corrupt-payload recovery: an
/// unreadable payload starts the map over rather than failing startup.
pub struct NoteStore {
    storage: Arc<dyn KeyValueStore>,
    notes: Mutex<HashMap<u32, String>>,
}

impl NoteStore {
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let notes = match storage.read(NOTES_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<HashMap<u32, String>>(&payload) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!("Stored notes are unreadable, resetting to empty: {}", e);
                    HashMap::new()
                }
            },
            Ok(None) => HashMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read stored notes, starting empty: {}", e);
                HashMap::new()
            }
        };

        Self {
            storage,
            notes: Mutex::new(notes),
        }
    }

    fn map(&self) -> MutexGuard<'_, HashMap<u32, String>> {
        self.notes.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Save the note for a listing
    ///
    /// The note is trimmed; a blank note deletes the entry instead of
    /// storing whitespace. Flushed to storage before returning.
    pub fn save(&self, id: u32, note: &str) -> Result<(), PersistenceError> {
        let mut notes = self.map();
        let trimmed = note.trim();
        if trimmed.is_empty() {
            notes.remove(&id);
        } else {
            notes.insert(id, trimmed.to_string());
        }
        self.persist(&notes)
    }

    /// The stored note for a listing, if any
    pub fn get(&self, id: u32) -> Option<String> {
        self.map().get(&id).cloned()
    }

    /// Remove the note for a listing; true if one existed
    pub fn remove(&self, id: u32) -> Result<bool, PersistenceError> {
        let mut notes = self.map();
        let existed = notes.remove(&id).is_some();
        if existed {
            self.persist(&notes)?;
        }
        Ok(existed)
    }

    /// Snapshot of all notes
    pub fn all(&self) -> HashMap<u32, String> {
        self.map().clone()
    }

    fn persist(&self, notes: &HashMap<u32, String>) -> Result<(), PersistenceError> {
        let payload = serde_json::to_string(notes)?;
        self.storage.write(NOTES_KEY, &payload)
    }
}
