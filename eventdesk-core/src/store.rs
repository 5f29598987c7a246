//! Document store access.
//!
//! The store holds one JSON record per document id inside a named
//! collection. `DocumentStore` is the raw interface (untyped JSON with
//! full or merge writes); `EventStore` is the typed facade the CLI uses.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{EventDeskError, EventDeskResult};
use crate::event::{ChecklistItem, EventDocument};

/// The collection that event documents live in.
pub const EVENTS_COLLECTION: &str = "events";

/// Raw document store: JSON records addressed by collection + id.
pub trait DocumentStore {
    fn get(&self, collection: &str, id: &str) -> EventDeskResult<Option<Value>>;

    /// Write a record. With `merge` set, only the top-level keys present
    /// in `value` overwrite the stored record; other keys are left
    /// intact. Without it, the record is replaced wholesale.
    fn set(&self, collection: &str, id: &str, value: Value, merge: bool) -> EventDeskResult<()>;
}

/// File-backed store: `<root>/<collection>/<id>.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    fn doc_path(&self, collection: &str, id: &str) -> PathBuf {
        self.root.join(collection).join(format!("{id}.json"))
    }
}

impl DocumentStore for FileStore {
    fn get(&self, collection: &str, id: &str) -> EventDeskResult<Option<Value>> {
        let path = self.doc_path(collection, id);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content)
            .map_err(|e| EventDeskError::Store(format!("{}: {e}", path.display())))?;
        Ok(Some(value))
    }

    fn set(&self, collection: &str, id: &str, value: Value, merge: bool) -> EventDeskResult<()> {
        let path = self.doc_path(collection, id);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let record = if merge {
            merge_top_level(self.get(collection, id)?, value)
        } else {
            value
        };

        let content = serde_json::to_string_pretty(&record)
            .map_err(|e| EventDeskError::Serialization(e.to_string()))?;

        write_atomically(&path, &content)
    }
}

/// Shallow merge: keys of `patch` overwrite keys of the existing record.
/// When either side is not a JSON object the patch wins outright.
fn merge_top_level(existing: Option<Value>, patch: Value) -> Value {
    match (existing, patch) {
        (Some(Value::Object(mut base)), Value::Object(patch_map)) => {
            for (key, value) in patch_map {
                base.insert(key, value);
            }
            Value::Object(base)
        }
        (_, patch) => patch,
    }
}

// Temp file + rename so a failed write never truncates the record.
fn write_atomically(path: &Path, content: &str) -> EventDeskResult<()> {
    let temp = path.with_extension("json.tmp");
    std::fs::write(&temp, content)?;
    std::fs::rename(&temp, path)?;
    Ok(())
}

/// Typed access to event documents.
pub struct EventStore<S> {
    store: S,
}

impl<S: DocumentStore> EventStore<S> {
    pub fn new(store: S) -> Self {
        EventStore { store }
    }

    /// Fetch one event document by id. `None` when the id has no record.
    pub fn load(&self, id: &str) -> EventDeskResult<Option<EventDocument>> {
        match self.store.get(EVENTS_COLLECTION, id)? {
            Some(value) => {
                let event = serde_json::from_value(value)
                    .map_err(|e| EventDeskError::Serialization(e.to_string()))?;
                Ok(Some(event))
            }
            None => Ok(None),
        }
    }

    /// Full overwrite of the stored document.
    pub fn save(&self, id: &str, event: &EventDocument) -> EventDeskResult<()> {
        let value = serde_json::to_value(event)
            .map_err(|e| EventDeskError::Serialization(e.to_string()))?;
        self.store.set(EVENTS_COLLECTION, id, value, false)
    }

    /// Merge write carrying only the checklist; other fields are untouched.
    pub fn save_checklist(&self, id: &str, checklist: &[ChecklistItem]) -> EventDeskResult<()> {
        let value = serde_json::json!({ "checklist": checklist });
        self.store.set(EVENTS_COLLECTION, id, value, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{ChecklistItem, ItineraryItem};
    use serde_json::json;
    use tempfile::TempDir;

    fn store() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        (dir, store)
    }

    fn sample() -> EventDocument {
        EventDocument {
            name: "Service Day".into(),
            date: "March 20, 2026".into(),
            location: "Community Center".into(),
            description: "A day of volunteering.".into(),
            itinerary: vec![ItineraryItem {
                time: "10:00 AM".into(),
                title: "Kickoff".into(),
                details: "Welcome".into(),
            }],
            speakers: vec![],
            checklist: vec![ChecklistItem {
                label: "Book venue".into(),
                checked: false,
            }],
        }
    }

    #[test]
    fn get_absent_record_is_none() {
        let (_dir, store) = store();
        assert!(store.get("events", "missing").unwrap().is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let (_dir, store) = store();
        let value = json!({"name": "Service Day", "checklist": []});

        store.set("events", "service-day", value.clone(), false).unwrap();
        assert_eq!(store.get("events", "service-day").unwrap(), Some(value));
    }

    #[test]
    fn merge_write_only_touches_named_keys() {
        let (_dir, store) = store();
        store
            .set(
                "events",
                "service-day",
                json!({"name": "Service Day", "checklist": [{"label": "a", "checked": false}]}),
                false,
            )
            .unwrap();

        store
            .set(
                "events",
                "service-day",
                json!({"checklist": [{"label": "a", "checked": true}]}),
                true,
            )
            .unwrap();

        let record = store.get("events", "service-day").unwrap().unwrap();
        assert_eq!(record["name"], "Service Day");
        assert_eq!(record["checklist"][0]["checked"], true);
    }

    #[test]
    fn merge_into_absent_record_creates_it() {
        let (_dir, store) = store();
        store
            .set("events", "new-id", json!({"checklist": []}), true)
            .unwrap();

        let record = store.get("events", "new-id").unwrap().unwrap();
        assert_eq!(record, json!({"checklist": []}));
    }

    #[test]
    fn last_writer_wins_on_full_writes() {
        let (_dir, store) = store();
        store
            .set("events", "id", json!({"name": "first"}), false)
            .unwrap();
        store
            .set("events", "id", json!({"name": "second"}), false)
            .unwrap();

        let record = store.get("events", "id").unwrap().unwrap();
        assert_eq!(record, json!({"name": "second"}));
    }

    #[test]
    fn event_store_load_save_round_trips() {
        let (_dir, store) = store();
        let events = EventStore::new(store);
        let event = sample();

        events.save("service-day", &event).unwrap();
        assert_eq!(events.load("service-day").unwrap(), Some(event));
    }

    #[test]
    fn save_checklist_leaves_other_fields_intact() {
        let (_dir, store) = store();
        let events = EventStore::new(store);
        let mut event = sample();
        events.save("service-day", &event).unwrap();

        event.toggle_checklist(0).unwrap();
        events
            .save_checklist("service-day", &event.checklist)
            .unwrap();

        let loaded = events.load("service-day").unwrap().unwrap();
        assert_eq!(loaded, event);
        assert_eq!(loaded.name, "Service Day");
        assert!(loaded.checklist[0].checked);
    }

    #[test]
    fn load_missing_event_is_none() {
        let (_dir, store) = store();
        let events = EventStore::new(store);
        assert!(events.load("nope").unwrap().is_none());
    }

    #[test]
    fn corrupt_record_is_a_store_error() {
        let (dir, store) = store();
        let path = dir.path().join("events");
        std::fs::create_dir_all(&path).unwrap();
        std::fs::write(path.join("bad.json"), "not json").unwrap();

        assert!(matches!(
            store.get("events", "bad"),
            Err(EventDeskError::Store(_))
        ));
    }
}
