use crate::error::Result;
use crate::note::Note;
use crate::storage::Storage;
use tracing::{debug, warn};

/// Whole-list persistence of notes under a single storage key.
pub struct Store<S> {
    storage: S,
    key: String,
}

impl<S: Storage> Store<S> {
    pub fn new(storage: S, key: &str) -> Self {
        Self { storage, key: key.to_string() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Every saved note in storage order. A missing, unreadable or malformed
    /// slot reads as an empty list.
    pub fn get_all(&self) -> Vec<Note> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(key = %self.key, %err, "could not read notes; treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => notes,
            Err(err) => {
                warn!(key = %self.key, %err, "malformed notes; treating as empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with `notes` in one write.
    pub fn set_all(&mut self, notes: &[Note]) -> Result<()> {
        let raw = serde_json::to_string(notes)?;
        self.storage.set_item(&self.key, &raw)?;
        debug!(key = %self.key, count = notes.len(), "persisted notes");
        Ok(())
    }

    /// Drop the slot itself, not just its contents.
    pub fn clear_all(&mut self) -> Result<()> {
        self.storage.remove_item(&self.key)?;
        debug!(key = %self.key, "cleared notes");
        Ok(())
    }

    /// Raw persisted blob, if any.
    pub fn export(&self) -> Option<String> {
        self.storage.get_item(&self.key).ok().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotesError;
    use crate::note::NoteId;
    use crate::storage::{FileStorage, MemoryStorage};
    use tempfile::tempdir;

    fn sample() -> Vec<Note> {
        vec![
            Note::create(NoteId::from("1"), "one", "first", 1),
            Note::create(NoteId::from("2"), "", "second", 2),
        ]
    }

    #[test]
    fn test_fresh_store_is_empty() {
        let store = Store::new(MemoryStorage::new(), "k");
        assert!(store.get_all().is_empty());
        assert_eq!(store.export(), None);
    }

    #[test]
    fn test_set_then_get_keeps_order() {
        let mut store = Store::new(MemoryStorage::new(), "k");
        store.set_all(&sample()).unwrap();
        let ids: Vec<String> =
            store.get_all().iter().map(|n| n.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_malformed_json_reads_empty() {
        let mut storage = MemoryStorage::new();
        storage.set_item("k", "{not json").unwrap();
        let store = Store::new(storage, "k");
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_wrong_shape_reads_empty() {
        let mut storage = MemoryStorage::new();
        storage.set_item("k", r#"{"id":"1"}"#).unwrap();
        let store = Store::new(storage, "k");
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_unreadable_slot_reads_empty() {
        let tmp = tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let mut store = Store::new(FileStorage::new(&blocker), "k");
        assert!(store.storage().get_item("k").is_err());
        assert!(store.get_all().is_empty());
        assert!(matches!(store.set_all(&sample()), Err(NotesError::Io(_))));
    }

    #[test]
    fn test_write_back_is_idempotent() {
        let tmp = tempdir().unwrap();
        let mut store = Store::new(FileStorage::new(tmp.path()), "k");
        store.set_all(&sample()).unwrap();
        let before = store.export().unwrap();

        let notes = store.get_all();
        store.set_all(&notes).unwrap();
        assert_eq!(store.export().unwrap(), before);
    }

    #[test]
    fn test_clear_all_removes_key() {
        let mut store = Store::new(MemoryStorage::new(), "k");
        store.set_all(&sample()).unwrap();
        store.clear_all().unwrap();
        assert!(!store.storage().contains_key("k"));
        assert!(store.get_all().is_empty());
        // clearing twice is fine
        store.clear_all().unwrap();
    }
}
