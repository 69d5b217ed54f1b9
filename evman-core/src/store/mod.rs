//! File-backed document store for events.
//!
//! The collection is a flat directory of JSON documents, one per event,
//! named `<id>.json`. All operations are single-document; concurrent
//! writers are not coordinated (last write wins).

mod create;
mod delete;
mod list;
mod update;

use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::event::{Event, EventDraft, EventStatus};

/// Handle to the event collection in a data directory.
#[derive(Debug, Clone)]
pub struct EventStore {
    dir: PathBuf,
}

impl EventStore {
    /// Open the store, creating the data directory if missing.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(EventStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Check that the backing directory is still reachable.
    pub fn probe(&self) -> bool {
        std::fs::read_dir(&self.dir).is_ok()
    }

    /// Validate the draft and insert it as a new document with a fresh id.
    pub fn insert(&self, draft: EventDraft) -> StoreResult<Event> {
        create::insert(&self.dir, draft)
    }

    /// All events in the collection, ordered by creation time.
    pub fn find_all(&self) -> StoreResult<Vec<Event>> {
        list::find_all(&self.dir)
    }

    pub fn find_by_id(&self, id: &str) -> StoreResult<Option<Event>> {
        list::find_by_id(&self.dir, id)
    }

    /// Replace the document's user-supplied fields, preserving id and
    /// creation time.
    pub fn replace(&self, id: &str, draft: EventDraft) -> StoreResult<Event> {
        update::replace(&self.dir, id, draft)
    }

    /// Update only the status field.
    pub fn patch_status(&self, id: &str, status: EventStatus) -> StoreResult<Event> {
        update::patch_status(&self.dir, id, status)
    }

    pub fn delete(&self, id: &str) -> StoreResult<()> {
        delete::delete(&self.dir, id)
    }
}

pub(crate) fn document_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{}.json", id))
}

pub(crate) fn write_document(dir: &Path, event: &Event) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(event)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;

    std::fs::write(document_path(dir, &event.id), json)?;
    Ok(())
}

pub(crate) fn read_document(path: &Path) -> StoreResult<Event> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| StoreError::Serialization(e.to_string()))
}
