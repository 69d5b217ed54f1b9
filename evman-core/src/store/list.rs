//! Read event documents from the data directory.

use std::path::Path;

use crate::error::StoreResult;
use crate::event::Event;

/// All events in the collection, ordered by creation time for
/// deterministic listings. Files that are not parseable event documents
/// are skipped.
pub(super) fn find_all(dir: &Path) -> StoreResult<Vec<Event>> {
    let mut events: Vec<Event> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|path| super::read_document(&path).ok())
        .collect();

    events.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    Ok(events)
}

pub(super) fn find_by_id(dir: &Path, id: &str) -> StoreResult<Option<Event>> {
    let path = super::document_path(dir, id);
    if !path.exists() {
        return Ok(None);
    }

    super::read_document(&path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventDraft, EventStatus};
    use chrono::NaiveDate;

    fn draft(name: &str) -> EventDraft {
        EventDraft {
            name: name.to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
            time: None,
            place: "Room A".to_string(),
            status: EventStatus::Upcoming,
        }
    }

    #[test]
    fn find_all_returns_every_document() {
        let dir = tempfile::tempdir().unwrap();
        super::super::create::insert(dir.path(), draft("a")).unwrap();
        super::super::create::insert(dir.path(), draft("b")).unwrap();

        let events = find_all(dir.path()).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn find_all_skips_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        super::super::create::insert(dir.path(), draft("a")).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not an event").unwrap();
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();

        let events = find_all(dir.path()).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn find_by_id_misses_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_by_id(dir.path(), "nope").unwrap().is_none());

        let event = super::super::create::insert(dir.path(), draft("a")).unwrap();
        let found = find_by_id(dir.path(), &event.id).unwrap().unwrap();
        assert_eq!(found, event);
    }
}
