//! Insert new event documents.

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use super::write_document;
use crate::error::StoreResult;
use crate::event::{Event, EventDraft};

/// Validate the draft and write it as a new document with a fresh id.
///
/// `createdAt` and `updatedAt` start out equal.
pub(super) fn insert(dir: &Path, draft: EventDraft) -> StoreResult<Event> {
    let draft = draft.validated()?;
    let now = Utc::now();

    let event = Event {
        id: Uuid::new_v4().to_string(),
        name: draft.name,
        description: draft.description,
        date: draft.date,
        time: draft.time,
        place: draft.place,
        status: draft.status,
        created_at: now,
        updated_at: now,
    };

    write_document(dir, &event)?;
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::event::EventStatus;
    use chrono::NaiveDate;

    fn make_draft() -> EventDraft {
        EventDraft {
            name: "Standup".to_string(),
            description: Some("Daily sync".to_string()),
            date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
            time: None,
            place: "Room A".to_string(),
            status: EventStatus::Upcoming,
        }
    }

    #[test]
    fn insert_assigns_id_and_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let event = insert(dir.path(), make_draft()).unwrap();

        assert!(!event.id.is_empty());
        assert_eq!(event.created_at, event.updated_at);
        assert!(super::super::document_path(dir.path(), &event.id).exists());
    }

    #[test]
    fn inserted_ids_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let a = insert(dir.path(), make_draft()).unwrap();
        let b = insert(dir.path(), make_draft()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn insert_rejects_missing_required_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut draft = make_draft();
        draft.place = "  ".to_string();

        let err = insert(dir.path(), draft).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn insert_stores_trimmed_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut draft = make_draft();
        draft.name = "  Standup  ".to_string();

        let event = insert(dir.path(), draft).unwrap();
        assert_eq!(event.name, "Standup");

        let on_disk =
            super::super::read_document(&super::super::document_path(dir.path(), &event.id))
                .unwrap();
        assert_eq!(on_disk, event);
    }
}
