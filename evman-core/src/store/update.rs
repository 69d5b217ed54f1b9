//! Replace documents and patch their status.

use std::path::Path;

use chrono::Utc;

use super::write_document;
use crate::error::{StoreError, StoreResult};
use crate::event::{Event, EventDraft, EventStatus};

/// Replace the user-supplied fields of an existing document.
///
/// `id` and `createdAt` are preserved; `updatedAt` is bumped.
pub(super) fn replace(dir: &Path, id: &str, draft: EventDraft) -> StoreResult<Event> {
    let existing = super::list::find_by_id(dir, id)?
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
    let draft = draft.validated()?;

    let event = Event {
        id: existing.id,
        name: draft.name,
        description: draft.description,
        date: draft.date,
        time: draft.time,
        place: draft.place,
        status: draft.status,
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };

    write_document(dir, &event)?;
    Ok(event)
}

/// Update only the status field of an existing document.
pub(super) fn patch_status(dir: &Path, id: &str, status: EventStatus) -> StoreResult<Event> {
    let mut event = super::list::find_by_id(dir, id)?
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

    event.status = status;
    event.updated_at = Utc::now();

    write_document(dir, &event)?;
    Ok(event)
}
