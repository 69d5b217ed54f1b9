//! Delete event documents.

use std::path::Path;

use crate::error::{StoreError, StoreResult};

/// Remove the document for `id`, failing with `NotFound` if it never
/// existed.
pub(super) fn delete(dir: &Path, id: &str) -> StoreResult<()> {
    let path = super::document_path(dir, id);
    if !path.exists() {
        return Err(StoreError::NotFound(id.to_string()));
    }

    std::fs::remove_file(&path)?;
    Ok(())
}
