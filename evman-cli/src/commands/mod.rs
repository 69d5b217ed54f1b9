pub mod add;
pub mod delete;
pub mod edit;
pub mod journal;
pub mod list;
pub mod mark;
pub mod retry;

use anyhow::Result;

use evman_core::EventDraft;

use crate::app::{App, Connectivity, Mode};
use crate::client::{Client, RemoteEvent};

/// Probe the backend once and map the outcome onto the connectivity
/// states.
pub(crate) async fn probe(client: &Client) -> Connectivity {
    match client.health().await {
        Ok(_) => Connectivity::Connected,
        Err(_) => Connectivity::Disconnected,
    }
}

/// Submit the form payload: replace in edit mode, create otherwise.
/// Either way the form returns to idle afterwards.
pub(crate) async fn submit(
    app: &mut App,
    client: &Client,
    draft: &EventDraft,
) -> Result<RemoteEvent> {
    let saved = match &app.mode {
        Mode::Editing(id) => client.update_event(id, draft).await?,
        Mode::Idle => client.create_event(draft).await?,
    };

    app.cancel_edit();
    Ok(saved)
}
