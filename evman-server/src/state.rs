use evman_core::EventStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: EventStore,
}
