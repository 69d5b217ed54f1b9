//! Client-side application state.
//!
//! One explicit state object holds the in-memory mirror of the server's
//! event list, the create/edit form, the active filter tab, and the
//! connectivity state machine. It performs no I/O of its own, so the whole
//! state machine is testable without a server.

use chrono::{NaiveDate, NaiveTime};

use evman_core::{EventDraft, EventStatus};

use crate::client::RemoteEvent;

/// Backend connectivity, as last observed by a health probe.
///
/// `Disconnected` is entered from any failed probe and only left by an
/// explicit re-probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    Checking,
    Connected,
    Disconnected,
}

/// Which slice of the list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    All,
    Status(EventStatus),
}

impl Tab {
    pub fn matches(&self, status: EventStatus) -> bool {
        match self {
            Tab::All => true,
            Tab::Status(s) => *s == status,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Tab::All => "All Events".to_string(),
            Tab::Status(s) => format!("{} Events", s.label()),
        }
    }
}

impl std::str::FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Tab::All);
        }
        s.parse::<EventStatus>().map(Tab::Status)
    }
}

/// Form mode: creating a new event or editing an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Editing(String),
}

/// Raw form fields, held as a user would type them. Parsing happens only
/// in `validate`.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub name: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub place: String,
    pub status: EventStatus,
}

impl EventForm {
    /// Validate and parse the form into a write payload.
    ///
    /// Required: non-empty name and place, a parseable date not earlier
    /// than `today`. On failure no payload exists, so no network call can
    /// be made with invalid input.
    pub fn validate(&self, today: NaiveDate) -> Result<EventDraft, String> {
        let name = self.name.trim();
        let place = self.place.trim();

        if name.is_empty() || self.date.trim().is_empty() || place.is_empty() {
            return Err(
                "Please fill in all required fields: Event Name, Date, and Place.".to_string(),
            );
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| format!("Invalid date '{}'. Expected YYYY-MM-DD", self.date.trim()))?;

        if date < today {
            return Err("Please select a date in the future.".to_string());
        }

        let time = match self.time.trim() {
            "" => None,
            raw => Some(
                NaiveTime::parse_from_str(raw, "%H:%M")
                    .map_err(|_| format!("Invalid time '{}'. Expected HH:MM", raw))?,
            ),
        };

        let description = match self.description.trim() {
            "" => None,
            d => Some(d.to_string()),
        };

        Ok(EventDraft {
            name: name.to_string(),
            description,
            date,
            time,
            place: place.to_string(),
            status: self.status,
        })
    }
}

/// Per-status counts over the in-memory list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub upcoming: usize,
    pub success: usize,
    pub cancelled: usize,
}

/// The client application state.
#[derive(Default)]
pub struct App {
    pub events: Vec<RemoteEvent>,
    pub tab: Tab,
    pub form: EventForm,
    pub mode: Mode,
    pub connectivity: Connectivity,
    pub error: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the in-memory mirror after a fetch.
    pub fn set_events(&mut self, events: Vec<RemoteEvent>) {
        self.events = events;
    }

    pub fn set_connectivity(&mut self, connectivity: Connectivity) {
        self.connectivity = connectivity;
    }

    /// Mutations are only allowed while the backend is reachable.
    pub fn can_mutate(&self) -> bool {
        self.connectivity == Connectivity::Connected
    }

    /// Events visible under the active tab, in display order: the
    /// upcoming bucket first, ascending by date within each bucket.
    /// Recomputed from the list on every call, never stored.
    pub fn visible(&self) -> Vec<&RemoteEvent> {
        let mut shown: Vec<&RemoteEvent> = self
            .events
            .iter()
            .filter(|e| self.tab.matches(e.event.status))
            .collect();

        shown.sort_by(|a, b| {
            let a_upcoming = a.event.status == EventStatus::Upcoming;
            let b_upcoming = b.event.status == EventStatus::Upcoming;
            b_upcoming
                .cmp(&a_upcoming)
                .then(a.event.date.cmp(&b.event.date))
        });

        shown
    }

    /// Total and per-status counts over the whole in-memory list.
    pub fn stats(&self) -> Stats {
        let count = |status: EventStatus| {
            self.events
                .iter()
                .filter(|e| e.event.status == status)
                .count()
        };

        Stats {
            total: self.events.len(),
            upcoming: count(EventStatus::Upcoming),
            success: count(EventStatus::Success),
            cancelled: count(EventStatus::Cancelled),
        }
    }

    /// Pre-fill the form from an existing event and switch to edit mode.
    pub fn begin_edit(&mut self, remote: &RemoteEvent) {
        let event = &remote.event;
        self.form = EventForm {
            name: event.name.clone(),
            description: event.description.clone().unwrap_or_default(),
            date: event.date.to_string(),
            time: event
                .time
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default(),
            place: event.place.clone(),
            status: event.status,
        };
        self.mode = Mode::Editing(event.id.clone());
    }

    /// Drop in-progress edits and return to create mode. No network call
    /// is involved.
    pub fn cancel_edit(&mut self) {
        self.form = EventForm::default();
        self.mode = Mode::Idle;
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Take the pending error for display, dismissing the banner.
    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }
}
