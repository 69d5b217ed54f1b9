//! Event types shared across the evman ecosystem.
//!
//! An `Event` is a stored document; an `EventDraft` is the write payload
//! (everything the client supplies, without the store-managed fields).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// A bookkept event document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Calendar date of the event (ISO `YYYY-MM-DD` on the wire)
    pub date: NaiveDate,
    /// Optional time of day, serialized as "HH:MM"
    #[serde(default, with = "hhmm", skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    pub place: String,
    #[serde(default)]
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Long-form rendering of `date` (e.g. "Thursday, March 20, 2025").
    ///
    /// Computed once at read time by the API layer; the stored document and
    /// all filtering/sorting use the raw `date`.
    pub fn display_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

/// The write payload for create and replace operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    #[serde(default, with = "hhmm", skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    pub place: String,
    #[serde(default)]
    pub status: EventStatus,
}

impl EventDraft {
    /// Check required fields, returning the draft with name/place trimmed.
    ///
    /// Stored documents never hold padded or blank values: an empty
    /// description collapses to `None`.
    pub fn validated(mut self) -> StoreResult<Self> {
        self.name = self.name.trim().to_string();
        self.place = self.place.trim().to_string();

        if self.name.is_empty() {
            return Err(StoreError::Validation("name is required".into()));
        }
        if self.place.is_empty() {
            return Err(StoreError::Validation("place is required".into()));
        }

        self.description = self.description.take().and_then(|d| {
            let trimmed = d.trim().to_string();
            if trimmed.is_empty() { None } else { Some(trimmed) }
        });

        Ok(self)
    }
}

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Success,
    Cancelled,
}

impl EventStatus {
    pub const ALL: [EventStatus; 3] = [
        EventStatus::Upcoming,
        EventStatus::Success,
        EventStatus::Cancelled,
    ];

    /// Wire value of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Success => "success",
            EventStatus::Cancelled => "cancelled",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Success => "Completed",
            EventStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(EventStatus::Upcoming),
            "success" => Ok(EventStatus::Success),
            "cancelled" => Ok(EventStatus::Cancelled),
            other => Err(format!(
                "Unknown status '{}'. Expected upcoming, success or cancelled",
                other
            )),
        }
    }
}

/// Serialize `Option<NaiveTime>` as "HH:MM", the wire format of a time input.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => NaiveTime::parse_from_str(s, FORMAT)
                // Time inputs sometimes include seconds
                .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_draft() -> EventDraft {
        EventDraft {
            name: "Standup".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2030, 3, 20).unwrap(),
            time: None,
            place: "Room A".to_string(),
            status: EventStatus::Upcoming,
        }
    }

    #[test]
    fn display_date_long_form() {
        let event = Event {
            id: "e1".to_string(),
            name: "Standup".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
            time: None,
            place: "Room A".to_string(),
            status: EventStatus::Upcoming,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(event.display_date(), "Thursday, March 20, 2025");
    }

    #[test]
    fn validated_trims_fields() {
        let mut draft = make_draft();
        draft.name = "  Standup  ".to_string();
        draft.place = " Room A ".to_string();
        draft.description = Some("   ".to_string());

        let draft = draft.validated().unwrap();
        assert_eq!(draft.name, "Standup");
        assert_eq!(draft.place, "Room A");
        assert_eq!(draft.description, None);
    }

    #[test]
    fn validated_rejects_blank_name() {
        let mut draft = make_draft();
        draft.name = "   ".to_string();
        assert!(matches!(
            draft.validated(),
            Err(crate::error::StoreError::Validation(_))
        ));
    }

    #[test]
    fn validated_rejects_blank_place() {
        let mut draft = make_draft();
        draft.place = String::new();
        assert!(matches!(
            draft.validated(),
            Err(crate::error::StoreError::Validation(_))
        ));
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EventStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        assert_eq!(
            serde_json::from_str::<EventStatus>("\"success\"").unwrap(),
            EventStatus::Success
        );
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!(serde_json::from_str::<EventStatus>("\"done\"").is_err());
        assert!("done".parse::<EventStatus>().is_err());
    }

    #[test]
    fn time_round_trips_as_hhmm() {
        let mut draft = make_draft();
        draft.time = Some(NaiveTime::from_hms_opt(14, 30, 0).unwrap());

        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"time\":\"14:30\""));

        let back: EventDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back.time, draft.time);
    }

    #[test]
    fn time_accepts_seconds_and_omission() {
        let with_seconds: EventDraft = serde_json::from_str(
            r#"{"name":"n","date":"2030-01-01","place":"p","time":"09:15:00"}"#,
        )
        .unwrap();
        assert_eq!(
            with_seconds.time,
            Some(NaiveTime::from_hms_opt(9, 15, 0).unwrap())
        );

        let without: EventDraft =
            serde_json::from_str(r#"{"name":"n","date":"2030-01-01","place":"p"}"#).unwrap();
        assert_eq!(without.time, None);
        assert_eq!(without.status, EventStatus::Upcoming);
    }
}
