use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Category of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Appointment,
    School,
    Family,
    Work,
    Sports,
    #[serde(rename = "annet")]
    Other,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown event type: {0}")]
pub struct UnknownEventType(pub String);

impl EventType {
    /// All types, in the order the event form offers them.
    pub const ALL: [EventType; 6] = [
        EventType::Family,
        EventType::Work,
        EventType::School,
        EventType::Appointment,
        EventType::Sports,
        EventType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Appointment => "appointment",
            EventType::School => "school",
            EventType::Family => "family",
            EventType::Work => "work",
            EventType::Sports => "sports",
            EventType::Other => "annet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Appointment => "Avtale",
            EventType::School => "Skole",
            EventType::Family => "Familie",
            EventType::Work => "Arbeid",
            EventType::Sports => "Sport",
            EventType::Other => "Annet",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            EventType::Sports => "event-blue",
            EventType::School => "event-green",
            EventType::Appointment => "event-purple",
            EventType::Family => "event-orange",
            EventType::Work => "event-red",
            EventType::Other => "event-green",
        }
    }
}

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A family member attending an event, referenced by roster id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
}

impl Attendee {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Calendar event as stored and served by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    /// Local wall-clock time, `HH:MM`
    pub time: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub reminder: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account holder in the `users` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
