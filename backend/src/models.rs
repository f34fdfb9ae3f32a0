// Database models for Diesel
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use shared::api::{EventInput, UserInput};
use shared::models::{Attendee, Event, User};
use uuid::Uuid;

use crate::json_wrapper::JsonWrapper;
use crate::repository::StoreError;
use crate::schema::{events, users};

/// Database representation of events
/// Attendees are a JSON array stored as TEXT
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EventRow {
    pub id: Uuid,
    pub title: String,
    pub event_date: NaiveDate,
    pub event_time: String,
    pub event_type: String,
    pub attendees: JsonWrapper<Vec<Attendee>>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub reminder: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = StoreError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let event_type = row.event_type.parse().map_err(|e| StoreError::Corrupt {
            id: row.id,
            reason: format!("{}", e),
        })?;
        Ok(Event {
            id: row.id,
            title: row.title,
            date: row.event_date,
            time: row.event_time,
            event_type,
            attendees: row.attendees.into_inner(),
            description: row.description,
            location: row.location,
            reminder: row.reminder,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Columns written on both insert and full replacement
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = events)]
#[diesel(treat_none_as_null = true)]
pub struct EventChanges {
    pub title: String,
    pub event_date: NaiveDate,
    pub event_time: String,
    pub event_type: String,
    pub attendees: JsonWrapper<Vec<Attendee>>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub reminder: bool,
    pub updated_at: DateTime<Utc>,
}

impl EventChanges {
    pub fn new(input: EventInput, now: DateTime<Utc>) -> Self {
        Self {
            title: input.title,
            event_date: input.date,
            event_time: input.time,
            event_type: input.event_type.as_str().to_string(),
            attendees: JsonWrapper(input.attendees),
            description: input.description,
            location: input.location,
            reminder: input.reminder,
            updated_at: now,
        }
    }
}

/// Insertable struct for new events
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = events)]
pub struct NewEventRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[diesel(embed)]
    pub fields: EventChanges,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    pub fn new(input: UserInput, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
    pub updated_at: DateTime<Utc>,
}

impl UserChanges {
    pub fn new(input: UserInput, now: DateTime<Utc>) -> Self {
        Self {
            name: input.name,
            email: input.email,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::EventType;

    fn row(event_type: &str) -> EventRow {
        EventRow {
            id: Uuid::new_v4(),
            title: "Svømming".to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(),
            event_time: "18:00".to_string(),
            event_type: event_type.to_string(),
            attendees: JsonWrapper(vec![Attendee::new("noomi")]),
            description: None,
            location: Some("Badeland".to_string()),
            reminder: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_into_event() {
        let event = Event::try_from(row("sports")).unwrap();
        assert_eq!(event.event_type, EventType::Sports);
        assert_eq!(event.time, "18:00");
        assert_eq!(event.attendees, vec![Attendee::new("noomi")]);
        assert!(event.reminder);
    }

    #[test]
    fn test_unknown_type_is_corrupt() {
        let err = Event::try_from(row("party")).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }
}
