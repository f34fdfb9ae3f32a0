use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::family::is_roster_id;
use crate::models::{Attendee, Event, EventType, User};

pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const MAX_PAGE_LIMIT: u32 = 100;

// ============================================================================
// Event API Types
// ============================================================================

/// Body of `POST /api/events` and `PUT /api/events/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EventInput {
    #[validate(length(min = 1, max = 200), custom = "validate_not_blank")]
    pub title: String,

    pub date: NaiveDate,

    #[validate(custom = "validate_time")]
    pub time: String,

    #[serde(rename = "type")]
    pub event_type: EventType,

    #[serde(default)]
    #[validate(custom = "validate_attendees")]
    pub attendees: Vec<Attendee>,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    #[validate(length(max = 200))]
    pub location: Option<String>,

    #[serde(default)]
    pub reminder: bool,
}

impl EventInput {
    /// Trim text fields and turn empty optional text into `None`.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.description = non_empty(self.description);
        self.location = non_empty(self.location);
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Query string of `GET /api/events`. Blank parameters count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<u32>,
    #[serde(rename = "type", default, deserialize_with = "blank_as_none")]
    pub event_type: Option<EventType>,
    /// Inclusive lower bound
    #[serde(default, deserialize_with = "blank_as_none")]
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound
    #[serde(default, deserialize_with = "blank_as_none")]
    pub to: Option<NaiveDate>,
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl EventQuery {
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            ..Default::default()
        }
    }

    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT)
    }

    /// Whether `event` passes the type and date filters.
    pub fn matches(&self, event: &Event) -> bool {
        self.event_type.map_or(true, |t| event.event_type == t)
            && self.from.map_or(true, |from| event.date >= from)
            && self.to.map_or(true, |to| event.date <= to)
    }

    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(format!("page={}", page));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }
        if let Some(event_type) = self.event_type {
            params.push(format!("type={}", event_type.as_str()));
        }
        if let Some(from) = self.from {
            params.push(format!("from={}", from));
        }
        if let Some(to) = self.to {
            params.push(format!("to={}", to));
        }
        params.join("&")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub total_docs: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total_docs: u64) -> Self {
        let limit = limit.max(1);
        let pages = total_docs.div_ceil(u64::from(limit)).max(1);
        let total_pages = u32::try_from(pages).unwrap_or(u32::MAX);
        Self {
            page,
            limit,
            total_pages,
            total_docs,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        }
    }

    /// Number of records to skip for this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
    pub pagination: Pagination,
}

// ============================================================================
// User API Types
// ============================================================================

/// Body of `POST /api/users` and `PUT /api/users/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserInput {
    #[validate(length(min = 1, max = 200), custom = "validate_not_blank")]
    pub name: String,

    #[validate(email, length(max = 255))]
    pub email: String,
}

impl UserInput {
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<User>,
    pub total: usize,
}

// ============================================================================
// Error Types
// ============================================================================

/// Body of every non-2xx API response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

// ============================================================================
// Validators
// ============================================================================

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("blank", "must not be blank"));
    }
    Ok(())
}

/// Accepts 24-hour `HH:MM` only.
pub fn validate_time(value: &str) -> Result<(), ValidationError> {
    let well_formed = value.len() == 5
        && value.as_bytes()[2] == b':'
        && NaiveTime::parse_from_str(value, "%H:%M").is_ok();
    if !well_formed {
        return Err(invalid("time_format", "time must be HH:MM"));
    }
    Ok(())
}

/// Every attendee must be a distinct roster member.
pub fn validate_attendees(attendees: &[Attendee]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for attendee in attendees {
        if !is_roster_id(&attendee.name) {
            return Err(invalid(
                "unknown_attendee",
                "attendee is not a family member",
            ));
        }
        if !seen.insert(attendee.name.as_str()) {
            return Err(invalid("duplicate_attendee", "attendee listed twice"));
        }
    }
    Ok(())
}
