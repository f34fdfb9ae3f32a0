//! Storage traits for events and users.
//!
//! Handlers only see these traits, so the same router runs against
//! Postgres ([`crate::db::PgStore`]) or the in-memory store
//! ([`crate::memory::InMemoryStore`]).

use async_trait::async_trait;
use diesel_async::pooled_connection::deadpool::PoolError;
use shared::api::{EventInput, EventQuery, UserInput};
use shared::models::{Event, User};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database connection error")]
    Pool(#[from] PoolError),

    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("{0}")]
    Conflict(String),

    #[error("Stored record {id} is unreadable: {reason}")]
    Corrupt { id: Uuid, reason: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One page of events plus the number of events matching the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPage {
    pub events: Vec<Event>,
    pub total: u64,
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Events matching the query filters, ordered by date then time.
    async fn list(&self, query: &EventQuery) -> StoreResult<EventPage>;

    async fn get(&self, id: Uuid) -> StoreResult<Option<Event>>;

    async fn create(&self, input: EventInput) -> StoreResult<Event>;

    /// Full replacement. `None` when the event does not exist.
    async fn update(&self, id: Uuid, input: EventInput) -> StoreResult<Option<Event>>;

    /// Returns whether anything was deleted.
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, ordered by name.
    async fn list(&self) -> StoreResult<Vec<User>>;

    async fn get(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Fails with [`StoreError::Conflict`] when the email is taken.
    async fn create(&self, input: UserInput) -> StoreResult<User>;

    async fn update(&self, id: Uuid, input: UserInput) -> StoreResult<Option<User>>;

    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}

pub(crate) fn email_taken(email: &str) -> StoreError {
    StoreError::Conflict(format!("A user with email {} already exists", email))
}
