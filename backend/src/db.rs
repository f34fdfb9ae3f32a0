use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::{
    pooled_connection::{deadpool::Pool, AsyncDieselConnectionManager},
    AsyncPgConnection, RunQueryDsl,
};
use shared::api::{EventInput, EventQuery, Pagination, UserInput};
use shared::models::{Event, User};
use uuid::Uuid;

use crate::models::{EventChanges, EventRow, NewEventRow, UserChanges, UserRow};
use crate::repository::{
    email_taken, EventPage, EventRepository, StoreError, StoreResult, UserRepository,
};
use crate::schema::{events, users};

pub type DbPool = Pool<AsyncPgConnection>;

pub fn establish_connection_pool(database_url: &str, max_size: usize) -> anyhow::Result<DbPool> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    let pool = Pool::builder(manager)
        .max_size(max_size)
        .build()
        .context("Failed to create database pool")?;

    Ok(pool)
}

/// Postgres-backed store for events and users.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Events matching the type and date filters of `query`.
fn filtered_events(query: &EventQuery) -> events::BoxedQuery<'static, Pg> {
    let mut q = events::table.into_boxed();
    if let Some(kind) = query.event_type {
        q = q.filter(events::event_type.eq(kind.as_str()));
    }
    if let Some(from) = query.from {
        q = q.filter(events::event_date.ge(from));
    }
    if let Some(to) = query.to {
        q = q.filter(events::event_date.le(to));
    }
    q
}

fn to_events(rows: Vec<EventRow>) -> StoreResult<Vec<Event>> {
    rows.into_iter().map(Event::try_from).collect()
}

fn unique_email(err: DieselError, email: &str) -> StoreError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => email_taken(email),
        other => other.into(),
    }
}

#[async_trait]
impl EventRepository for PgStore {
    async fn list(&self, query: &EventQuery) -> StoreResult<EventPage> {
        let mut conn = self.pool.get().await?;

        let total: i64 = filtered_events(query).count().get_result(&mut conn).await?;
        let page = Pagination::new(query.page(), query.limit(), total.max(0) as u64);

        let rows = filtered_events(query)
            .order_by((
                events::event_date.asc(),
                events::event_time.asc(),
                events::created_at.asc(),
                events::id.asc(),
            ))
            .limit(i64::from(page.limit))
            .offset(page.offset() as i64)
            .select(EventRow::as_select())
            .load(&mut conn)
            .await?;

        Ok(EventPage {
            events: to_events(rows)?,
            total: page.total_docs,
        })
    }

    async fn get(&self, id: Uuid) -> StoreResult<Option<Event>> {
        let mut conn = self.pool.get().await?;

        let row = events::table
            .find(id)
            .select(EventRow::as_select())
            .first(&mut conn)
            .await
            .optional()?;

        row.map(Event::try_from).transpose()
    }

    async fn create(&self, input: EventInput) -> StoreResult<Event> {
        let mut conn = self.pool.get().await?;
        let now = Utc::now();

        let new_event = NewEventRow {
            id: Uuid::new_v4(),
            created_at: now,
            fields: EventChanges::new(input, now),
        };
        let row = diesel::insert_into(events::table)
            .values(&new_event)
            .returning(EventRow::as_returning())
            .get_result(&mut conn)
            .await?;

        tracing::info!(event_id = %row.id, date = %row.event_date, "event created");
        Event::try_from(row)
    }

    async fn update(&self, id: Uuid, input: EventInput) -> StoreResult<Option<Event>> {
        let mut conn = self.pool.get().await?;

        let changes = EventChanges::new(input, Utc::now());
        let row = diesel::update(events::table.find(id))
            .set(&changes)
            .returning(EventRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()?;

        row.map(Event::try_from).transpose()
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let mut conn = self.pool.get().await?;

        let deleted = diesel::delete(events::table.find(id))
            .execute(&mut conn)
            .await?;

        Ok(deleted > 0)
    }
}

#[async_trait]
impl UserRepository for PgStore {
    async fn list(&self) -> StoreResult<Vec<User>> {
        let mut conn = self.pool.get().await?;

        let rows = users::table
            .order_by((users::name.asc(), users::id.asc()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get(&self, id: Uuid) -> StoreResult<Option<User>> {
        let mut conn = self.pool.get().await?;

        let row = users::table
            .find(id)
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()?;

        Ok(row.map(User::from))
    }

    async fn create(&self, input: UserInput) -> StoreResult<User> {
        let mut conn = self.pool.get().await?;
        let email = input.email.clone();

        let row = diesel::insert_into(users::table)
            .values(&UserRow::new(input, Utc::now()))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| unique_email(e, &email))?;

        Ok(row.into())
    }

    async fn update(&self, id: Uuid, input: UserInput) -> StoreResult<Option<User>> {
        let mut conn = self.pool.get().await?;
        let email = input.email.clone();

        let row = diesel::update(users::table.find(id))
            .set(&UserChanges::new(input, Utc::now()))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|e| unique_email(e, &email))?;

        Ok(row.map(User::from))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let mut conn = self.pool.get().await?;

        let deleted = diesel::delete(users::table.find(id))
            .execute(&mut conn)
            .await?;

        Ok(deleted > 0)
    }
}
