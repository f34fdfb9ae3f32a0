//! In-process store used when no database is configured, and by the tests.

use async_trait::async_trait;
use chrono::Utc;
use shared::api::{EventInput, EventQuery, Pagination, UserInput};
use shared::models::{Event, User};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::repository::{
    email_taken, EventPage, EventRepository, StoreResult, UserRepository,
};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    events: RwLock<HashMap<Uuid, Event>>,
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn list(&self, query: &EventQuery) -> StoreResult<EventPage> {
        let events = self.events.read().await;

        let mut matching: Vec<&Event> = events.values().filter(|e| query.matches(e)).collect();
        matching.sort_by(|a, b| {
            (a.date, &a.time, a.created_at, a.id).cmp(&(b.date, &b.time, b.created_at, b.id))
        });

        let page = Pagination::new(query.page(), query.limit(), matching.len() as u64);
        let events = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .cloned()
            .collect();

        Ok(EventPage {
            events,
            total: page.total_docs,
        })
    }

    async fn get(&self, id: Uuid) -> StoreResult<Option<Event>> {
        Ok(self.events.read().await.get(&id).cloned())
    }

    async fn create(&self, input: EventInput) -> StoreResult<Event> {
        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            title: input.title,
            date: input.date,
            time: input.time,
            event_type: input.event_type,
            attendees: input.attendees,
            description: input.description,
            location: input.location,
            reminder: input.reminder,
            created_at: now,
            updated_at: now,
        };
        self.events.write().await.insert(event.id, event.clone());
        tracing::info!(event_id = %event.id, date = %event.date, "event created");
        Ok(event)
    }

    async fn update(&self, id: Uuid, input: EventInput) -> StoreResult<Option<Event>> {
        let mut events = self.events.write().await;
        let Some(event) = events.get_mut(&id) else {
            return Ok(None);
        };
        event.title = input.title;
        event.date = input.date;
        event.time = input.time;
        event.event_type = input.event_type;
        event.attendees = input.attendees;
        event.description = input.description;
        event.location = input.location;
        event.reminder = input.reminder;
        event.updated_at = Utc::now();
        Ok(Some(event.clone()))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.events.write().await.remove(&id).is_some())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self) -> StoreResult<Vec<User>> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));
        Ok(users)
    }

    async fn get(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn create(&self, input: UserInput) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == input.email) {
            return Err(email_taken(&input.email));
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: Uuid, input: UserInput) -> StoreResult<Option<User>> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.id != id && u.email == input.email) {
            return Err(email_taken(&input.email));
        }
        let Some(user) = users.get_mut(&id) else {
            return Ok(None);
        };
        user.name = input.name;
        user.email = input.email;
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.users.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::StoreError;
    use chrono::NaiveDate;
    use shared::models::{Attendee, EventType};

    fn input(title: &str, day: u32, time: &str, event_type: EventType) -> EventInput {
        EventInput {
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            time: time.to_string(),
            event_type,
            attendees: vec![Attendee::new("marita")],
            description: None,
            location: None,
            reminder: false,
        }
    }

    #[tokio::test]
    async fn test_list_sorted_by_date_then_time() {
        let store = InMemoryStore::new();
        EventRepository::create(&store, input("C", 20, "08:00", EventType::Work)).await.unwrap();
        EventRepository::create(&store, input("B", 18, "19:00", EventType::Family)).await.unwrap();
        EventRepository::create(&store, input("A", 18, "07:30", EventType::School)).await.unwrap();

        let page = EventRepository::list(&store, &EventQuery::default()).await.unwrap();
        let titles: Vec<_> = page.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn test_list_filters_and_pages() {
        let store = InMemoryStore::new();
        for day in 1..=25 {
            EventRepository::create(&store, input("Trening", day, "17:00", EventType::Sports)).await.unwrap();
        }
        EventRepository::create(&store, input("Møte", 10, "09:00", EventType::Work)).await.unwrap();

        let query = EventQuery {
            page: Some(2),
            event_type: Some(EventType::Sports),
            ..Default::default()
        };
        let page = EventRepository::list(&store, &query).await.unwrap();
        assert_eq!(page.total, 25);
        assert_eq!(page.events.len(), 10);
        assert_eq!(page.events[0].date.to_string(), "2026-10-11");

        let query = EventQuery::between(
            NaiveDate::from_ymd_opt(2026, 10, 10).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 11).unwrap(),
        );
        let page = EventRepository::list(&store, &query).await.unwrap();
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn test_paging_through_tied_events_visits_each_once() {
        let store = InMemoryStore::new();
        let mut created = Vec::new();
        for title in ["a", "b", "c", "d", "e"] {
            let event = EventRepository::create(&store, input(title, 18, "17:00", EventType::Family))
                .await
                .unwrap();
            created.push(event.id);
        }

        let mut seen = Vec::new();
        for page in 1..=3 {
            let query = EventQuery {
                page: Some(page),
                limit: Some(2),
                ..Default::default()
            };
            let result = EventRepository::list(&store, &query).await.unwrap();
            seen.extend(result.events.iter().map(|e| e.id));
        }

        assert_eq!(seen.len(), 5);
        created.sort();
        let mut sorted = seen.clone();
        sorted.sort();
        assert_eq!(sorted, created);

        let again = EventRepository::list(&store, &EventQuery { limit: Some(5), ..Default::default() })
            .await
            .unwrap();
        let ids: Vec<_> = again.events.iter().map(|e| e.id).collect();
        assert_eq!(ids, seen);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let store = InMemoryStore::new();
        let missing = Uuid::new_v4();
        let replaced = EventRepository::update(&store, missing, input("X", 1, "10:00", EventType::Other))
            .await
            .unwrap();
        assert!(replaced.is_none());
        assert!(!EventRepository::delete(&store, missing).await.unwrap());

        let event = EventRepository::create(&store, input("X", 1, "10:00", EventType::Other))
            .await
            .unwrap();
        let replaced = EventRepository::update(&store, event.id, input("Y", 2, "11:00", EventType::Family))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(replaced.title, "Y");
        assert_eq!(replaced.created_at, event.created_at);
        assert!(EventRepository::delete(&store, event.id).await.unwrap());
        assert!(EventRepository::get(&store, event.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = InMemoryStore::new();
        let marita = UserInput {
            name: "Marita".to_string(),
            email: "marita@example.com".to_string(),
        };
        let first = UserRepository::create(&store, marita.clone()).await.unwrap();
        let err = UserRepository::create(&store, marita.clone()).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));

        // keeping your own email is fine
        let same = UserRepository::update(&store, first.id, marita).await.unwrap();
        assert!(same.is_some());
    }
}
