use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handlers::{events, family, health, users};
use crate::repository::{EventRepository, UserRepository};

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// One store serving both collections.
    pub fn from_store<S>(store: S) -> Self
    where
        S: EventRepository + UserRepository + 'static,
    {
        let store = Arc::new(store);
        Self {
            events: store.clone(),
            users: store,
        }
    }
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Event routes
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/api/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        // User routes
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Roster
        .route("/api/family-members", get(family::list_family_members))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde::de::DeserializeOwned;
    use serde_json::{json, Value};
    use shared::api::{ErrorResponse, ListEventsResponse, ListUsersResponse};
    use shared::family::FamilyMember;
    use shared::models::{Event, User};
    use tower::ServiceExt;

    fn app() -> Router {
        api_routes().with_state(AppState::from_store(InMemoryStore::new()))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn read<T: DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn event_body(title: &str, date: &str, time: &str) -> Value {
        json!({
            "title": title,
            "date": date,
            "time": time,
            "type": "family",
            "attendees": [{"name": "marcus"}, {"name": "noomi"}]
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_event_crud_roundtrip() {
        let app = app();

        let response = send(
            &app,
            Method::POST,
            "/api/events",
            Some(event_body("Middag hos bestemor", "2026-10-18", "17:00")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Event = read(response).await;
        assert_eq!(created.attendees.len(), 2);
        assert!(!created.reminder);

        let uri = format!("/api/events/{}", created.id);
        let fetched: Event = read(send(&app, Method::GET, &uri, None).await).await;
        assert_eq!(fetched, created);

        let mut replacement = event_body("Middag hjemme", "2026-10-19", "18:30");
        replacement["type"] = json!("annet");
        replacement["attendees"] = json!([]);
        let response = send(&app, Method::PUT, &uri, Some(replacement)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated: Event = read(response).await;
        assert_eq!(updated.title, "Middag hjemme");
        assert!(updated.attendees.is_empty());
        assert_eq!(updated.created_at, created.created_at);

        let response = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let response = send(&app, Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_events_paginates_and_filters() {
        let app = app();
        for day in 1..=12 {
            let date = format!("2026-10-{:02}", day);
            send(&app, Method::POST, "/api/events", Some(event_body("Lekser", &date, "16:00"))).await;
        }

        let page: ListEventsResponse = read(send(&app, Method::GET, "/api/events", None).await).await;
        assert_eq!(page.events.len(), 10);
        assert_eq!(page.pagination.total_docs, 12);
        assert_eq!(page.pagination.total_pages, 2);
        assert!(page.pagination.has_next_page);
        assert!(!page.pagination.has_prev_page);

        let page: ListEventsResponse = read(
            send(&app, Method::GET, "/api/events?page=2&limit=10", None).await,
        )
        .await;
        assert_eq!(page.events.len(), 2);
        assert!(page.pagination.has_prev_page);

        let page: ListEventsResponse = read(
            send(&app, Method::GET, "/api/events?from=2026-10-05&to=2026-10-06", None).await,
        )
        .await;
        assert_eq!(page.pagination.total_docs, 2);

        let page: ListEventsResponse = read(
            send(&app, Method::GET, "/api/events?type=work", None).await,
        )
        .await;
        assert!(page.events.is_empty());
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[tokio::test]
    async fn test_list_events_ignores_blank_filters() {
        let app = app();
        send(&app, Method::POST, "/api/events", Some(event_body("Middag", "2026-10-18", "17:00"))).await;
        send(&app, Method::POST, "/api/events", Some(event_body("Fotball", "2026-10-19", "18:00"))).await;

        for uri in [
            "/api/events?type=&from=&to=",
            "/api/events?page=&limit=",
            "/api/events?from=",
        ] {
            let response = send(&app, Method::GET, uri, None).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
            let page: ListEventsResponse = read(response).await;
            assert_eq!(page.pagination.total_docs, 2, "{}", uri);
            assert_eq!(page.pagination.page, 1);
        }
    }

    #[tokio::test]
    async fn test_bad_requests() {
        let app = app();

        let response = send(&app, Method::GET, "/api/events/42", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = read(response).await;
        assert!(body.error.contains("42"));

        let response = send(&app, Method::GET, "/api/events?type=party", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(
            &app,
            Method::GET,
            "/api/events?from=2026-10-10&to=2026-10-01",
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let missing_time = json!({"title": "Uten tid", "date": "2026-10-18", "type": "family"});
        let response = send(&app, Method::POST, "/api/events", Some(missing_time)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bad_time = event_body("Sen kveld", "2026-10-18", "25:00");
        let response = send(&app, Method::POST, "/api/events", Some(bad_time)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = read(response).await;
        assert_eq!(body.error, "Validation failed");
        assert!(body.details.unwrap().contains("time"));

        let mut stranger = event_body("Besøk", "2026-10-18", "12:00");
        stranger["attendees"] = json!([{"name": "Jake"}]);
        let response = send(&app, Method::POST, "/api/events", Some(stranger)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let mut not_array = event_body("Besøk", "2026-10-18", "12:00");
        not_array["attendees"] = json!("marcus");
        let response = send(&app, Method::POST, "/api/events", Some(not_array)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_missing_event() {
        let uri = format!("/api/events/{}", uuid::Uuid::new_v4());
        let response = send(
            &app(),
            Method::PUT,
            &uri,
            Some(event_body("Ingenting", "2026-10-18", "10:00")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_users_crud_and_conflict() {
        let app = app();
        let body = json!({"name": "Marita", "email": "Marita@Example.com"});

        let response = send(&app, Method::POST, "/api/users", Some(body.clone())).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let user: User = read(response).await;
        assert_eq!(user.email, "marita@example.com");

        let response = send(&app, Method::POST, "/api/users", Some(body)).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = send(
            &app,
            Method::POST,
            "/api/users",
            Some(json!({"name": "Lars", "email": "lars"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let list: ListUsersResponse = read(send(&app, Method::GET, "/api/users", None).await).await;
        assert_eq!(list.total, 1);

        let uri = format!("/api/users/{}", user.id);
        let updated: User = read(
            send(
                &app,
                Method::PUT,
                &uri,
                Some(json!({"name": "Marita H", "email": "marita@example.com"})),
            )
            .await,
        )
        .await;
        assert_eq!(updated.name, "Marita H");

        let response = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let response = send(&app, Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_family_members() {
        let members: Vec<FamilyMember> =
            read(send(&app(), Method::GET, "/api/family-members", None).await).await;
        assert_eq!(members.len(), 7);
        assert_eq!(members[0].id, "marcus");
    }

    #[tokio::test]
    async fn test_unknown_api_route() {
        let response = send(&app(), Method::GET, "/api/nothing", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
