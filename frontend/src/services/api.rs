use gloo_net::http::{Request, Response};
use shared::api::{ErrorResponse, EventInput, EventQuery, ListEventsResponse, MAX_PAGE_LIMIT};
use shared::models::Event;
use uuid::Uuid;

const API_BASE_URL: &str = "/api";

pub struct ApiService;

impl ApiService {
    pub async fn list_events(query: &EventQuery) -> Result<ListEventsResponse, String> {
        let mut url = format!("{}/events", API_BASE_URL);
        let params = query.to_query_string();
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params);
        }

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Nettverksfeil: {}", e))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| format!("Kunne ikke lese svaret: {}", e))
    }

    /// Every event matching `query`, following pagination until the last page.
    pub async fn list_all_events(mut query: EventQuery) -> Result<Vec<Event>, String> {
        query.limit = Some(MAX_PAGE_LIMIT);

        let mut events = Vec::new();
        let mut page = 1;
        loop {
            query.page = Some(page);
            let response = Self::list_events(&query).await?;
            events.extend(response.events);
            if !response.pagination.has_next_page {
                break;
            }
            page += 1;
        }

        tracing::debug!(count = events.len(), pages = page, "events loaded");
        Ok(events)
    }

    pub async fn create_event(input: &EventInput) -> Result<Event, String> {
        let url = format!("{}/events", API_BASE_URL);

        let response = Request::post(&url)
            .json(input)
            .map_err(|e| format!("Kunne ikke sende hendelsen: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Nettverksfeil: {}", e))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| format!("Kunne ikke lese svaret: {}", e))
    }

    pub async fn delete_event(id: Uuid) -> Result<(), String> {
        let url = format!("{}/events/{}", API_BASE_URL, id);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| format!("Nettverksfeil: {}", e))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }
        Ok(())
    }
}

/// The server's `{ error, details }` body as one line, or the bare status.
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(ErrorResponse {
            error,
            details: Some(details),
        }) => format!("{} ({})", error, details),
        Ok(ErrorResponse { error, .. }) => error,
        Err(_) => format!("HTTP-feil: {}", status),
    }
}
