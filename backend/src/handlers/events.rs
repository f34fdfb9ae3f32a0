use axum::{extract::State, http::StatusCode, Json};
use shared::api::{EventInput, EventQuery, ListEventsResponse, Pagination};
use shared::models::Event;

use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiQuery, IdPath, ValidatedJson};
use crate::routes::AppState;

pub async fn list_events(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<EventQuery>,
) -> ApiResult<Json<ListEventsResponse>> {
    if let (Some(from), Some(to)) = (query.from, query.to) {
        if from > to {
            return Err(ApiError::bad_request("`from` must not be after `to`"));
        }
    }

    let page = state.events.list(&query).await?;
    let pagination = Pagination::new(query.page(), query.limit(), page.total);

    Ok(Json(ListEventsResponse {
        events: page.events,
        pagination,
    }))
}

pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<EventInput>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    let event = state.events.create(input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn get_event(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<Event>> {
    state
        .events
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Event"))
}

pub async fn update_event(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<EventInput>,
) -> ApiResult<Json<Event>> {
    let event = state
        .events
        .update(id, input)
        .await?
        .ok_or_else(|| ApiError::not_found("Event"))?;
    tracing::info!(event_id = %id, "event replaced");
    Ok(Json(event))
}

pub async fn delete_event(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<StatusCode> {
    if !state.events.delete(id).await? {
        return Err(ApiError::not_found("Event"));
    }
    tracing::info!(event_id = %id, "event deleted");
    Ok(StatusCode::NO_CONTENT)
}
