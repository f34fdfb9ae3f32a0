//! Request extractors that reject with [`ApiError`] instead of axum's
//! plain-text rejections, so every 4xx carries the JSON error body.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use shared::api::{EventInput, UserInput};
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;

/// Cleanup applied to a request body before validation.
pub trait Sanitize {
    fn sanitize(self) -> Self;
}

impl Sanitize for EventInput {
    fn sanitize(self) -> Self {
        self.normalized()
    }
}

impl Sanitize for UserInput {
    fn sanitize(self) -> Self {
        self.normalized()
    }
}

/// JSON body that has been sanitized and passed `validator` checks.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Sanitize,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        let value = value.sanitize();
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Query string extractor with JSON errors.
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        Ok(ApiQuery(value))
    }
}

/// `:id` path segment parsed as a UUID; anything else is a 400.
pub struct IdPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        raw.parse::<Uuid>()
            .map(IdPath)
            .map_err(|_| ApiError::bad_request(format!("Invalid id: {}", raw)))
    }
}
