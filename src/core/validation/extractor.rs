//! Axum extractor for validated request bodies
//!
//! This module provides the `ValidatedJson<T>` extractor: parse the body as
//! JSON, then run `T::validate()`. Either failure rejects the request with a
//! 400 envelope carrying the raw parser or validator message.

use crate::core::error::OrderError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Axum extractor that parses and validates a JSON body
///
/// The `Content-Type` header is not checked; any body that parses is accepted.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_order(
///     ValidatedJson(payload): ValidatedJson<OrderPayload>,
/// ) -> Result<OrderResponse<InsertAck>, OrderError> {
///     // payload is already parsed and validated
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

/// Parse then validate, in that order
pub fn parse_and_validate<T>(body: &[u8]) -> Result<T, OrderError>
where
    T: DeserializeOwned + Validate,
{
    let payload: T =
        serde_json::from_slice(body).map_err(|e| OrderError::Validation(e.to_string()))?;
    payload.validate()?;
    Ok(payload)
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = OrderError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| OrderError::Validation(e.body_text()))?;

        parse_and_validate(&body).map(ValidatedJson)
    }
}
