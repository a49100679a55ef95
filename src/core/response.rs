//! The `{status, message, data: {data}}` envelope wrapped around responses

use super::order::Order;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Envelope used by every order endpoint except list-all
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse<T> {
    pub status: u16,
    pub message: &'static str,
    pub data: ResponseData<T>,
}

/// Inner `data` map of the envelope
#[derive(Debug, Clone, Serialize)]
pub struct ResponseData<T> {
    pub data: T,

    /// Records decoded before a cursor failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial: Option<Vec<Order>>,
}

impl<T> OrderResponse<T> {
    /// 200 envelope wrapping `payload`
    pub fn success(payload: T) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: "success",
            data: ResponseData {
                data: payload,
                partial: None,
            },
        }
    }

    /// Error envelope with the given status
    pub fn error(status: StatusCode, payload: T) -> Self {
        Self {
            status: status.as_u16(),
            message: "error",
            data: ResponseData {
                data: payload,
                partial: None,
            },
        }
    }

    pub fn with_partial(mut self, partial: Vec<Order>) -> Self {
        self.data.partial = Some(partial);
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for OrderResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
