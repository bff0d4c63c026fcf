//! Pretty-printed JSON responses

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::{ErrorResponse, INTERNAL_ERROR_MESSAGE};

/// JSON body serialized with indentation
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json; charset=utf-8"),
                )],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response: {}", e);
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ErrorResponse {
                    status: status.as_u16(),
                    message: INTERNAL_ERROR_MESSAGE.to_string(),
                };
                (status, axum::Json(body)).into_response()
            }
        }
    }
}
