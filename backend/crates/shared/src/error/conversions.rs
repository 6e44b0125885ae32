//! Error conversions
//!
//! Turns [`AppError`] into an HTTP response. Clients always receive the
//! same shape: `{"message": "..."}` with the status taken from the kind.

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({ "message": self.message() });

        (status, Json(body)).into_response()
    }
}
