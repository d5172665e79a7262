use axum::http::StatusCode;

// GET /ping - health check, no body
pub async fn ping() -> StatusCode {
    StatusCode::NO_CONTENT
}
