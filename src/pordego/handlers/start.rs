use crate::pordego::handlers::{reply, ApiResponse, Reply};
use axum::http::StatusCode;
use tracing::instrument;

#[utoipa::path(
    get,
    path= "/api/start",
    responses (
        (status = 200, description = "Gateway is reachable", body = ApiResponse, content_type = "application/json"),
    ),
    tag= "start"
)]
// axum handler for the connectivity check, no provider call is made
#[instrument]
pub async fn start() -> Reply {
    reply(
        StatusCode::OK,
        ApiResponse::new("Portal connection established successfully."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::Json;

    #[tokio::test]
    async fn test_start_is_always_ok() {
        let (status, Json(body)) = start().await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message, "Portal connection established successfully.");
    }
}
