//! Health check endpoint for liveness checks.

use axum::http::StatusCode;

/// Health check handler.
///
/// Returns 200 OK with the text "OK" as long as the server accepts connections.
pub async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_returns_200_ok() {
        let (status, body) = health_handler().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }
}
