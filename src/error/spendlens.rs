use axum::{Json, http::StatusCode, response::IntoResponse};
use spendlens_schema::ApiErrorBody;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum SpendlensError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid limit parameter: {0:?}")]
    InvalidLimit(String),
}

impl IntoResponse for SpendlensError {
    /// Every failure is opaque to the client: the cause is logged and the body is always
    /// `{"error":"Internal server error"}` with status 500.
    fn into_response(self) -> axum::response::Response {
        error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorBody::internal()),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn every_variant_maps_to_opaque_500() {
        let errors = [
            SpendlensError::RactorError("mailbox closed".to_string()),
            SpendlensError::InvalidBody("expected value at line 1".to_string()),
            SpendlensError::InvalidLimit("abc".to_string()),
            SpendlensError::DatabaseError(sqlx::Error::RowNotFound),
        ];

        for err in errors {
            let resp = err.into_response();
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
            assert_eq!(&body[..], br#"{"error":"Internal server error"}"#);
        }
    }
}
