use crate::error::SpendlensError;
use crate::report::{self, ReportData, ReportType, parse_prompt};
use crate::server::router::SpendlensState;
use crate::utils::logging::with_pretty_json_debug;
use axum::{
    Json, Router,
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::{HeaderMap, header::CONTENT_TYPE},
    routing::post,
};
use chrono::Utc;
use serde_json::Value;
use spendlens_schema::{GenerateReportRequest, GenerateReportResponse};
use tracing::debug;

pub fn router() -> Router<SpendlensState> {
    Router::new().route("/api/generate-report", post(generate_report_handler))
}

/// A report request with its pipeline resolved.
pub(crate) struct ReportPreprocess(pub(crate) GenerateReportRequest, pub(crate) ReportType);

impl<S> FromRequest<S> for ReportPreprocess
where
    S: Send + Sync,
{
    type Rejection = SpendlensError;

    /// Parse the JSON body and fill in what the caller left out.
    ///
    /// - An empty body, or one not sent as JSON, is an empty request (general report).
    /// - Missing `reportType`/`role` are inferred from a string `prompt`; explicit values of
    ///   any JSON type are kept verbatim.
    /// - A non-string `reportType` selects the general report.
    /// - Malformed JSON is rejected with the uniform internal error.
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| SpendlensError::InvalidBody(e.body_text()))?;

        let mut body: GenerateReportRequest = if !json || bytes.trim_ascii().is_empty() {
            GenerateReportRequest::default()
        } else {
            serde_json::from_slice(&bytes).map_err(|e| SpendlensError::InvalidBody(e.to_string()))?
        };

        if let Some(intent) = body.prompt_str().map(parse_prompt) {
            body.report_type
                .get_or_insert_with(|| Value::from(intent.report_type.as_str()));
            body.role.get_or_insert_with(|| Value::from(intent.role.as_str()));
        }

        let kind = body
            .report_type_str()
            .map_or(ReportType::General, ReportType::from_key);

        with_pretty_json_debug(&body, |pretty_body| {
            debug!(
                report_type = %kind,
                body = %pretty_body,
                "Resolved report request"
            );
        });

        Ok(Self(body, kind))
    }
}

/// `application/json`, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

async fn generate_report_handler(
    State(state): State<SpendlensState>,
    ReportPreprocess(request, kind): ReportPreprocess,
) -> Result<Json<GenerateReportResponse<ReportData>>, SpendlensError> {
    let data = report::generate(&state.db, kind, &state.reports).await?;
    Ok(Json(GenerateReportResponse::new(request, data, Utc::now())))
}
