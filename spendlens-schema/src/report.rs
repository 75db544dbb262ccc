//! Request/response envelope for `POST /api/generate-report`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Incoming report request. Every field is optional and may hold any JSON value; values are
/// echoed back unchanged. Absent fields are inferred from a string `prompt` where possible
/// and otherwise omitted from the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    #[serde(default)]
    pub role: Option<Value>,
    #[serde(default)]
    pub report_type: Option<Value>,
    #[serde(default)]
    pub prompt: Option<Value>,
}

impl GenerateReportRequest {
    /// `reportType` when it is a JSON string.
    pub fn report_type_str(&self) -> Option<&str> {
        self.report_type.as_ref().and_then(Value::as_str)
    }

    /// `prompt` when it is a JSON string.
    pub fn prompt_str(&self) -> Option<&str> {
        self.prompt.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportResponse<D> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_type: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Value>,
    pub data: D,
    /// RFC 3339, UTC, millisecond precision (`2024-01-31T12:00:00.000Z`).
    pub timestamp: String,
}

impl<D> GenerateReportResponse<D> {
    pub fn new(request: GenerateReportRequest, data: D, at: DateTime<Utc>) -> Self {
        Self {
            role: request.role,
            report_type: request.report_type,
            prompt: request.prompt,
            data,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn request_accepts_camel_case_and_missing_fields() {
        let req: GenerateReportRequest =
            serde_json::from_value(json!({ "reportType": "consolidation" })).unwrap();
        assert_eq!(req.report_type_str(), Some("consolidation"));
        assert!(req.role.is_none());
        assert!(req.prompt.is_none());
    }

    #[test]
    fn request_keeps_non_string_values() {
        let req: GenerateReportRequest = serde_json::from_value(json!({
            "reportType": 5,
            "role": { "name": "cfo" },
            "prompt": ["consolidation"]
        }))
        .unwrap();
        assert_eq!(req.report_type, Some(json!(5)));
        assert_eq!(req.report_type_str(), None);
        assert_eq!(req.role, Some(json!({ "name": "cfo" })));
        assert_eq!(req.prompt_str(), None);
    }

    #[test]
    fn response_omits_absent_fields_and_formats_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
        let req = GenerateReportRequest {
            role: Some(json!("cfo")),
            ..Default::default()
        };
        let resp = GenerateReportResponse::new(req, json!({ "summary": {} }), at);
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({
                "role": "cfo",
                "data": { "summary": {} },
                "timestamp": "2024-01-31T12:00:00.000Z"
            })
        );
    }
}
