//! Error envelope returned by every failing endpoint.

use serde::{Deserialize, Serialize};

/// Flat error envelope: `{ "error": "Internal server error" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    pub const INTERNAL: &'static str = "Internal server error";

    pub fn internal() -> Self {
        Self {
            error: Self::INTERNAL.to_string(),
        }
    }
}
