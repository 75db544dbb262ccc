use serde::{Deserialize, Serialize};

/// Fixed figures folded into generated reports.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportsConfig {
    /// Assumed saving on combined spend of co-located vendor pairs.
    /// TOML: `reports.savings_rate`. Default: `0.15`.
    pub savings_rate: f64,

    /// TOML: `reports.overall_score`. Default: `87.3`.
    pub overall_score: f64,

    /// TOML: `reports.on_time_delivery`. Default: `94.2`.
    pub on_time_delivery: f64,

    /// Row cap for `/api/top-vendors` when the request has no `limit`.
    /// TOML: `reports.top_vendors_default_limit`. Default: `10`.
    pub top_vendors_default_limit: i64,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            savings_rate: 0.15,
            overall_score: 87.3,
            on_time_delivery: 94.2,
            top_vendors_default_limit: 10,
        }
    }
}
