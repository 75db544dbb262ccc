use serde::{Deserialize, Serialize};

/// Headline counters served by `/api/supplier-stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierStats {
    pub total_vendors: i64,
    pub total_transactions: i64,
    pub total_spend: f64,
    pub total_contracts: i64,
}
