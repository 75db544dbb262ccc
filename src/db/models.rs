//! Result rows of the aggregate queries.
//!
//! Field names are the SQL column aliases and are serialized unchanged, so the JSON keys of
//! every list endpoint are snake_case.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct TopVendorRow {
    pub vendor_name: String,
    pub vendor_id: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub total_spend: f64,
    pub transaction_count: i64,
    pub avg_transaction_value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct CategorySpendRow {
    pub category: String,
    pub commodity_group: Option<String>,
    pub total_spend: f64,
    pub transaction_count: i64,
    pub unique_vendors: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct SpendTrendRow {
    /// `YYYY-MM`; `None` only for award dates SQLite cannot parse.
    pub month: Option<String>,
    pub total_spend: f64,
    pub transaction_count: i64,
    pub unique_vendors: i64,
    pub avg_transaction_value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct ContractStatusRow {
    pub contract_status: Option<String>,
    pub count: i64,
}

// ---------------------------------------------------------------------------
// consolidation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DuplicateSupplierRow {
    pub vendor1: String,
    pub vendor2: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub combined_spend: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct CommodityOverlapRow {
    pub commodity_name: String,
    pub vendor_count: i64,
    pub total_spend: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsolidationRows {
    pub duplicate_suppliers: Vec<DuplicateSupplierRow>,
    pub commodity_overlap: Vec<CommodityOverlapRow>,
}

// ---------------------------------------------------------------------------
// risk_assessment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct SingleSourceRow {
    pub commodity_name: String,
    pub vendor_name: String,
    pub spend: f64,
    pub transactions: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct HighValueSupplierRow {
    pub vendor_name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub total_spend: f64,
    pub commodity_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskRows {
    pub single_source_suppliers: Vec<SingleSourceRow>,
    pub high_value_suppliers: Vec<HighValueSupplierRow>,
}

// ---------------------------------------------------------------------------
// executive_summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, FromRow)]
pub struct ExecutiveKpisRow {
    pub active_vendors: i64,
    pub total_spend: f64,
    pub total_transactions: i64,
    pub avg_transaction_value: Option<f64>,
    pub commodity_categories: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct MonthlyPerformanceRow {
    pub month: Option<String>,
    pub on_time_deliveries: i64,
    pub monthly_spend: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutiveRows {
    pub kpis: ExecutiveKpisRow,
    pub performance_metrics: Vec<MonthlyPerformanceRow>,
}

// ---------------------------------------------------------------------------
// spend_analytics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DetailedSpendRow {
    pub category: Option<String>,
    pub subcategory: String,
    pub spend: f64,
    pub transactions: i64,
    pub suppliers: i64,
    pub avg_unit_price: Option<f64>,
    pub min_unit_price: Option<f64>,
    pub max_unit_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct PriceVariationRow {
    pub commodity_name: String,
    pub supplier_count: i64,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub price_variation_pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpendAnalyticsRows {
    pub detailed_spend: Vec<DetailedSpendRow>,
    pub price_variation: Vec<PriceVariationRow>,
}

// ---------------------------------------------------------------------------
// general
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, FromRow)]
pub struct GeneralSummaryRow {
    pub vendors: i64,
    pub spend: f64,
    pub transactions: i64,
}
