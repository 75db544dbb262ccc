//! Dashboard endpoints: one aggregate query (or three, for the stats) per request.

use crate::db::{CategorySpendRow, ContractStatusRow, SpendTrendRow, TopVendorRow};
use crate::error::SpendlensError;
use crate::server::router::SpendlensState;
use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use spendlens_schema::SupplierStats;

pub fn router() -> Router<SpendlensState> {
    Router::new()
        .route("/api/supplier-stats", get(supplier_stats_handler))
        .route("/api/top-vendors", get(top_vendors_handler))
        .route("/api/spend-by-category", get(spend_by_category_handler))
        .route("/api/spend-trends", get(spend_trends_handler))
        .route("/api/contract-status", get(contract_status_handler))
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct TopVendorsQuery {
    /// Kept as text so a malformed value surfaces as the uniform 500.
    limit: Option<String>,
}

impl TopVendorsQuery {
    fn resolve_limit(&self, default_limit: i64) -> Result<i64, SpendlensError> {
        match self.limit.as_deref().map(str::trim) {
            None | Some("") => Ok(default_limit),
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| SpendlensError::InvalidLimit(raw.to_string())),
        }
    }
}

async fn supplier_stats_handler(
    State(state): State<SpendlensState>,
) -> Result<Json<SupplierStats>, SpendlensError> {
    Ok(Json(state.db.supplier_stats().await?))
}

async fn top_vendors_handler(
    State(state): State<SpendlensState>,
    Query(query): Query<TopVendorsQuery>,
) -> Result<Json<Vec<TopVendorRow>>, SpendlensError> {
    let limit = query.resolve_limit(state.reports.top_vendors_default_limit)?;
    Ok(Json(state.db.top_vendors(limit).await?))
}

async fn spend_by_category_handler(
    State(state): State<SpendlensState>,
) -> Result<Json<Vec<CategorySpendRow>>, SpendlensError> {
    Ok(Json(state.db.spend_by_category().await?))
}

async fn spend_trends_handler(
    State(state): State<SpendlensState>,
) -> Result<Json<Vec<SpendTrendRow>>, SpendlensError> {
    Ok(Json(state.db.spend_trends().await?))
}

async fn contract_status_handler(
    State(state): State<SpendlensState>,
) -> Result<Json<Vec<ContractStatusRow>>, SpendlensError> {
    Ok(Json(state.db.contract_status().await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: Option<&str>) -> TopVendorsQuery {
        TopVendorsQuery {
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn missing_or_blank_limit_uses_default() {
        assert_eq!(query(None).resolve_limit(10).unwrap(), 10);
        assert_eq!(query(Some("")).resolve_limit(10).unwrap(), 10);
        assert_eq!(query(Some("  ")).resolve_limit(7).unwrap(), 7);
    }

    #[test]
    fn numeric_limit_is_passed_through() {
        assert_eq!(query(Some("3")).resolve_limit(10).unwrap(), 3);
        assert_eq!(query(Some(" 25 ")).resolve_limit(10).unwrap(), 25);
    }

    #[test]
    fn non_numeric_limit_is_rejected() {
        assert!(matches!(
            query(Some("three")).resolve_limit(10),
            Err(SpendlensError::InvalidLimit(raw)) if raw == "three"
        ));
    }
}
