//! Aggregate SQL behind every endpoint and report.
//!
//! Sums are wrapped in `CAST(COALESCE(..., 0) AS REAL)` so an empty store yields `0` and an
//! integer-typed `total_amount` column still decodes as `f64`.

use super::create::RecordCreate;
use super::models::{
    CategorySpendRow, CommodityOverlapRow, ConsolidationRows, ContractStatusRow, DetailedSpendRow,
    DuplicateSupplierRow, ExecutiveKpisRow, ExecutiveRows, GeneralSummaryRow,
    HighValueSupplierRow, MonthlyPerformanceRow, PriceVariationRow, RiskRows, SingleSourceRow,
    SpendAnalyticsRows, SpendTrendRow, TopVendorRow,
};
use crate::error::SpendlensError;
use spendlens_schema::SupplierStats;
use sqlx::SqlitePool;

/// Co-located vendor pairs below this combined spend are not worth consolidating.
const CONSOLIDATION_MIN_COMBINED_SPEND: f64 = 100_000.0;
/// Commodities bought from more than this many vendors count as overlapping.
const OVERLAP_MIN_VENDORS: i64 = 5;
/// Vendors above this total spend are critical suppliers.
const HIGH_VALUE_MIN_SPEND: f64 = 1_000_000.0;
/// Price variation analysis needs more than this many suppliers per commodity.
const PRICE_VARIATION_MIN_SUPPLIERS: i64 = 2;
/// Minimum `(max - min) / avg` spread, in percent.
const PRICE_VARIATION_MIN_PCT: f64 = 10.0;

const SPEND_TRENDS_MONTHS: i64 = 12;
const PERFORMANCE_MONTHS: i64 = 6;

pub(super) async fn create_record(
    pool: &SqlitePool,
    create: RecordCreate,
) -> Result<i64, SpendlensError> {
    let id = match create {
        RecordCreate::Vendor(v) => {
            sqlx::query_scalar(
                r#"
            INSERT INTO vendors (vendor_id, vendor_name, city, state, country)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(vendor_id) DO UPDATE SET
                vendor_name = excluded.vendor_name,
                city = excluded.city,
                state = excluded.state,
                country = excluded.country
            RETURNING rowid
            "#,
            )
            .bind(v.vendor_id)
            .bind(v.vendor_name)
            .bind(v.city)
            .bind(v.state)
            .bind(v.country)
            .fetch_one(pool)
            .await?
        }

        RecordCreate::Commodity(c) => {
            sqlx::query_scalar(
                r#"
            INSERT INTO commodities (commodity_id, commodity_name, commodity_group)
            VALUES (?, ?, ?)
            ON CONFLICT(commodity_id) DO UPDATE SET
                commodity_name = excluded.commodity_name,
                commodity_group = excluded.commodity_group
            RETURNING rowid
            "#,
            )
            .bind(c.commodity_id)
            .bind(c.commodity_name)
            .bind(c.commodity_group)
            .fetch_one(pool)
            .await?
        }

        RecordCreate::Contract(c) => {
            sqlx::query_scalar(
                r#"
            INSERT INTO contracts (contract_id, contract_status)
            VALUES (?, ?)
            ON CONFLICT(contract_id) DO UPDATE SET
                contract_status = excluded.contract_status
            RETURNING rowid
            "#,
            )
            .bind(c.contract_id)
            .bind(c.contract_status)
            .fetch_one(pool)
            .await?
        }

        RecordCreate::Transaction(t) => {
            sqlx::query_scalar(
                r#"
            INSERT INTO spend_transactions (vendor_id, commodity_id, award_date, unit_price, total_amount)
            VALUES (?, ?, ?, ?, ?)
            RETURNING transaction_id
            "#,
            )
            .bind(t.vendor_id)
            .bind(t.commodity_id)
            .bind(t.award_date)
            .bind(t.unit_price)
            .bind(t.total_amount)
            .fetch_one(pool)
            .await?
        }
    };

    Ok(id)
}

pub(super) async fn supplier_stats(pool: &SqlitePool) -> Result<SupplierStats, SpendlensError> {
    let total_vendors: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vendors")
        .fetch_one(pool)
        .await?;

    let (total_transactions, total_spend): (i64, f64) = sqlx::query_as(
        r#"
    SELECT
        COUNT(*),
        CAST(COALESCE(SUM(total_amount), 0) AS REAL)
    FROM spend_transactions
    "#,
    )
    .fetch_one(pool)
    .await?;

    let total_contracts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contracts")
        .fetch_one(pool)
        .await?;

    Ok(SupplierStats {
        total_vendors,
        total_transactions,
        total_spend,
        total_contracts,
    })
}

pub(super) async fn top_vendors(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<TopVendorRow>, SpendlensError> {
    let rows = sqlx::query_as::<_, TopVendorRow>(
        r#"
    SELECT
        v.vendor_name,
        v.vendor_id,
        v.city,
        v.state,
        v.country,
        CAST(COALESCE(SUM(st.total_amount), 0) AS REAL) AS total_spend,
        COUNT(st.transaction_id) AS transaction_count,
        AVG(st.total_amount) AS avg_transaction_value
    FROM vendors v
    JOIN spend_transactions st ON v.vendor_id = st.vendor_id
    GROUP BY v.vendor_id, v.vendor_name, v.city, v.state, v.country
    ORDER BY total_spend DESC
    LIMIT ?
    "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub(super) async fn spend_by_category(
    pool: &SqlitePool,
) -> Result<Vec<CategorySpendRow>, SpendlensError> {
    let rows = sqlx::query_as::<_, CategorySpendRow>(
        r#"
    SELECT
        c.commodity_name AS category,
        c.commodity_group,
        CAST(COALESCE(SUM(st.total_amount), 0) AS REAL) AS total_spend,
        COUNT(st.transaction_id) AS transaction_count,
        COUNT(DISTINCT st.vendor_id) AS unique_vendors
    FROM commodities c
    JOIN spend_transactions st ON c.commodity_id = st.commodity_id
    GROUP BY c.commodity_id, c.commodity_name, c.commodity_group
    ORDER BY total_spend DESC
    "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub(super) async fn spend_trends(pool: &SqlitePool) -> Result<Vec<SpendTrendRow>, SpendlensError> {
    let rows = sqlx::query_as::<_, SpendTrendRow>(
        r#"
    SELECT
        strftime('%Y-%m', award_date) AS month,
        CAST(COALESCE(SUM(total_amount), 0) AS REAL) AS total_spend,
        COUNT(transaction_id) AS transaction_count,
        COUNT(DISTINCT vendor_id) AS unique_vendors,
        AVG(total_amount) AS avg_transaction_value
    FROM spend_transactions
    WHERE award_date IS NOT NULL
    GROUP BY strftime('%Y-%m', award_date)
    ORDER BY month DESC
    LIMIT ?
    "#,
    )
    .bind(SPEND_TRENDS_MONTHS)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub(super) async fn contract_status(
    pool: &SqlitePool,
) -> Result<Vec<ContractStatusRow>, SpendlensError> {
    let rows = sqlx::query_as::<_, ContractStatusRow>(
        r#"
    SELECT
        contract_status,
        COUNT(*) AS count
    FROM contracts
    GROUP BY contract_status
    ORDER BY count DESC
    "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub(super) async fn consolidation(pool: &SqlitePool) -> Result<ConsolidationRows, SpendlensError> {
    // Pairs are ordered (a, b) and (b, a) both appear, matching the self-join.
    let duplicate_suppliers = sqlx::query_as::<_, DuplicateSupplierRow>(
        r#"
    SELECT
        v1.vendor_name AS vendor1,
        v2.vendor_name AS vendor2,
        v1.city,
        v1.state,
        CAST(COALESCE(SUM(st1.total_amount + st2.total_amount), 0) AS REAL) AS combined_spend
    FROM vendors v1
    JOIN vendors v2 ON v1.city = v2.city AND v1.state = v2.state AND v1.vendor_id != v2.vendor_id
    JOIN spend_transactions st1 ON v1.vendor_id = st1.vendor_id
    JOIN spend_transactions st2 ON v2.vendor_id = st2.vendor_id
    GROUP BY v1.vendor_id, v2.vendor_id, v1.city, v1.state
    HAVING combined_spend > ?
    LIMIT 10
    "#,
    )
    .bind(CONSOLIDATION_MIN_COMBINED_SPEND)
    .fetch_all(pool)
    .await?;

    let commodity_overlap = sqlx::query_as::<_, CommodityOverlapRow>(
        r#"
    SELECT
        c.commodity_name,
        COUNT(DISTINCT st.vendor_id) AS vendor_count,
        CAST(COALESCE(SUM(st.total_amount), 0) AS REAL) AS total_spend
    FROM commodities c
    JOIN spend_transactions st ON c.commodity_id = st.commodity_id
    GROUP BY c.commodity_id, c.commodity_name
    HAVING vendor_count > ?
    ORDER BY vendor_count DESC
    LIMIT 15
    "#,
    )
    .bind(OVERLAP_MIN_VENDORS)
    .fetch_all(pool)
    .await?;

    Ok(ConsolidationRows {
        duplicate_suppliers,
        commodity_overlap,
    })
}

pub(super) async fn risk_assessment(pool: &SqlitePool) -> Result<RiskRows, SpendlensError> {
    let single_source_suppliers = sqlx::query_as::<_, SingleSourceRow>(
        r#"
    SELECT
        c.commodity_name,
        v.vendor_name,
        CAST(COALESCE(SUM(st.total_amount), 0) AS REAL) AS spend,
        COUNT(st.transaction_id) AS transactions
    FROM commodities c
    JOIN spend_transactions st ON c.commodity_id = st.commodity_id
    JOIN vendors v ON st.vendor_id = v.vendor_id
    WHERE c.commodity_id IN (
        SELECT commodity_id
        FROM spend_transactions
        GROUP BY commodity_id
        HAVING COUNT(DISTINCT vendor_id) = 1
    )
    GROUP BY c.commodity_id, v.vendor_id
    ORDER BY spend DESC
    LIMIT 20
    "#,
    )
    .fetch_all(pool)
    .await?;

    let high_value_suppliers = sqlx::query_as::<_, HighValueSupplierRow>(
        r#"
    SELECT
        v.vendor_name,
        v.city,
        v.state,
        v.country,
        CAST(COALESCE(SUM(st.total_amount), 0) AS REAL) AS total_spend,
        COUNT(DISTINCT st.commodity_id) AS commodity_count
    FROM vendors v
    JOIN spend_transactions st ON v.vendor_id = st.vendor_id
    GROUP BY v.vendor_id
    HAVING total_spend > ?
    ORDER BY total_spend DESC
    LIMIT 25
    "#,
    )
    .bind(HIGH_VALUE_MIN_SPEND)
    .fetch_all(pool)
    .await?;

    Ok(RiskRows {
        single_source_suppliers,
        high_value_suppliers,
    })
}

pub(super) async fn executive(pool: &SqlitePool) -> Result<ExecutiveRows, SpendlensError> {
    let kpis = sqlx::query_as::<_, ExecutiveKpisRow>(
        r#"
    SELECT
        COUNT(DISTINCT v.vendor_id) AS active_vendors,
        CAST(COALESCE(SUM(st.total_amount), 0) AS REAL) AS total_spend,
        COUNT(st.transaction_id) AS total_transactions,
        AVG(st.total_amount) AS avg_transaction_value,
        COUNT(DISTINCT c.commodity_id) AS commodity_categories
    FROM vendors v
    JOIN spend_transactions st ON v.vendor_id = st.vendor_id
    JOIN commodities c ON st.commodity_id = c.commodity_id
    "#,
    )
    .fetch_one(pool)
    .await?;

    let performance_metrics = sqlx::query_as::<_, MonthlyPerformanceRow>(
        r#"
    SELECT
        strftime('%Y-%m', award_date) AS month,
        COUNT(transaction_id) AS on_time_deliveries,
        CAST(COALESCE(SUM(total_amount), 0) AS REAL) AS monthly_spend
    FROM spend_transactions
    WHERE award_date IS NOT NULL
    GROUP BY strftime('%Y-%m', award_date)
    ORDER BY month DESC
    LIMIT ?
    "#,
    )
    .bind(PERFORMANCE_MONTHS)
    .fetch_all(pool)
    .await?;

    Ok(ExecutiveRows {
        kpis,
        performance_metrics,
    })
}

pub(super) async fn spend_analytics(
    pool: &SqlitePool,
) -> Result<SpendAnalyticsRows, SpendlensError> {
    let detailed_spend = sqlx::query_as::<_, DetailedSpendRow>(
        r#"
    SELECT
        c.commodity_group AS category,
        c.commodity_name AS subcategory,
        CAST(COALESCE(SUM(st.total_amount), 0) AS REAL) AS spend,
        COUNT(st.transaction_id) AS transactions,
        COUNT(DISTINCT st.vendor_id) AS suppliers,
        AVG(st.unit_price) AS avg_unit_price,
        CAST(MIN(st.unit_price) AS REAL) AS min_unit_price,
        CAST(MAX(st.unit_price) AS REAL) AS max_unit_price
    FROM commodities c
    JOIN spend_transactions st ON c.commodity_id = st.commodity_id
    GROUP BY c.commodity_group, c.commodity_name
    ORDER BY spend DESC
    "#,
    )
    .fetch_all(pool)
    .await?;

    let price_variation = sqlx::query_as::<_, PriceVariationRow>(
        r#"
    SELECT
        c.commodity_name,
        COUNT(DISTINCT st.vendor_id) AS supplier_count,
        AVG(st.unit_price) AS avg_price,
        CAST(MIN(st.unit_price) AS REAL) AS min_price,
        CAST(MAX(st.unit_price) AS REAL) AS max_price,
        CAST((MAX(st.unit_price) - MIN(st.unit_price)) / AVG(st.unit_price) * 100 AS REAL) AS price_variation_pct
    FROM commodities c
    JOIN spend_transactions st ON c.commodity_id = st.commodity_id
    WHERE st.unit_price > 0
    GROUP BY c.commodity_id, c.commodity_name
    HAVING supplier_count > ? AND price_variation_pct > ?
    ORDER BY price_variation_pct DESC
    LIMIT 20
    "#,
    )
    .bind(PRICE_VARIATION_MIN_SUPPLIERS)
    .bind(PRICE_VARIATION_MIN_PCT)
    .fetch_all(pool)
    .await?;

    Ok(SpendAnalyticsRows {
        detailed_spend,
        price_variation,
    })
}

pub(super) async fn general_summary(
    pool: &SqlitePool,
) -> Result<GeneralSummaryRow, SpendlensError> {
    let row = sqlx::query_as::<_, GeneralSummaryRow>(
        r#"
    SELECT
        COUNT(DISTINCT v.vendor_id) AS vendors,
        CAST(COALESCE(SUM(st.total_amount), 0) AS REAL) AS spend,
        COUNT(st.transaction_id) AS transactions
    FROM vendors v
    JOIN spend_transactions st ON v.vendor_id = st.vendor_id
    "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(row)
}
