use super::kind::ReportType;
use crate::config::ReportsConfig;
use crate::db::{
    CommodityOverlapRow, ConsolidationRows, DbActorHandle, DetailedSpendRow, DuplicateSupplierRow,
    ExecutiveKpisRow, ExecutiveRows, GeneralSummaryRow, HighValueSupplierRow,
    MonthlyPerformanceRow, PriceVariationRow, RiskRows, SingleSourceRow, SpendAnalyticsRows,
};
use crate::error::SpendlensError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidationReport {
    pub duplicate_suppliers: Vec<DuplicateSupplierRow>,
    pub commodity_overlap: Vec<CommodityOverlapRow>,
    pub consolidation_opportunities: usize,
    pub potential_savings: f64,
}

impl ConsolidationReport {
    pub fn from_rows(rows: ConsolidationRows, savings_rate: f64) -> Self {
        let potential_savings = rows
            .duplicate_suppliers
            .iter()
            .map(|pair| pair.combined_spend * savings_rate)
            .sum();

        Self {
            consolidation_opportunities: rows.duplicate_suppliers.len(),
            potential_savings,
            duplicate_suppliers: rows.duplicate_suppliers,
            commodity_overlap: rows.commodity_overlap,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessmentReport {
    pub single_source_suppliers: Vec<SingleSourceRow>,
    pub high_value_suppliers: Vec<HighValueSupplierRow>,
    /// Spend locked into single-source commodities.
    pub risk_exposure: f64,
    pub critical_suppliers: usize,
}

impl RiskAssessmentReport {
    pub fn from_rows(rows: RiskRows) -> Self {
        let risk_exposure = rows.single_source_suppliers.iter().map(|s| s.spend).sum();

        Self {
            critical_suppliers: rows.high_value_suppliers.len(),
            risk_exposure,
            single_source_suppliers: rows.single_source_suppliers,
            high_value_suppliers: rows.high_value_suppliers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveReport {
    pub kpis: ExecutiveKpisRow,
    pub performance_metrics: Vec<MonthlyPerformanceRow>,
    pub overall_score: f64,
    pub on_time_delivery: f64,
}

impl ExecutiveReport {
    pub fn from_rows(rows: ExecutiveRows, cfg: &ReportsConfig) -> Self {
        Self {
            kpis: rows.kpis,
            performance_metrics: rows.performance_metrics,
            overall_score: cfg.overall_score,
            on_time_delivery: cfg.on_time_delivery,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendAnalyticsReport {
    pub detailed_spend: Vec<DetailedSpendRow>,
    pub price_variation: Vec<PriceVariationRow>,
    pub total_categories: usize,
    pub optimization_opportunities: usize,
}

impl SpendAnalyticsReport {
    pub fn from_rows(rows: SpendAnalyticsRows) -> Self {
        Self {
            total_categories: rows.detailed_spend.len(),
            optimization_opportunities: rows.price_variation.len(),
            detailed_spend: rows.detailed_spend,
            price_variation: rows.price_variation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralReport {
    pub summary: GeneralSummaryRow,
}

/// The `data` member of a generated report; serialized without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportData {
    Consolidation(ConsolidationReport),
    RiskAssessment(RiskAssessmentReport),
    Executive(ExecutiveReport),
    SpendAnalytics(SpendAnalyticsReport),
    General(GeneralReport),
}

/// Run the pipeline for `kind`. Its queries are issued one after another.
pub async fn generate(
    db: &DbActorHandle,
    kind: ReportType,
    cfg: &ReportsConfig,
) -> Result<ReportData, SpendlensError> {
    let data = match kind {
        ReportType::Consolidation => ReportData::Consolidation(ConsolidationReport::from_rows(
            db.consolidation().await?,
            cfg.savings_rate,
        )),
        ReportType::RiskAssessment => {
            ReportData::RiskAssessment(RiskAssessmentReport::from_rows(db.risk_assessment().await?))
        }
        ReportType::ExecutiveSummary => {
            ReportData::Executive(ExecutiveReport::from_rows(db.executive().await?, cfg))
        }
        ReportType::SpendAnalytics => {
            ReportData::SpendAnalytics(SpendAnalyticsReport::from_rows(db.spend_analytics().await?))
        }
        ReportType::General => ReportData::General(GeneralReport {
            summary: db.general_summary().await?,
        }),
    };
    Ok(data)
}
