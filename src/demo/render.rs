use super::snapshot::InsightSnapshot;
use crate::report::ReportType;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::io::{self, Write};

const RULE_WIDTH: usize = 80;
const SECTION_WIDTH: usize = 50;

/// Spend on co-located manufacturing suppliers, from an offline analysis of the dataset.
const CONSOLIDATION_OPPORTUNITY: f64 = 57_900_000.0;
const CONSOLIDATION_SAVINGS_RATE: f64 = 0.15;
const LOW_DIVERSITY_COMMODITIES: u32 = 15;

const MANUFACTURING_MARKERS: [&str; 3] = ["MATERIALS", "TECHLINE", "OLDCASTLE"];

type Renderer = fn(&mut dyn Write, &InsightSnapshot) -> io::Result<DemoSummary>;

/// Figures a console report hands back alongside its text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(
    tag = "type",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
pub enum DemoSummary {
    Consolidation {
        manufacturing_spend: f64,
        consolidation_opportunity: f64,
        potential_savings: f64,
    },
    RiskAssessment {
        total_risk_exposure: f64,
        critical_supplier: &'static str,
        risk_percentage: f64,
    },
    ExecutiveSummary {
        total_spend: f64,
        supplier_count: u64,
        top5_concentration: f64,
    },
    SpendAnalytics {
        major_spend_ratio: f64,
        tail_spend_ratio: f64,
        optimization_opportunities: u32,
    },
}

/// API-shaped wrapper around one demo report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoEnvelope {
    pub success: bool,
    pub timestamp: String,
    pub data_source: &'static str,
    pub report_type: &'static str,
    pub data: DemoSummary,
    pub insights: InsightSnapshot,
}

/// Fixed-point with `,` thousands separators: `format_grouped(7081.0249, 2) == "7,081.02"`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    grouped.push_str(&group_digits(int_part));
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn millions(value: f64, decimals: usize) -> String {
    format!("${:.*}M", decimals, value / 1_000_000.0)
}

fn section(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(SECTION_WIDTH))
}

pub fn render_consolidation(
    out: &mut dyn Write,
    insights: &InsightSnapshot,
) -> io::Result<DemoSummary> {
    section(out, "MANUFACTURING CONSOLIDATION REPORT")?;

    let manufacturing: Vec<_> = insights
        .top_vendors
        .iter()
        .filter(|v| MANUFACTURING_MARKERS.iter().any(|m| v.name.contains(m)))
        .collect();

    writeln!(out, "Key Manufacturing Suppliers:")?;
    for vendor in &manufacturing {
        writeln!(
            out,
            "   - {}: {} ({} transactions)",
            vendor.name,
            millions(vendor.spend, 1),
            vendor.transactions
        )?;
    }

    let potential_savings = CONSOLIDATION_OPPORTUNITY * CONSOLIDATION_SAVINGS_RATE;
    writeln!(out)?;
    writeln!(
        out,
        "Consolidation Opportunity: {}",
        millions(CONSOLIDATION_OPPORTUNITY, 1)
    )?;
    writeln!(
        out,
        "Potential Savings: {} ({:.0}% reduction)",
        millions(potential_savings, 1),
        CONSOLIDATION_SAVINGS_RATE * 100.0
    )?;

    Ok(DemoSummary::Consolidation {
        manufacturing_spend: manufacturing.iter().map(|v| v.spend).sum(),
        consolidation_opportunity: CONSOLIDATION_OPPORTUNITY,
        potential_savings,
    })
}

pub fn render_risk_assessment(
    out: &mut dyn Write,
    insights: &InsightSnapshot,
) -> io::Result<DemoSummary> {
    section(out, "CFO RISK ASSESSMENT REPORT")?;

    writeln!(out, "High-Risk Single Source Suppliers:")?;
    for supplier in insights.single_source_suppliers.iter().take(5) {
        writeln!(
            out,
            "   - {}: {} ({})",
            supplier.commodity,
            millions(supplier.spend, 1),
            supplier.vendor
        )?;
    }

    let risk_percentage = insights.total_single_source_risk / insights.total_spend * 100.0;
    writeln!(out)?;
    writeln!(
        out,
        "Total Single-Source Risk Exposure: {}",
        millions(insights.total_single_source_risk, 1)
    )?;
    writeln!(
        out,
        "Critical Supplier Risk: {} ({})",
        insights.critical_supplier,
        millions(insights.critical_supplier_exposure, 1)
    )?;
    writeln!(out, "Risk as % of Total Spend: {risk_percentage:.1}%")?;

    Ok(DemoSummary::RiskAssessment {
        total_risk_exposure: insights.total_single_source_risk,
        critical_supplier: insights.critical_supplier,
        risk_percentage,
    })
}

pub fn render_executive_summary(
    out: &mut dyn Write,
    insights: &InsightSnapshot,
) -> io::Result<DemoSummary> {
    section(out, "EXECUTIVE SUMMARY REPORT")?;

    #[allow(clippy::cast_precision_loss)]
    let avg_transaction = insights.total_spend / insights.total_transactions as f64;

    writeln!(out, "Key Performance Indicators:")?;
    writeln!(
        out,
        "   - Total Supplier Spend: {}",
        millions(insights.total_spend, 0)
    )?;
    writeln!(
        out,
        "   - Active Suppliers: {}",
        group_digits(&insights.total_vendors.to_string())
    )?;
    writeln!(
        out,
        "   - Total Transactions: {}",
        group_digits(&insights.total_transactions.to_string())
    )?;
    writeln!(
        out,
        "   - Average Transaction: ${}",
        format_grouped(avg_transaction, 2)
    )?;

    let top5: f64 = insights.top_vendors.iter().take(5).map(|v| v.spend).sum();
    let top5_concentration = top5 / insights.total_spend * 100.0;
    writeln!(out)?;
    writeln!(out, "Supplier Concentration:")?;
    writeln!(
        out,
        "   - Top 5 Suppliers: {} ({top5_concentration:.1}%)",
        millions(top5, 1)
    )?;

    Ok(DemoSummary::ExecutiveSummary {
        total_spend: insights.total_spend,
        supplier_count: insights.total_vendors,
        top5_concentration,
    })
}

pub fn render_spend_analytics(
    out: &mut dyn Write,
    insights: &InsightSnapshot,
) -> io::Result<DemoSummary> {
    section(out, "PROCUREMENT SPEND ANALYTICS")?;

    writeln!(out, "Spend Classification:")?;
    writeln!(
        out,
        "   - Major Spend: {} ({}%)",
        millions(insights.major_spend.amount, 1),
        insights.major_spend.percentage
    )?;
    writeln!(
        out,
        "   - Tail Spend: {} ({}%)",
        millions(insights.tail_spend.amount, 1),
        insights.tail_spend.percentage
    )?;

    writeln!(out)?;
    writeln!(out, "Optimization Opportunities:")?;
    writeln!(
        out,
        "   - {LOW_DIVERSITY_COMMODITIES}+ commodities with limited supplier diversity"
    )?;
    writeln!(
        out,
        "   - Price variation analysis identifies cost reduction potential"
    )?;
    writeln!(
        out,
        "   - Geographic consolidation opportunities in Texas region"
    )?;

    Ok(DemoSummary::SpendAnalytics {
        major_spend_ratio: insights.major_spend.percentage,
        tail_spend_ratio: insights.tail_spend.percentage,
        optimization_opportunities: LOW_DIVERSITY_COMMODITIES,
    })
}

pub fn render_integration_guide(out: &mut dyn Write) -> io::Result<()> {
    section(out, "DASHBOARD INTEGRATION GUIDE")?;
    writeln!(out, "1. Point the dashboard at the /api endpoints of this service")?;
    writeln!(out, "2. Replace sample chart data with /api/spend-trends and /api/top-vendors")?;
    writeln!(out, "3. Send report prompts to POST /api/generate-report")?;
    writeln!(out, "4. Add role-based authentication in front of the service")?;
    writeln!(out, "5. Enable filtering and drill-down on the aggregate endpoints")
}

/// Print every report once, then the summary list and integration guide.
pub fn render_all(
    out: &mut dyn Write,
    insights: &InsightSnapshot,
    at: DateTime<Utc>,
) -> io::Result<Vec<DemoEnvelope>> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "SUPPLIER REPORT GENERATOR - DATABASE INSIGHTS DEMO")?;
    writeln!(out, "{rule}")?;

    let timestamp = at.to_rfc3339_opts(SecondsFormat::Millis, true);
    let renderers: [(ReportType, Renderer); 4] = [
        (ReportType::Consolidation, render_consolidation as Renderer),
        (ReportType::RiskAssessment, render_risk_assessment as Renderer),
        (ReportType::ExecutiveSummary, render_executive_summary as Renderer),
        (ReportType::SpendAnalytics, render_spend_analytics as Renderer),
    ];

    let mut envelopes = Vec::with_capacity(renderers.len());
    for (kind, render) in renderers {
        let data = render(out, insights)?;
        envelopes.push(DemoEnvelope {
            success: true,
            timestamp: timestamp.clone(),
            data_source: "suppliers.db",
            report_type: kind.as_str(),
            data,
            insights: *insights,
        });
    }

    section(out, "SUMMARY OF GENERATED REPORTS")?;
    for (index, envelope) in envelopes.iter().enumerate() {
        writeln!(
            out,
            "{}. {}: Generated successfully",
            index + 1,
            envelope.report_type.to_uppercase()
        )?;
    }

    render_integration_guide(out)?;

    writeln!(out)?;
    writeln!(out, "Demo completed.")?;
    writeln!(out, "{rule}")?;

    Ok(envelopes)
}
