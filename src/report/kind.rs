use std::fmt;

/// The five report pipelines. Unrecognised keys select [`ReportType::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportType {
    Consolidation,
    RiskAssessment,
    ExecutiveSummary,
    SpendAnalytics,
    General,
}

impl ReportType {
    pub const ALL: [ReportType; 5] = [
        ReportType::Consolidation,
        ReportType::RiskAssessment,
        ReportType::ExecutiveSummary,
        ReportType::SpendAnalytics,
        ReportType::General,
    ];

    /// Exact, case-sensitive match on the wire key.
    pub fn from_key(key: &str) -> Self {
        match key {
            "consolidation" => ReportType::Consolidation,
            "risk_assessment" => ReportType::RiskAssessment,
            "executive_summary" => ReportType::ExecutiveSummary,
            "spend_analytics" => ReportType::SpendAnalytics,
            _ => ReportType::General,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReportType::Consolidation => "consolidation",
            ReportType::RiskAssessment => "risk_assessment",
            ReportType::ExecutiveSummary => "executive_summary",
            ReportType::SpendAnalytics => "spend_analytics",
            ReportType::General => "general",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
