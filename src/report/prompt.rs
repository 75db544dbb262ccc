//! Keyword inference over a free-text prompt.
//!
//! Matching is a lower-cased substring search; the first rule that hits wins.

use super::kind::ReportType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    ManufacturingHead,
    Cfo,
    Executive,
    ProcurementManager,
    General,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::ManufacturingHead => "manufacturing_head",
            Role::Cfo => "cfo",
            Role::Executive => "executive",
            Role::ProcurementManager => "procurement_manager",
            Role::General => "general",
        }
    }
}

const ROLE_RULES: &[(&[&str], Role)] = &[
    (&["head of manufacturing", "manufacturing"], Role::ManufacturingHead),
    (&["cfo", "chief financial officer"], Role::Cfo),
    (&["executive", "board"], Role::Executive),
    (&["procurement manager", "procurement"], Role::ProcurementManager),
];

const REPORT_RULES: &[(&[&str], ReportType)] = &[
    (&["consolidation"], ReportType::Consolidation),
    (&["risk assessment"], ReportType::RiskAssessment),
    (&["executive summary", "board meeting"], ReportType::ExecutiveSummary),
    (&["spend analytics"], ReportType::SpendAnalytics),
];

/// Role and report type read off a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptIntent {
    pub role: Role,
    pub report_type: ReportType,
}

pub fn parse_prompt(prompt: &str) -> PromptIntent {
    let lowered = prompt.to_lowercase();
    let hit = |needles: &[&str]| needles.iter().any(|n| lowered.contains(n));

    let role = ROLE_RULES
        .iter()
        .find(|(needles, _)| hit(*needles))
        .map_or(Role::General, |(_, role)| *role);

    let report_type = REPORT_RULES
        .iter()
        .find(|(needles, _)| hit(*needles))
        .map_or(ReportType::General, |(_, kind)| *kind);

    PromptIntent { role, report_type }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_prompts_resolve() {
        let cases = [
            (
                "Hi I'm the Head of Manufacturing, create a consolidation report",
                Role::ManufacturingHead,
                ReportType::Consolidation,
            ),
            (
                "CFO needs supplier risk assessment with financial impact",
                Role::Cfo,
                ReportType::RiskAssessment,
            ),
            (
                "Executive summary of supplier performance for board meeting",
                Role::Executive,
                ReportType::ExecutiveSummary,
            ),
            (
                "Procurement manager wants detailed spend analytics",
                Role::ProcurementManager,
                ReportType::SpendAnalytics,
            ),
        ];

        for (prompt, role, report_type) in cases {
            let intent = parse_prompt(prompt);
            assert_eq!(intent.role, role, "{prompt}");
            assert_eq!(intent.report_type, report_type, "{prompt}");
        }
    }

    #[test]
    fn earlier_rules_win() {
        // "manufacturing" outranks "cfo"; "consolidation" outranks "risk assessment".
        let intent = parse_prompt("CFO asks manufacturing for a risk assessment and consolidation");
        assert_eq!(intent.role, Role::ManufacturingHead);
        assert_eq!(intent.report_type, ReportType::Consolidation);
    }

    #[test]
    fn unmatched_prompt_is_general() {
        let intent = parse_prompt("show me something interesting");
        assert_eq!(intent.role, Role::General);
        assert_eq!(intent.report_type, ReportType::General);
    }

    #[test]
    fn risk_needs_the_full_phrase() {
        assert_eq!(parse_prompt("risk report").report_type, ReportType::General);
    }
}
