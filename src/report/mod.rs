//! Report generation: pick one of five fixed aggregation pipelines and fold the rows into a
//! JSON payload.

pub mod assemble;
pub mod kind;
pub mod prompt;

pub use assemble::{
    ConsolidationReport, ExecutiveReport, GeneralReport, ReportData, RiskAssessmentReport,
    SpendAnalyticsReport, generate,
};
pub use kind::ReportType;
pub use prompt::{PromptIntent, Role, parse_prompt};
