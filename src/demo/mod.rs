//! Fixed snapshot of insights taken from the 2018 supplier dataset, rendered as four role
//! reports on the console.

mod render;
mod snapshot;

pub use render::{
    DemoEnvelope, DemoSummary, format_grouped, render_all, render_consolidation,
    render_executive_summary, render_integration_guide, render_risk_assessment,
    render_spend_analytics,
};
pub use snapshot::{
    InsightSnapshot, MonthSnapshot, REFERENCE_INSIGHTS, SingleSourceSnapshot, SpendSplit,
    VendorSnapshot,
};
