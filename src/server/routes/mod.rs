pub mod analytics;
pub mod report;
