pub mod error;
pub mod report;
pub mod stats;

pub use error::ApiErrorBody;
pub use report::{GenerateReportRequest, GenerateReportResponse};
pub use stats::SupplierStats;
