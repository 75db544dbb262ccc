//! Database module: the supplier store and the actor that owns it.
//!
//! Layout:
//! - `schema.rs`: SQL DDL for initializing an empty database (SQLite)
//! - `models.rs`: Rust structs mirroring aggregate result rows
//! - `create.rs`: insert commands for vendors, commodities, contracts and transactions
//! - `queries.rs`: the aggregate SQL behind every endpoint and report
//! - `actor.rs`: `DbActor`, sole owner of the connection pool

pub mod actor;
pub mod create;
pub mod models;
pub mod schema;

mod queries;

pub use actor::{DbActorHandle, spawn};
pub use create::{CommodityCreate, ContractCreate, RecordCreate, TransactionCreate, VendorCreate};
pub use models::{
    CategorySpendRow, CommodityOverlapRow, ConsolidationRows, ContractStatusRow, DetailedSpendRow,
    DuplicateSupplierRow, ExecutiveKpisRow, ExecutiveRows, GeneralSummaryRow,
    HighValueSupplierRow, MonthlyPerformanceRow, PriceVariationRow, RiskRows, SingleSourceRow,
    SpendAnalyticsRows, SpendTrendRow, TopVendorRow,
};
pub use schema::SQLITE_INIT;
