//! SQL DDL for initializing the supplier database.
//!
//! Every statement is idempotent so an existing `suppliers.db` is left untouched.

/// SQLite schema includes:
/// - `vendors` (one supplier per `vendor_id`)
/// - `commodities` (one purchasable item per `commodity_id`, grouped by `commodity_group`)
/// - `contracts` (status label per `contract_id`)
/// - `spend_transactions` (purchase lines referencing a vendor and a commodity)
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Vendors
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS vendors (
    vendor_id TEXT PRIMARY KEY NOT NULL,
    vendor_name TEXT NOT NULL,
    city TEXT NULL,
    state TEXT NULL,
    country TEXT NULL
);

CREATE INDEX IF NOT EXISTS idx_vendors_location ON vendors(city, state);

-- ---------------------------------------------------------------------------
-- Commodities
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS commodities (
    commodity_id TEXT PRIMARY KEY NOT NULL,
    commodity_name TEXT NOT NULL,
    commodity_group TEXT NULL
);

-- ---------------------------------------------------------------------------
-- Contracts
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS contracts (
    contract_id TEXT PRIMARY KEY NOT NULL,
    contract_status TEXT NULL
);

-- ---------------------------------------------------------------------------
-- Spend transactions
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS spend_transactions (
    transaction_id INTEGER PRIMARY KEY NOT NULL,
    vendor_id TEXT NOT NULL REFERENCES vendors(vendor_id),
    commodity_id TEXT NOT NULL REFERENCES commodities(commodity_id),
    award_date TEXT NULL, -- YYYY-MM-DD
    unit_price REAL NULL,
    total_amount REAL NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_spend_vendor ON spend_transactions(vendor_id);
CREATE INDEX IF NOT EXISTS idx_spend_commodity ON spend_transactions(commodity_id);
CREATE INDEX IF NOT EXISTS idx_spend_award_date ON spend_transactions(award_date);
"#;
