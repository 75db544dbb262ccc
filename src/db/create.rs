use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Insert (or upsert, for keyed entities) a single record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RecordCreate {
    Vendor(VendorCreate),
    Commodity(CommodityCreate),
    Contract(ContractCreate),
    Transaction(TransactionCreate),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorCreate {
    pub vendor_id: String,
    pub vendor_name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommodityCreate {
    pub commodity_id: String,
    pub commodity_name: String,
    pub commodity_group: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractCreate {
    pub contract_id: String,
    pub contract_status: Option<String>,
}

/// A purchase line. `transaction_id` is assigned by the database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionCreate {
    pub vendor_id: String,
    pub commodity_id: String,
    pub award_date: Option<NaiveDate>,
    pub unit_price: Option<f64>,
    pub total_amount: f64,
}

impl From<VendorCreate> for RecordCreate {
    fn from(value: VendorCreate) -> Self {
        RecordCreate::Vendor(value)
    }
}

impl From<CommodityCreate> for RecordCreate {
    fn from(value: CommodityCreate) -> Self {
        RecordCreate::Commodity(value)
    }
}

impl From<ContractCreate> for RecordCreate {
    fn from(value: ContractCreate) -> Self {
        RecordCreate::Contract(value)
    }
}

impl From<TransactionCreate> for RecordCreate {
    fn from(value: TransactionCreate) -> Self {
        RecordCreate::Transaction(value)
    }
}
