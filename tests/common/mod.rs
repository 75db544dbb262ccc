#![allow(dead_code)]

use chrono::NaiveDate;
use spendlens::db::{
    CommodityCreate, ContractCreate, DbActorHandle, TransactionCreate, VendorCreate,
};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seeded totals, see `seed`.
pub const TOTAL_SPEND: f64 = 3_132_050.0;
pub const TOTAL_TRANSACTIONS: i64 = 19;
pub const SINGLE_SOURCE_SPEND: f64 = 2_032_050.0;

pub struct TempDb {
    pub path: PathBuf,
    pub db: DbActorHandle,
}

impl TempDb {
    pub async fn new(label: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "spendlens-{label}-{}-{nanos}.sqlite",
            std::process::id()
        ));

        let database_url = format!("sqlite:{}", path.display());
        let db = spendlens::db::spawn(&database_url).await;
        Self { path, db }
    }

    pub async fn seeded(label: &str) -> Self {
        let tmp = Self::new(label).await;
        seed(&tmp.db).await;
        tmp
    }

    pub async fn cleanup(self) {
        let _ = self.db.shutdown().await;
        self.remove_files();
    }

    pub fn remove_files(&self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{suffix}", self.path.display()));
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

async fn vendor(db: &DbActorHandle, id: &str, name: &str, city: &str) {
    db.create(VendorCreate {
        vendor_id: id.to_string(),
        vendor_name: name.to_string(),
        city: Some(city.to_string()),
        state: Some("TX".to_string()),
        country: Some("US".to_string()),
    })
    .await
    .expect("failed to create vendor");
}

async fn commodity(db: &DbActorHandle, id: &str, name: &str, group: &str) {
    db.create(CommodityCreate {
        commodity_id: id.to_string(),
        commodity_name: name.to_string(),
        commodity_group: Some(group.to_string()),
    })
    .await
    .expect("failed to create commodity");
}

async fn purchase(
    db: &DbActorHandle,
    vendor_id: &str,
    commodity_id: &str,
    award_date: Option<NaiveDate>,
    unit_price: f64,
    total_amount: f64,
) {
    db.create(TransactionCreate {
        vendor_id: vendor_id.to_string(),
        commodity_id: commodity_id.to_string(),
        award_date,
        unit_price: Some(unit_price),
        total_amount,
    })
    .await
    .expect("failed to create transaction");
}

/// Four vendors (two sharing AUSTIN, TX), three commodities, three contracts.
///
/// - V1 ACME STEEL: 600k + 200k of STEEL BAR
/// - V2 LONE STAR SUPPLY: 300k of STEEL BAR
/// - V3 GULF FUELS: 1.5M + 500k of DIESEL (single source, high value)
/// - V4 PINE PAPER: 20k + 12 x 1k + 50 (undated) of COPY PAPER (single source)
///
/// Dated months: 2017-01..2017-12 and 2018-01..2018-04.
pub async fn seed(db: &DbActorHandle) {
    vendor(db, "V1", "ACME STEEL", "AUSTIN").await;
    vendor(db, "V2", "LONE STAR SUPPLY", "AUSTIN").await;
    vendor(db, "V3", "GULF FUELS", "HOUSTON").await;
    vendor(db, "V4", "PINE PAPER", "DALLAS").await;

    commodity(db, "C1", "STEEL BAR", "METALS").await;
    commodity(db, "C2", "DIESEL", "FUEL").await;
    commodity(db, "C3", "COPY PAPER", "OFFICE").await;

    for (id, status) in [("K1", "Active"), ("K2", "Active"), ("K3", "Expired")] {
        db.create(ContractCreate {
            contract_id: id.to_string(),
            contract_status: Some(status.to_string()),
        })
        .await
        .expect("failed to create contract");
    }

    purchase(db, "V1", "C1", date(2018, 1, 15), 100.0, 600_000.0).await;
    purchase(db, "V1", "C1", date(2018, 2, 20), 80.0, 200_000.0).await;
    purchase(db, "V2", "C1", date(2018, 2, 10), 150.0, 300_000.0).await;
    purchase(db, "V3", "C2", date(2018, 3, 5), 3.0, 1_500_000.0).await;
    purchase(db, "V3", "C2", date(2018, 4, 5), 3.2, 500_000.0).await;
    purchase(db, "V4", "C3", date(2018, 4, 10), 5.0, 20_000.0).await;
    for month in 1..=12 {
        purchase(db, "V4", "C3", date(2017, month, 1), 5.0, 1_000.0).await;
    }
    purchase(db, "V4", "C3", None, 5.0, 50.0).await;
}

/// Six vendors in six cities buying SAFETY GLOVES at unit prices 10..=15 (1k each), plus a
/// co-located pair in EL PASO buying TONER for 10k each.
///
/// Gloves overlap (6 vendors) and vary in price by 40%; the EL PASO pair stays under the
/// consolidation spend floor.
pub async fn seed_fragmented(db: &DbActorHandle) {
    commodity(db, "C9", "SAFETY GLOVES", "PPE").await;
    commodity(db, "C10", "TONER", "OFFICE").await;

    let suppliers = [
        ("AMARILLO", 10.0),
        ("LUBBOCK", 11.0),
        ("WACO", 12.0),
        ("TYLER", 13.0),
        ("LAREDO", 14.0),
        ("ODESSA", 15.0),
    ];
    for (i, (city, unit_price)) in suppliers.into_iter().enumerate() {
        let id = format!("G{i}");
        vendor(db, &id, &format!("GLOVE SUPPLIER {i}"), city).await;
        purchase(db, &id, "C9", date(2018, 5, 1), unit_price, 1_000.0).await;
    }

    vendor(db, "P1", "BORDER OFFICE", "EL PASO").await;
    vendor(db, "P2", "SUNLAND OFFICE", "EL PASO").await;
    purchase(db, "P1", "C10", date(2018, 5, 2), 40.0, 10_000.0).await;
    purchase(db, "P2", "C10", date(2018, 5, 3), 40.0, 10_000.0).await;
}
