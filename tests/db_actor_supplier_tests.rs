mod common;

use common::{SINGLE_SOURCE_SPEND, TOTAL_SPEND, TOTAL_TRANSACTIONS, TempDb};
use spendlens::SpendlensError;
use spendlens::db::VendorCreate;

#[tokio::test]
async fn fresh_database_reports_zeroes() {
    let tmp = TempDb::new("fresh").await;

    let stats = tmp.db.supplier_stats().await.unwrap();
    assert_eq!(stats.total_vendors, 0);
    assert_eq!(stats.total_transactions, 0);
    assert!(stats.total_spend.abs() < f64::EPSILON);
    assert_eq!(stats.total_contracts, 0);

    assert!(tmp.db.top_vendors(10).await.unwrap().is_empty());
    assert!(tmp.db.spend_trends().await.unwrap().is_empty());

    let summary = tmp.db.general_summary().await.unwrap();
    assert_eq!(summary.vendors, 0);
    assert!(summary.spend.abs() < f64::EPSILON);

    tmp.cleanup().await;
}

#[tokio::test]
async fn vendor_create_upserts_by_key() {
    let tmp = TempDb::new("upsert").await;

    let vendor = VendorCreate {
        vendor_id: "V9".to_string(),
        vendor_name: "OLD NAME".to_string(),
        ..Default::default()
    };
    let first = tmp.db.create(vendor.clone()).await.unwrap();
    let second = tmp
        .db
        .create(VendorCreate {
            vendor_name: "NEW NAME".to_string(),
            ..vendor
        })
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(tmp.db.supplier_stats().await.unwrap().total_vendors, 1);

    tmp.cleanup().await;
}

#[tokio::test]
async fn dashboard_aggregates_over_seeded_data() {
    let tmp = TempDb::seeded("dashboard").await;
    let db = &tmp.db;

    // 1. Headline stats
    let stats = db.supplier_stats().await.unwrap();
    assert_eq!(stats.total_vendors, 4);
    assert_eq!(stats.total_transactions, TOTAL_TRANSACTIONS);
    assert!((stats.total_spend - TOTAL_SPEND).abs() < 1e-6);
    assert_eq!(stats.total_contracts, 3);

    // 2. Top vendors honour the limit and descend by spend
    let top = db.top_vendors(3).await.unwrap();
    let names: Vec<_> = top.iter().map(|v| v.vendor_name.as_str()).collect();
    assert_eq!(names, ["GULF FUELS", "ACME STEEL", "LONE STAR SUPPLY"]);
    assert!(top.windows(2).all(|w| w[0].total_spend >= w[1].total_spend));
    assert_eq!(top[1].transaction_count, 2);
    assert_eq!(top[1].avg_transaction_value, Some(400_000.0));

    // 3. Spend by category
    let categories = db.spend_by_category().await.unwrap();
    assert_eq!(categories.len(), 3);
    assert_eq!(categories[0].category, "DIESEL");
    assert_eq!(categories[1].category, "STEEL BAR");
    assert_eq!(categories[1].unique_vendors, 2);

    // 4. Spend trends: 16 dated months, capped to the latest 12
    let trends = db.spend_trends().await.unwrap();
    assert_eq!(trends.len(), 12);
    assert_eq!(trends[0].month.as_deref(), Some("2018-04"));
    assert_eq!(trends[11].month.as_deref(), Some("2017-05"));
    assert!(trends.windows(2).all(|w| w[0].month > w[1].month));
    assert_eq!(trends[0].unique_vendors, 2);

    // 5. Contract status counts
    let statuses = db.contract_status().await.unwrap();
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].contract_status.as_deref(), Some("Active"));
    assert_eq!(statuses[0].count, 2);

    tmp.cleanup().await;
}

#[tokio::test]
async fn report_pipelines_over_seeded_data() {
    let tmp = TempDb::seeded("pipelines").await;
    let db = &tmp.db;

    let consolidation = db.consolidation().await.unwrap();
    // (ACME, LONE STAR) and (LONE STAR, ACME), each 900k + 500k.
    assert_eq!(consolidation.duplicate_suppliers.len(), 2);
    assert!(
        consolidation
            .duplicate_suppliers
            .iter()
            .all(|p| (p.combined_spend - 1_400_000.0).abs() < 1e-6)
    );
    assert!(consolidation.commodity_overlap.is_empty());

    let risk = db.risk_assessment().await.unwrap();
    let commodities: Vec<_> = risk
        .single_source_suppliers
        .iter()
        .map(|s| s.commodity_name.as_str())
        .collect();
    assert_eq!(commodities, ["DIESEL", "COPY PAPER"]);
    let exposure: f64 = risk.single_source_suppliers.iter().map(|s| s.spend).sum();
    assert!((exposure - SINGLE_SOURCE_SPEND).abs() < 1e-6);
    assert_eq!(risk.high_value_suppliers.len(), 1);
    assert_eq!(risk.high_value_suppliers[0].vendor_name, "GULF FUELS");
    assert_eq!(risk.high_value_suppliers[0].commodity_count, 1);

    let executive = db.executive().await.unwrap();
    assert_eq!(executive.kpis.active_vendors, 4);
    assert_eq!(executive.kpis.total_transactions, TOTAL_TRANSACTIONS);
    assert_eq!(executive.kpis.commodity_categories, 3);
    assert_eq!(executive.performance_metrics.len(), 6);
    assert_eq!(
        executive.performance_metrics[0].month.as_deref(),
        Some("2018-04")
    );

    let analytics = db.spend_analytics().await.unwrap();
    assert_eq!(analytics.detailed_spend.len(), 3);
    assert_eq!(analytics.detailed_spend[0].category.as_deref(), Some("FUEL"));
    assert_eq!(analytics.detailed_spend[0].min_unit_price, Some(3.0));
    assert_eq!(analytics.detailed_spend[0].max_unit_price, Some(3.2));
    // No commodity has more than two suppliers.
    assert!(analytics.price_variation.is_empty());

    let summary = db.general_summary().await.unwrap();
    assert_eq!(summary.vendors, 4);
    assert_eq!(summary.transactions, TOTAL_TRANSACTIONS);
    assert!((summary.spend - TOTAL_SPEND).abs() < 1e-6);

    tmp.cleanup().await;
}

#[tokio::test]
async fn fragmented_commodity_surfaces_overlap_and_price_variation() {
    let tmp = TempDb::new("fragmented").await;
    common::seed_fragmented(&tmp.db).await;
    let db = &tmp.db;

    let consolidation = db.consolidation().await.unwrap();
    // EL PASO pair combines to 20k, under the 100k floor.
    assert!(consolidation.duplicate_suppliers.is_empty());
    assert_eq!(consolidation.commodity_overlap.len(), 1);
    let overlap = &consolidation.commodity_overlap[0];
    assert_eq!(overlap.commodity_name, "SAFETY GLOVES");
    assert_eq!(overlap.vendor_count, 6);
    assert!((overlap.total_spend - 6_000.0).abs() < 1e-6);

    let analytics = db.spend_analytics().await.unwrap();
    assert_eq!(analytics.detailed_spend.len(), 2);
    assert_eq!(analytics.price_variation.len(), 1);
    let variation = &analytics.price_variation[0];
    assert_eq!(variation.commodity_name, "SAFETY GLOVES");
    assert_eq!(variation.supplier_count, 6);
    assert!((variation.avg_price - 12.5).abs() < 1e-9);
    assert!((variation.min_price - 10.0).abs() < 1e-9);
    assert!((variation.max_price - 15.0).abs() < 1e-9);
    assert!((variation.price_variation_pct - 40.0).abs() < 1e-9);

    tmp.cleanup().await;
}

#[tokio::test]
async fn calls_after_shutdown_fail_with_actor_error() {
    let tmp = TempDb::new("shutdown").await;
    tmp.db.shutdown().await.unwrap();

    let result = tmp.db.supplier_stats().await;
    assert!(matches!(result, Err(SpendlensError::RactorError(_))));

    tmp.remove_files();
}
