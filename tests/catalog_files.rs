use std::path::PathBuf;

use inventory_dashboard::analytics::load_analytics;
use inventory_dashboard::catalog::load_products;
use inventory_dashboard::config::DashboardConfig;
use inventory_dashboard::logging;
use inventory_dashboard::StockStatus;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "inventory-dashboard-{}-{name}",
        std::process::id()
    ));
    std::fs::write(&path, contents).expect("write scratch file");
    path
}

#[tokio::test]
async fn loads_catalog_from_file() {
    logging::set_silent(true);
    let path = scratch_file(
        "valid.json",
        r#"[{"id": 5, "name": "Lime", "category": "Fresh", "price": 0.5,
             "stockQuantity": 900, "status": "in_stock"}]"#,
    );

    let products = load_products(&path).await.expect("load catalog");
    let _ = std::fs::remove_file(&path);

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].status, StockStatus::InStock);
    assert_eq!(products[0].status.label(), "In Stock");
}

#[tokio::test]
async fn unknown_status_in_file_is_reported() {
    logging::set_silent(true);
    let path = scratch_file(
        "invalid.json",
        r#"[{"id": 9, "name": "Durian", "category": "Old", "price": 14.0,
             "stockQuantity": 1, "status": "recalled"}]"#,
    );

    let err = load_products(&path).await.expect_err("unknown status");
    let _ = std::fs::remove_file(&path);

    let chain = format!("{err:#}");
    assert!(chain.contains("product 9 has an invalid status"), "{chain}");
    assert!(chain.contains("recalled"), "{chain}");
}

#[tokio::test]
async fn missing_file_names_the_path() {
    let config = DashboardConfig {
        catalog_path: Some(PathBuf::from("/nonexistent/products.json")),
        ..DashboardConfig::default()
    };

    let err = config.products().await.expect_err("missing file");
    assert!(format!("{err:#}").contains("/nonexistent/products.json"));
}

#[tokio::test]
async fn default_config_uses_mock_data() {
    logging::set_silent(true);
    let config = DashboardConfig::default();
    let products = config.products().await.expect("mock products");
    let analytics = config.analytics(&products).await.expect("mock analytics");

    assert_eq!(products.len(), 4);
    assert_eq!(analytics.total_products, 4);
    assert_eq!(analytics.revenue_by_month.len(), 6);
}

#[tokio::test]
async fn loads_analytics_from_configured_file() {
    logging::set_silent(true);
    let path = scratch_file(
        "analytics.json",
        r#"{"totalUsers": 50, "totalProducts": 9, "totalRevenue": 700,
            "activeSessions": 4,
            "revenueByMonth": [{"month": "Jul", "revenue": 300},
                               {"month": "Aug", "revenue": 400}]}"#,
    );

    let config = DashboardConfig {
        analytics_path: Some(path.clone()),
        ..DashboardConfig::default()
    };
    let products = config.products().await.expect("mock products");
    let analytics = config.analytics(&products).await.expect("analytics file");
    let direct = load_analytics(&path).await.expect("analytics file");
    let _ = std::fs::remove_file(&path);

    assert_eq!(analytics, direct);
    assert_eq!(analytics.total_products, 9, "file values win over the catalog size");
    assert_eq!(analytics.peak_month().map(|m| m.month.as_str()), Some("Aug"));
    assert_eq!(analytics.revenue_window_total(), 700);
}

#[tokio::test]
async fn missing_analytics_file_names_the_path() {
    let config = DashboardConfig {
        analytics_path: Some(PathBuf::from("/nonexistent/analytics.json")),
        ..DashboardConfig::default()
    };

    let err = config.analytics(&[]).await.expect_err("missing file");
    assert!(format!("{err:#}").contains("/nonexistent/analytics.json"));
}
