use std::fmt::{self, Write};

use serde::Serialize;

use crate::constants::NAME_COLUMN_WIDTH;
use crate::model::{AnalyticsData, Category, Product, StockStatus};

/// A product row as the inventory list displays it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub stock_quantity: u32,
    pub status: StockStatus,
    pub status_label: &'static str,
    pub status_class: &'static str,
}

impl From<&Product> for InventoryRow {
    fn from(product: &Product) -> Self {
        InventoryRow {
            id: product.id,
            name: product.name.clone(),
            category: product.category,
            price: product.price,
            stock_quantity: product.stock_quantity,
            status: product.status,
            status_label: product.status.label(),
            status_class: product.status.style_class(),
        }
    }
}

pub fn inventory_rows(products: &[Product]) -> Vec<InventoryRow> {
    products.iter().map(InventoryRow::from).collect()
}

pub fn status_counts(products: &[Product]) -> [(StockStatus, usize); 3] {
    StockStatus::ALL.map(|status| {
        let count = products.iter().filter(|p| p.status == status).count();
        (status, count)
    })
}

pub fn render_inventory_table(rows: &[InventoryRow]) -> String {
    let mut out = String::new();
    // Writing into a String never fails.
    let _ = write_inventory_table(&mut out, rows);
    out
}

pub fn write_inventory_table(out: &mut impl Write, rows: &[InventoryRow]) -> fmt::Result {
    writeln!(
        out,
        "{:>4} | {:<width$} | {:<8} | {:>9} | {:>6} | {:<12}",
        "ID",
        "Name",
        "Category",
        "Price",
        "Qty",
        "Status",
        width = NAME_COLUMN_WIDTH
    )?;
    for row in rows {
        writeln!(
            out,
            "{:>4} | {:<width$} | {:<8} | {:>9.2} | {:>6} | {:<12}",
            row.id,
            row.name,
            row.category.as_str(),
            row.price,
            row.stock_quantity,
            row.status_label,
            width = NAME_COLUMN_WIDTH
        )?;
    }
    Ok(())
}

pub fn render_summary(analytics: &AnalyticsData, products: &[Product]) -> String {
    let mut out = String::new();
    let _ = write_summary(&mut out, analytics, products);
    out
}

pub fn write_summary(
    out: &mut impl Write,
    analytics: &AnalyticsData,
    products: &[Product],
) -> fmt::Result {
    writeln!(out, "Total users:     {}", analytics.total_users)?;
    writeln!(out, "Total products:  {}", analytics.total_products)?;
    writeln!(out, "Total revenue:   {}", analytics.total_revenue)?;
    writeln!(out, "Active sessions: {}", analytics.active_sessions)?;

    if !analytics.revenue_by_month.is_empty() {
        writeln!(out)?;
        writeln!(out, "Revenue by month")?;
        for entry in &analytics.revenue_by_month {
            writeln!(out, "  {:<4} {:>10}", entry.month, entry.revenue)?;
        }
        if let Some(peak) = analytics.peak_month() {
            writeln!(out, "  Peak: {} ({})", peak.month, peak.revenue)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Stock status")?;
    for (status, count) in status_counts(products) {
        writeln!(out, "  {:<14} {:>4}", status.label(), count)?;
    }
    Ok(())
}
