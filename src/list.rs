use anyhow::Result;
use clap::Args;
use serde_json::json;

use crate::config::DashboardConfig;
use crate::logging;
use crate::model::{Product, StockStatus};
use crate::report::{inventory_rows, render_inventory_table};

#[derive(Debug, Args, Clone, Default)]
pub struct ListArgs {
    /// Emit rows as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Only list products with this status (in_stock, out_of_stock, discontinued)
    #[arg(short, long)]
    pub status: Option<StockStatus>,
}

pub fn filter_by_status(products: &[Product], status: Option<StockStatus>) -> Vec<Product> {
    products
        .iter()
        .filter(|product| status.map_or(true, |wanted| product.status == wanted))
        .cloned()
        .collect()
}

pub async fn run(config: &DashboardConfig, args: ListArgs) -> Result<()> {
    let products = config.products().await?;
    let selected = filter_by_status(&products, args.status);
    let rows = inventory_rows(&selected);

    logging::info(
        "products.list",
        "Listing products",
        json!({
            "total": products.len(),
            "shown": rows.len(),
            "status": args.status.map(StockStatus::as_str),
        }),
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_inventory_table(&rows));
    }
    Ok(())
}
