use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::logging;
use crate::model::{Category, Product};
use crate::status::StatusError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed product catalog")]
    Json(#[from] serde_json::Error),
    #[error("product {id} has an invalid status")]
    Status {
        id: u32,
        #[source]
        source: StatusError,
    },
    #[error("product {id} has an unreadable createdAt {value:?}")]
    CreatedAt { id: u32, value: String },
}

/// Product record as it arrives from a file, before its status is checked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: u32,
    name: String,
    #[serde(default)]
    category: Category,
    price: f64,
    stock_quantity: u32,
    status: String,
    #[serde(default)]
    created_at: Option<String>,
}

/// Accepts a full RFC 3339 timestamp or a bare date, taken as midnight UTC.
fn parse_created_at(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let status = record
            .status
            .parse()
            .map_err(|source| CatalogError::Status {
                id: record.id,
                source,
            })?;
        let created_at = match record.created_at {
            Some(value) => Some(
                parse_created_at(&value)
                    .ok_or(CatalogError::CreatedAt { id: record.id, value })?,
            ),
            None => None,
        };

        Ok(Product {
            id: record.id,
            name: record.name,
            category: record.category,
            price: record.price,
            stock_quantity: record.stock_quantity,
            status,
            created_at,
        })
    }
}

pub fn mock_products() -> Vec<Product> {
    use crate::model::StockStatus::*;

    let rows = [
        (1, "Apple", Category::Fresh, 23.0, 123, Discontinued),
        (2, "Banana", Category::New, 25.0, 456, InStock),
        (3, "Orange", Category::Old, 12.0, 345, OutOfStock),
        (4, "Mango", Category::New, 12.0, 345, InStock),
    ];

    rows.into_iter()
        .map(|(id, name, category, price, stock_quantity, status)| Product {
            id,
            name: name.to_string(),
            category,
            price,
            stock_quantity,
            status,
            created_at: None,
        })
        .collect()
}

pub fn parse_products(json: &str) -> Result<Vec<Product>, CatalogError> {
    let records: Vec<ProductRecord> = serde_json::from_str(json)?;
    records.into_iter().map(Product::try_from).collect()
}

pub async fn load_products(path: &Path) -> Result<Vec<Product>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read product catalog at {:?}", path))?;
    let products = parse_products(&raw)
        .with_context(|| format!("failed to parse product catalog at {:?}", path))?;

    logging::info(
        "catalog.load",
        "Product catalog loaded",
        json!({ "path": path.display().to_string(), "products": products.len() }),
    );
    Ok(products)
}
