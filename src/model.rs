use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::{self, StatusError};

/// Availability of a product in the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
    Discontinued,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [
        StockStatus::InStock,
        StockStatus::OutOfStock,
        StockStatus::Discontinued,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::OutOfStock => "out_of_stock",
            StockStatus::Discontinued => "discontinued",
        }
    }

    pub fn label(self) -> &'static str {
        status::label_for(self)
    }

    pub fn style_class(self) -> &'static str {
        status::style_class_for(self)
    }
}

impl FromStr for StockStatus {
    type Err = StatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        StockStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| StatusError::UnrecognizedStatus(value.to_string()))
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Merchandising bucket shown next to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    New,
    Old,
    Fresh,
    #[default]
    #[serde(rename = "")]
    Unassigned,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::New => "New",
            Category::Old => "Old",
            Category::Fresh => "Fresh",
            Category::Unassigned => "",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub category: Category,
    pub price: f64,
    pub stock_quantity: u32,
    pub status: StockStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Revenue booked in a single calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: String,
    pub revenue: u64,
}

/// Headline figures rendered by the analytics summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub total_users: u64,
    pub total_products: u64,
    pub total_revenue: u64,
    pub active_sessions: u64,
    pub revenue_by_month: Vec<MonthlyRevenue>,
}

impl AnalyticsData {
    /// Month with the highest revenue; the earliest one wins a tie.
    pub fn peak_month(&self) -> Option<&MonthlyRevenue> {
        self.revenue_by_month
            .iter()
            .fold(None, |best: Option<&MonthlyRevenue>, entry| match best {
                Some(current) if current.revenue >= entry.revenue => Some(current),
                _ => Some(entry),
            })
    }

    pub fn revenue_window_total(&self) -> u64 {
        self.revenue_by_month
            .iter()
            .map(|entry| entry.revenue)
            .fold(0u64, u64::saturating_add)
    }
}
