use std::path::PathBuf;

use anyhow::Result;

use crate::analytics::{load_analytics, mock_analytics};
use crate::catalog::{load_products, mock_products};
use crate::logging;
use crate::model::{AnalyticsData, Product};

/// Where the dashboard reads its data from. Unset paths fall back to the
/// built-in mock data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardConfig {
    pub catalog_path: Option<PathBuf>,
    pub analytics_path: Option<PathBuf>,
}

impl DashboardConfig {
    pub async fn products(&self) -> Result<Vec<Product>> {
        match &self.catalog_path {
            Some(path) => load_products(path).await,
            None => {
                logging::info_simple("catalog.mock", "Using built-in mock catalog");
                Ok(mock_products())
            }
        }
    }

    pub async fn analytics(&self, products: &[Product]) -> Result<AnalyticsData> {
        match &self.analytics_path {
            Some(path) => load_analytics(path).await,
            None => Ok(mock_analytics(products.len())),
        }
    }
}
